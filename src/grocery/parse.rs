//! Ingredient string parsing.
//!
//! Recipe ingredients arrive as free text ("2 cups flour", "1/2 tsp salt",
//! "salt to taste"). Aggregation needs a name to merge on and a quantity to
//! carry along, so this module splits the leading amount-and-unit prefix
//! from the rest. The quantity stays free text; nothing here converts
//! units or normalizes amounts.

/// Result of splitting a raw ingredient string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIngredient {
    /// Leading amount + unit, verbatim ("2 cups", "1/2 tsp"), if any.
    pub quantity: Option<String>,
    /// The ingredient name, original casing preserved.
    pub name: String,
}

const UNITS: &[&str] = &[
    "cup", "cups", "tablespoon", "tablespoons", "tbsp", "teaspoon", "teaspoons", "tsp",
    "gram", "grams", "g", "kg", "kilogram", "kilograms", "mg",
    "ml", "milliliter", "milliliters", "l", "liter", "liters", "litre", "litres",
    "oz", "ounce", "ounces", "lb", "lbs", "pound", "pounds",
    "pinch", "pinches", "dash", "clove", "cloves", "can", "cans", "jar", "jars",
    "slice", "slices", "piece", "pieces", "bunch", "bunches", "handful", "handfuls",
    "stick", "sticks", "sprig", "sprigs", "stalk", "stalks", "head", "heads",
];

const UNICODE_FRACTIONS: &[char] = &['½', '⅓', '⅔', '¼', '¾', '⅕', '⅛', '⅜', '⅝', '⅞'];

/// Token made of digits, fraction, decimal, or range characters, with at
/// least one actual digit or fraction glyph ("2", "1/2", "1.5", "1-2", "½").
fn is_amount_token(token: &str) -> bool {
    let mut has_numeric = false;
    for c in token.chars() {
        if c.is_ascii_digit() || UNICODE_FRACTIONS.contains(&c) {
            has_numeric = true;
        } else if !matches!(c, '.' | '/' | '-') {
            return false;
        }
    }
    has_numeric
}

fn is_unit_token(token: &str) -> bool {
    let lowered = token.trim_end_matches('.').to_lowercase();
    UNITS.contains(&lowered.as_str())
}

/// Split `raw` into an optional quantity prefix and the ingredient name.
///
/// Consumes leading amount tokens, then at most one unit word, then an
/// optional "of" ("2 cups of flour"). A string with no leading amount, or
/// nothing left after the prefix, is treated as all name.
pub fn parse_ingredient(raw: &str) -> ParsedIngredient {
    let tokens: Vec<&str> = raw.split_whitespace().collect();

    let mut quantity_end = 0;
    while quantity_end < tokens.len() && is_amount_token(tokens[quantity_end]) {
        quantity_end += 1;
    }
    if quantity_end > 0 && quantity_end < tokens.len() && is_unit_token(tokens[quantity_end]) {
        quantity_end += 1;
    }

    let mut name_start = quantity_end;
    if quantity_end > 0
        && name_start < tokens.len()
        && tokens[name_start].eq_ignore_ascii_case("of")
    {
        name_start += 1;
    }

    if quantity_end == 0 || name_start >= tokens.len() {
        return ParsedIngredient {
            quantity: None,
            name: tokens.join(" "),
        };
    }

    ParsedIngredient {
        quantity: Some(tokens[..quantity_end].join(" ")),
        name: tokens[name_start..].join(" "),
    }
}

/// Merge key for aggregation: trimmed, lowercased, inner whitespace
/// collapsed. Literal matching only: "egg" and "eggs" stay distinct.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
