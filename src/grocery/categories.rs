//! Grocery store categories.
//!
//! A fixed keyword table maps ingredient names to display categories.
//! Declaration order is both the match precedence and the display order,
//! so multi-word keywords in earlier categories win over generic keywords
//! later ("bell pepper" lands in Produce before the generic "pepper"
//! spice keyword is consulted). Anything unmatched falls into "Other".

/// A display category: name, emoji, and the keywords that route
/// ingredients into it.
#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    pub emoji: &'static str,
    keywords: &'static [&'static str],
}

/// Category table in display order. "Other" is last and matches nothing
/// by keyword; it only receives fallthrough.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Produce",
        emoji: "🥬",
        keywords: &[
            "apple", "banana", "berr", "grape", "lemon", "lime", "orange", "peach", "pear",
            "melon", "mango", "avocado", "eggplant", "tomato", "onion", "garlic", "potato",
            "carrot", "bell pepper", "jalape", "lettuce", "spinach", "kale", "broccoli",
            "cauliflower", "cucumber", "celery", "mushroom", "zucchini", "squash", "cabbage",
            "corn", "green bean", "peas", "asparagus", "cilantro", "parsley", "basil", "mint",
            "thyme", "rosemary", "ginger", "scallion", "leek", "shallot", "salad",
        ],
    },
    Category {
        name: "Meat & Seafood",
        emoji: "🥩",
        keywords: &[
            "chicken", "beef", "pork", "turkey", "bacon", "sausage", "ham", "lamb", "steak",
            "salmon", "shrimp", "tuna", "cod", "tilapia", "fish", "crab", "scallop",
        ],
    },
    Category {
        name: "Dairy & Eggs",
        emoji: "🥛",
        keywords: &[
            "milk", "cheese", "butter", "yogurt", "cream", "egg", "mozzarella", "parmesan",
            "cheddar", "feta", "ricotta",
        ],
    },
    Category {
        name: "Bakery",
        emoji: "🍞",
        keywords: &[
            "bread", "bun", "roll", "tortilla", "bagel", "pita", "baguette", "croissant", "naan",
        ],
    },
    Category {
        name: "Frozen",
        emoji: "🧊",
        keywords: &["frozen", "ice cream", "popsicle"],
    },
    Category {
        name: "Pantry",
        emoji: "🥫",
        keywords: &[
            "flour", "sugar", "rice", "pasta", "spaghetti", "noodle", "bean", "lentil",
            "chickpea", "quinoa", "oat", "cereal", "oil", "vinegar", "soy sauce", "sauce",
            "salsa", "broth", "stock", "honey", "syrup", "peanut", "almond", "walnut",
            "cashew", "nut", "chocolate", "cocoa", "vanilla", "baking powder", "baking soda",
            "yeast", "breadcrumb", "tomato paste",
        ],
    },
    Category {
        name: "Spices & Seasonings",
        emoji: "🧂",
        keywords: &[
            "salt", "pepper", "cumin", "paprika", "oregano", "cinnamon", "chili powder",
            "curry", "turmeric", "nutmeg", "clove", "cayenne", "seasoning", "spice",
        ],
    },
    Category {
        name: "Beverages",
        emoji: "🧃",
        keywords: &["juice", "coffee", "tea", "soda", "sparkling water", "wine", "beer"],
    },
    Category {
        name: "Other",
        emoji: "🛒",
        keywords: &[],
    },
];

/// Assign a normalized (lowercased) ingredient name to exactly one
/// category: the first whose keyword occurs in the name, else "Other".
pub fn categorize(normalized_name: &str) -> &'static Category {
    CATEGORIES
        .iter()
        .find(|category| {
            category
                .keywords
                .iter()
                .any(|keyword| normalized_name.contains(keyword))
        })
        .unwrap_or(other())
}

/// Case-insensitive lookup by category name, for custom items that carry
/// an explicit category.
pub fn by_name(name: &str) -> Option<&'static Category> {
    CATEGORIES
        .iter()
        .find(|category| category.name.eq_ignore_ascii_case(name.trim()))
}

/// The fallthrough category.
pub fn other() -> &'static Category {
    &CATEGORIES[CATEGORIES.len() - 1]
}
