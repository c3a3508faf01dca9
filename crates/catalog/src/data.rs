//! Built-in supplier → items table.
//!
//! The catalog ships compiled into the binary; there is no external storage.
//! Supplier and item order here is the order the front end renders, so keep
//! it stable.

pub const BUILTIN_ITEMS: &[(&str, &[&str])] = &[
    (
        "FARINEX",
        &[
            "Cake Cheese",
            "Sugar",
            "Flour",
            "Egg Yolk",
            "Chocolate Chips",
            "Cocoa Powder",
            "Corn Starch",
            "Raspberry Purée",
        ],
    ),
    ("AGROPUR", &["Milk", "Cream", "Butter"]),
    (
        "COSTCO",
        &[
            "Egg Whites",
            "Baking Powder",
            "Honey",
            "Choco chips for Choco Tart",
            "White Choco for Matcha Tart",
            "Small Garbage Bags (white)",
            "Medium Garbage Bags",
            "Large Garbage Bags",
            "Brown Paper Bags (Uber)",
            "Tart Individual #3",
            "Tart Individual #8",
            "Cooking Paper Sheets",
            "Brown Paper Rolls",
            "Toilet Paper Rolls",
            "Poly Gloves (Cheaper one)",
            "Vinyl Gloves (For Cheese cutting)",
            "Bleach",
            "Hand soap",
            "Windex",
            "Pinesol",
            "Toilet Cleaner",
        ],
    ),
];
