use super::Catalog;
use crate::models::CatalogEntry;

impl Catalog {
    /// Built-in grocery table used when no catalog file is configured
    pub fn reference() -> Self {
        let entries = vec![
            CatalogEntry::new("milk", "Dairy", 3.99).with_alternatives(&[
                "almond milk",
                "oat milk",
                "soy milk",
            ]),
            CatalogEntry::new("almond milk", "Dairy", 4.49)
                .with_alternatives(&["oat milk", "soy milk"]),
            CatalogEntry::new("oat milk", "Dairy", 4.99)
                .with_alternatives(&["almond milk", "soy milk"]),
            CatalogEntry::new("bread", "Bakery", 2.99).with_alternatives(&["bagels", "tortillas"]),
            CatalogEntry::new("apples", "Produce", 1.99)
                .with_alternatives(&["oranges", "pears"])
                .seasonal(),
            CatalogEntry::new("bananas", "Produce", 0.99)
                .with_alternatives(&["plantains"])
                .seasonal(),
            CatalogEntry::new("oranges", "Produce", 2.49)
                .with_alternatives(&["apples", "grapefruits"])
                .seasonal(),
            CatalogEntry::new("water", "Beverages", 0.99).with_alternatives(&["sparkling water"]),
            CatalogEntry::new("eggs", "Dairy", 4.99),
            CatalogEntry::new("cheese", "Dairy", 5.99).with_alternatives(&["vegan cheese"]),
            CatalogEntry::new("chicken", "Meat", 7.99).with_alternatives(&["tofu", "turkey"]),
            CatalogEntry::new("rice", "Grains", 3.49).with_alternatives(&["quinoa", "couscous"]),
            CatalogEntry::new("pasta", "Grains", 1.99).with_alternatives(&["rice noodles"]),
            CatalogEntry::new("toothpaste", "Personal Care", 3.99)
                .with_alternatives(&["tooth powder"]),
            CatalogEntry::new("shampoo", "Personal Care", 6.99).with_alternatives(&["soap bars"]),
            CatalogEntry::new("chips", "Snacks", 3.49).with_alternatives(&["crackers", "popcorn"]),
            CatalogEntry::new("cookies", "Snacks", 4.49).with_alternatives(&["granola bars"]),
            CatalogEntry::new("tomatoes", "Produce", 2.99)
                .with_alternatives(&["cherry tomatoes"])
                .seasonal(),
            CatalogEntry::new("lettuce", "Produce", 1.99)
                .with_alternatives(&["spinach", "kale"])
                .seasonal(),
            CatalogEntry::new("yogurt", "Dairy", 4.49).with_alternatives(&["greek yogurt"]),
            CatalogEntry::new("coffee", "Beverages", 8.99).with_alternatives(&["tea"]),
        ];

        Self::from_reference_entries(entries)
    }

    fn from_reference_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            catalog.by_name.insert(entry.name.clone(), catalog.entries.len());
            catalog.entries.push(entry);
        }
        catalog
    }
}
