//! Catalog construction and item resolution.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::data;

/// A single inventory item and the supplier it is ordered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub name: String,
    pub supplier: String,
}

/// A supplier and its items, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    name: String,
    items: Vec<InventoryItem>,
}

impl Supplier {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }
}

/// Catalog construction error.
///
/// Item names must be unique under case-insensitive comparison across all
/// suppliers; a collision in the source table is a configuration error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate item name (case-insensitive): {0}")]
    DuplicateItem(String),
}

/// Authoritative item→supplier resolution.
///
/// Built once at startup and read-only afterwards. Supplier and item
/// iteration order is the source-table order; lookups are case-insensitive
/// exact matches (no fuzzy or partial matching).
#[derive(Debug, Clone)]
pub struct Catalog {
    suppliers: Vec<Supplier>,
    by_name: HashMap<String, InventoryItem>,
}

impl Catalog {
    /// Build a catalog from a supplier → item-names table.
    pub fn from_table(table: &[(&str, &[&str])]) -> Result<Self, CatalogError> {
        let mut suppliers = Vec::with_capacity(table.len());
        let mut by_name = HashMap::new();

        for (supplier, names) in table {
            let mut items = Vec::with_capacity(names.len());
            for name in *names {
                let item = InventoryItem {
                    name: (*name).to_string(),
                    supplier: (*supplier).to_string(),
                };
                if by_name.insert(name.to_lowercase(), item.clone()).is_some() {
                    return Err(CatalogError::DuplicateItem((*name).to_string()));
                }
                items.push(item);
            }
            suppliers.push(Supplier {
                name: (*supplier).to_string(),
                items,
            });
        }

        Ok(Self { suppliers, by_name })
    }

    /// Load the compiled-in table.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_table(data::BUILTIN_ITEMS)
    }

    /// Case-insensitive exact match against item display names.
    pub fn resolve(&self, name: &str) -> Option<&InventoryItem> {
        self.by_name.get(&name.to_lowercase())
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// All item display names, in catalog order.
    pub fn item_names(&self) -> Vec<&str> {
        self.suppliers
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.name.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn builtin_catalog_loads_all_items() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.suppliers().len(), 3);
        assert_eq!(catalog.len(), 32);
        assert_eq!(catalog.item_names().len(), 32);
    }

    #[test]
    fn resolve_matches_any_casing() {
        let catalog = Catalog::builtin().unwrap();

        for query in ["Sugar", "sugar", "SUGAR", "sUgAr"] {
            let item = catalog.resolve(query).expect("known item");
            assert_eq!(item.name, "Sugar");
            assert_eq!(item.supplier, "FARINEX");
        }
    }

    #[test]
    fn resolve_handles_non_ascii_names() {
        let catalog = Catalog::builtin().unwrap();

        let item = catalog.resolve("raspberry purée").expect("known item");
        assert_eq!(item.name, "Raspberry Purée");
        assert_eq!(item.supplier, "FARINEX");
    }

    #[test]
    fn resolve_rejects_unknown_and_partial_names() {
        let catalog = Catalog::builtin().unwrap();

        assert!(catalog.resolve("Unobtainium").is_none());
        assert!(catalog.resolve("Sug").is_none());
        assert!(catalog.resolve("").is_none());
    }

    #[test]
    fn duplicate_names_across_suppliers_fail_construction() {
        let table: &[(&str, &[&str])] = &[
            ("FARINEX", &["Sugar", "Flour"]),
            ("COSTCO", &["Honey", "SUGAR"]),
        ];

        let err = Catalog::from_table(table).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateItem("SUGAR".to_string()));
    }

    #[test]
    fn iteration_order_follows_source_table() {
        let catalog = Catalog::builtin().unwrap();

        let suppliers: Vec<&str> = catalog.suppliers().iter().map(|s| s.name()).collect();
        assert_eq!(suppliers, ["FARINEX", "AGROPUR", "COSTCO"]);

        let names = catalog.item_names();
        assert_eq!(names[0], "Cake Cheese");
        assert_eq!(names[8], "Milk");
        assert_eq!(names[31], "Toilet Cleaner");
    }

    proptest! {
        #[test]
        fn resolve_is_casing_invariant(
            idx in 0usize..32,
            flips in prop::collection::vec(any::<bool>(), 64),
        ) {
            let catalog = Catalog::builtin().unwrap();
            let names = catalog.item_names();
            let name = names[idx % names.len()];

            let mangled: String = name
                .chars()
                .zip(flips.iter().cycle())
                .map(|(c, upper)| {
                    if *upper {
                        c.to_uppercase().next().unwrap_or(c)
                    } else {
                        c.to_lowercase().next().unwrap_or(c)
                    }
                })
                .collect();

            let item = catalog.resolve(&mangled).expect("mangled casing must resolve");
            prop_assert_eq!(item.name.as_str(), name);
        }
    }
}
