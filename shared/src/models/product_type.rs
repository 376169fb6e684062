//! Product Type Model

use super::{Status, impl_catalog_record};
use serde::{Deserialize, Serialize};

/// Product type entity
///
/// Electronic product types require per-unit serial tracking on stock entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductType {
    pub id: i64,
    pub name: String,
    /// Explicit per-unit tracking flag; older records omit it
    #[serde(default)]
    pub is_electronic: Option<bool>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ProductType {
    /// Whether stock entries of this type are tracked per unit
    ///
    /// The explicit flag wins. Records without it fall back to matching
    /// "electronic" anywhere in the name, case-insensitively.
    pub fn is_electronic(&self) -> bool {
        self.is_electronic
            .unwrap_or_else(|| name_looks_electronic(&self.name))
    }
}

/// Legacy detection by type name
pub fn name_looks_electronic(name: &str) -> bool {
    name.to_lowercase().contains("electronic")
}

impl_catalog_record!(ProductType);

#[cfg(test)]
mod tests {
    use super::*;

    fn product_type(name: &str, flag: Option<bool>) -> ProductType {
        ProductType {
            id: 1,
            name: name.to_string(),
            is_electronic: flag,
            status: Status::Active,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_explicit_flag_wins() {
        assert!(product_type("Furniture", Some(true)).is_electronic());
        assert!(!product_type("Consumer Electronics", Some(false)).is_electronic());
    }

    #[test]
    fn test_name_fallback_is_case_insensitive_substring() {
        assert!(product_type("Consumer ELECTRONICS", None).is_electronic());
        assert!(product_type("electronic", None).is_electronic());
        assert!(!product_type("Electric kettle", None).is_electronic());
    }
}
