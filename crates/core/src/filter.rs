//! Catalog query criteria and their normalization into equality predicates.
//!
//! A [`ProductQueryFilter`] arrives from the wire with any subset of fields
//! populated. [`ProductFilter::from_criteria`] keeps only the fields that
//! actually constrain the result:
//!
//! - a string field counts when it is present and non-empty after trimming,
//!   and is compared against the trimmed value;
//! - `id` counts when it is present and strictly positive.
//!
//! The surviving predicates are combined with AND. A filter with no
//! predicates matches every record.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Wire criteria
// ---------------------------------------------------------------------------

/// Partially populated equality constraints, as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQueryFilter {
    pub id: Option<DbId>,
    #[serde(alias = "barkod")]
    pub barcode: Option<String>,
    #[serde(alias = "renk")]
    pub color: Option<String>,
    #[serde(alias = "itemId")]
    pub item_id: Option<String>,
    #[serde(alias = "beden")]
    pub size_label: Option<String>,
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// A single exact-match constraint on one catalog column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductPredicate {
    Id(DbId),
    Barcode(String),
    Color(String),
    ItemId(String),
    SizeLabel(String),
}

impl ProductPredicate {
    /// Column the predicate applies to.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id(_) => "id",
            Self::Barcode(_) => "barcode",
            Self::Color(_) => "color",
            Self::ItemId(_) => "item_id",
            Self::SizeLabel(_) => "size_label",
        }
    }
}

/// Trim a criteria string, returning `None` when nothing is left.
fn participating(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Normalized conjunction
// ---------------------------------------------------------------------------

/// Conjunction of equality predicates, at most one per column.
///
/// `None` in a slot means the column is unconstrained. The repository layer
/// binds each slot directly as `($n IS NULL OR column = $n)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub id: Option<DbId>,
    pub barcode: Option<String>,
    pub color: Option<String>,
    pub item_id: Option<String>,
    pub size_label: Option<String>,
}

impl ProductFilter {
    /// Build the conjunction from raw criteria, dropping absent, blank, and
    /// non-positive constraints.
    pub fn from_criteria(criteria: &ProductQueryFilter) -> Self {
        let candidates = [
            criteria.id.filter(|id| *id > 0).map(ProductPredicate::Id),
            participating(criteria.barcode.as_deref()).map(ProductPredicate::Barcode),
            participating(criteria.color.as_deref()).map(ProductPredicate::Color),
            participating(criteria.item_id.as_deref()).map(ProductPredicate::ItemId),
            participating(criteria.size_label.as_deref()).map(ProductPredicate::SizeLabel),
        ];

        candidates
            .into_iter()
            .flatten()
            .fold(Self::default(), Self::and)
    }

    /// Add a predicate to the conjunction.
    ///
    /// A second predicate on the same column replaces the first.
    pub fn and(mut self, predicate: ProductPredicate) -> Self {
        match predicate {
            ProductPredicate::Id(v) => self.id = Some(v),
            ProductPredicate::Barcode(v) => self.barcode = Some(v),
            ProductPredicate::Color(v) => self.color = Some(v),
            ProductPredicate::ItemId(v) => self.item_id = Some(v),
            ProductPredicate::SizeLabel(v) => self.size_label = Some(v),
        }
        self
    }

    /// The active predicates, in column order.
    pub fn predicates(&self) -> Vec<ProductPredicate> {
        let mut out = Vec::new();
        if let Some(id) = self.id {
            out.push(ProductPredicate::Id(id));
        }
        if let Some(v) = &self.barcode {
            out.push(ProductPredicate::Barcode(v.clone()));
        }
        if let Some(v) = &self.color {
            out.push(ProductPredicate::Color(v.clone()));
        }
        if let Some(v) = &self.item_id {
            out.push(ProductPredicate::ItemId(v.clone()));
        }
        if let Some(v) = &self.size_label {
            out.push(ProductPredicate::SizeLabel(v.clone()));
        }
        out
    }

    /// Names of the constrained columns, for logging.
    pub fn columns(&self) -> Vec<&'static str> {
        self.predicates().iter().map(ProductPredicate::column).collect()
    }

    /// True when no column is constrained (equivalent to "list all").
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&ProductQueryFilter> for ProductFilter {
    fn from(criteria: &ProductQueryFilter) -> Self {
        Self::from_criteria(criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria() -> ProductQueryFilter {
        ProductQueryFilter::default()
    }

    // -----------------------------------------------------------------------
    // Unconstrained shapes
    // -----------------------------------------------------------------------

    #[test]
    fn empty_criteria_is_unconstrained() {
        let filter = ProductFilter::from_criteria(&criteria());
        assert!(filter.is_unconstrained());
        assert!(filter.predicates().is_empty());
    }

    #[test]
    fn blank_strings_do_not_participate() {
        let filter = ProductFilter::from_criteria(&ProductQueryFilter {
            barcode: Some(String::new()),
            color: Some("   ".to_string()),
            item_id: Some("\t\n".to_string()),
            size_label: Some(" ".to_string()),
            ..criteria()
        });
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn non_positive_id_does_not_participate() {
        for id in [0, -1, i64::MIN] {
            let filter = ProductFilter::from_criteria(&ProductQueryFilter {
                id: Some(id),
                ..criteria()
            });
            assert!(filter.is_unconstrained(), "id {id} should be ignored");
        }
    }

    #[test]
    fn non_positive_id_leaves_other_fields_applied() {
        let filter = ProductFilter::from_criteria(&ProductQueryFilter {
            id: Some(0),
            color: Some("Mavi".to_string()),
            ..criteria()
        });
        assert_eq!(filter.id, None);
        assert_eq!(filter.color.as_deref(), Some("Mavi"));
    }

    // -----------------------------------------------------------------------
    // Participating fields
    // -----------------------------------------------------------------------

    #[test]
    fn positive_id_participates() {
        let filter = ProductFilter::from_criteria(&ProductQueryFilter {
            id: Some(3),
            ..criteria()
        });
        assert_eq!(filter.predicates(), vec![ProductPredicate::Id(3)]);
    }

    #[test]
    fn string_values_are_trimmed() {
        let filter = ProductFilter::from_criteria(&ProductQueryFilter {
            barcode: Some("  B1 ".to_string()),
            ..criteria()
        });
        assert_eq!(filter.barcode.as_deref(), Some("B1"));
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let filter = ProductFilter::from_criteria(&ProductQueryFilter {
            color: Some(" Koyu Mavi ".to_string()),
            ..criteria()
        });
        assert_eq!(filter.color.as_deref(), Some("Koyu Mavi"));
    }

    #[test]
    fn all_fields_combine() {
        let filter = ProductFilter::from_criteria(&ProductQueryFilter {
            id: Some(1),
            barcode: Some("B1".to_string()),
            color: Some("Mavi".to_string()),
            item_id: Some("I1".to_string()),
            size_label: Some("S".to_string()),
        });
        assert_eq!(
            filter.columns(),
            vec!["id", "barcode", "color", "item_id", "size_label"]
        );
    }

    #[test]
    fn and_replaces_same_column() {
        let filter = ProductFilter::default()
            .and(ProductPredicate::Color("Mavi".to_string()))
            .and(ProductPredicate::Color("Siyah".to_string()));
        assert_eq!(filter.predicates(), vec![ProductPredicate::Color("Siyah".to_string())]);
    }

    #[test]
    fn legacy_names_deserialize() {
        let criteria: ProductQueryFilter = serde_json::from_value(serde_json::json!({
            "renk": "Mavi",
            "beden": "M"
        }))
        .unwrap();
        let filter = ProductFilter::from(&criteria);
        assert_eq!(filter.color.as_deref(), Some("Mavi"));
        assert_eq!(filter.size_label.as_deref(), Some("M"));
    }
}
