//! Product transfer record and business-field validation.
//!
//! [`ProductDto`] is the boundary shape: every field is nullable so that
//! partially populated input can be deserialized before it is checked.
//! [`ProductFields`] is the validated set of the five business fields and is
//! the only thing the repository layer accepts for writes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in `CoreError::NotFound`.
pub const PRODUCT_ENTITY: &str = "Product";

/// Maximum length of `item_id` in characters.
pub const MAX_ITEM_ID_LEN: usize = 100;

/// Maximum length of `size_label` in characters.
pub const MAX_SIZE_LABEL_LEN: usize = 50;

/// Maximum length of `barcode` in characters.
pub const MAX_BARCODE_LEN: usize = 50;

/// Maximum length of `color` in characters.
pub const MAX_COLOR_LEN: usize = 50;

/// Fractional digits the `price` column stores.
pub const PRICE_SCALE: u32 = 2;

/// Largest storable price, `NUMERIC(18, 2)`: 9999999999999999.99.
pub const MAX_PRICE: Decimal = Decimal::from_parts(0xA763_FFFF, 0x0DE0_B6B3, 0, false, PRICE_SCALE);

// ---------------------------------------------------------------------------
// Transfer record
// ---------------------------------------------------------------------------

/// Boundary-facing product representation used in requests and responses.
///
/// Legacy field names (`itemId`, `beden`, `barkod`, `renk`) are accepted on
/// input; output always uses the canonical names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: Option<DbId>,
    #[serde(alias = "itemId")]
    pub item_id: Option<String>,
    #[serde(alias = "beden")]
    pub size_label: Option<String>,
    #[serde(alias = "barkod")]
    pub barcode: Option<String>,
    #[serde(alias = "renk")]
    pub color: Option<String>,
    pub price: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Validated business fields
// ---------------------------------------------------------------------------

/// The five business fields of a catalog record, after validation.
///
/// Carries no identity. The store assigns `id` on insert and updates are
/// keyed separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub item_id: String,
    pub size_label: String,
    pub barcode: String,
    pub color: String,
    pub price: Decimal,
}

impl TryFrom<&ProductDto> for ProductFields {
    type Error = CoreError;

    /// Validate a transfer record. Any supplied `id` is ignored.
    fn try_from(dto: &ProductDto) -> Result<Self, Self::Error> {
        Ok(Self {
            item_id: validate_text("item_id", dto.item_id.as_deref(), MAX_ITEM_ID_LEN)?,
            size_label: validate_text("size_label", dto.size_label.as_deref(), MAX_SIZE_LABEL_LEN)?,
            barcode: validate_text("barcode", dto.barcode.as_deref(), MAX_BARCODE_LEN)?,
            color: validate_text("color", dto.color.as_deref(), MAX_COLOR_LEN)?,
            price: validate_price(dto.price)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a required text field.
///
/// The value must be present, must contain at least one non-whitespace
/// character, and must not exceed `max_len` characters. The value is
/// returned unchanged (no trimming on write).
pub fn validate_text(field: &str, value: Option<&str>, max_len: usize) -> Result<String, CoreError> {
    let value = value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))?;

    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }

    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters, got {len}"
        )));
    }

    Ok(value.to_string())
}

/// Validate that a price is present, non-negative and storable without
/// rounding.
///
/// Trailing zeros do not count against the scale, so `1.500` is accepted
/// while `1.999` is rejected.
pub fn validate_price(price: Option<Decimal>) -> Result<Decimal, CoreError> {
    let price = price.ok_or_else(|| CoreError::Validation("price is required".to_string()))?;
    if price < Decimal::ZERO {
        return Err(CoreError::Validation(format!(
            "price must be non-negative, got {price}"
        )));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(CoreError::Validation(format!(
            "price must have at most {PRICE_SCALE} decimal places, got {price}"
        )));
    }
    if price > MAX_PRICE {
        return Err(CoreError::Validation(format!(
            "price must be at most {MAX_PRICE}, got {price}"
        )));
    }
    Ok(price)
}

/// Extract the id an update is keyed by.
///
/// A missing or non-positive id is a validation failure, not a not-found.
pub fn require_update_id(dto: &ProductDto) -> Result<DbId, CoreError> {
    match dto.id {
        Some(id) if id > 0 => Ok(id),
        Some(id) => Err(CoreError::Validation(format!(
            "id must be positive for update, got {id}"
        ))),
        None => Err(CoreError::Validation("id is required for update".to_string())),
    }
}
