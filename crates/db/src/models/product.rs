//! Product entity model and its conversion to the transfer record.

use catalog_core::product::ProductDto;
use catalog_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: DbId,
    pub item_id: String,
    pub size_label: String,
    pub barcode: String,
    pub color: String,
    pub price: Decimal,
}

impl From<Product> for ProductDto {
    fn from(row: Product) -> Self {
        Self {
            id: Some(row.id),
            item_id: Some(row.item_id),
            size_label: Some(row.size_label),
            barcode: Some(row.barcode),
            color: Some(row.color),
            price: Some(row.price),
        }
    }
}
