//! Repository for the `products` table.

use catalog_core::filter::ProductFilter;
use catalog_core::product::ProductFields;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, item_id, size_label, barcode, color, price";

/// Provides CRUD and filtered lookup for catalog products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &ProductFields) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (item_id, size_label, barcode, color, price) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.item_id)
            .bind(&input.size_label)
            .bind(&input.barcode)
            .bind(&input.color)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every product, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// List products matching every constrained column of `filter`.
    ///
    /// Unconstrained columns bind as NULL and drop out of the predicate, so
    /// an empty filter returns the same rows as [`ProductRepo::list`].
    pub async fn filter(pool: &PgPool, filter: &ProductFilter) -> Result<Vec<Product>, sqlx::Error> {
        tracing::debug!(columns = ?filter.columns(), "Filtering products");

        let query = format!(
            "SELECT {COLUMNS} FROM products \
             WHERE ($1::BIGINT IS NULL OR id = $1) \
               AND ($2::TEXT IS NULL OR barcode = $2) \
               AND ($3::TEXT IS NULL OR color = $3) \
               AND ($4::TEXT IS NULL OR item_id = $4) \
               AND ($5::TEXT IS NULL OR size_label = $5) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(filter.id)
            .bind(filter.barcode.as_deref())
            .bind(filter.color.as_deref())
            .bind(filter.item_id.as_deref())
            .bind(filter.size_label.as_deref())
            .fetch_all(pool)
            .await
    }

    /// Overwrite all five business fields of a product. The id never changes.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductFields,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                item_id = $2, \
                size_label = $3, \
                barcode = $4, \
                color = $5, \
                price = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.item_id)
            .bind(&input.size_label)
            .bind(&input.barcode)
            .bind(&input.color)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
