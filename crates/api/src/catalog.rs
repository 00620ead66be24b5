//! Catalog service: the six product operations behind the RPC binding.
//!
//! Converts between [`ProductDto`] and the repository layer at the boundary.
//! Writes are validated through [`ProductFields::try_from`] before any SQL
//! runs, and every lookup that feeds a mutation surfaces a missing row as
//! [`CoreError::NotFound`].

use catalog_core::error::CoreError;
use catalog_core::filter::{ProductFilter, ProductQueryFilter};
use catalog_core::product::{require_update_id, ProductDto, ProductFields, PRODUCT_ENTITY};
use catalog_core::types::DbId;
use catalog_db::repositories::ProductRepo;
use catalog_db::DbPool;

use crate::error::AppResult;

/// Façade over the product repository.
pub struct CatalogService<'a> {
    pool: &'a DbPool,
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: PRODUCT_ENTITY,
        id,
    }
}

impl<'a> CatalogService<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Every product in the catalog.
    pub async fn list_all(&self) -> AppResult<Vec<ProductDto>> {
        let rows = ProductRepo::list(self.pool).await?;
        Ok(rows.into_iter().map(ProductDto::from).collect())
    }

    /// A single product. A missing id is a typed not-found.
    pub async fn get_by_id(&self, id: DbId) -> AppResult<ProductDto> {
        let row = ProductRepo::find_by_id(self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        Ok(ProductDto::from(row))
    }

    /// Products matching every populated field of `criteria`.
    pub async fn filter(&self, criteria: &ProductQueryFilter) -> AppResult<Vec<ProductDto>> {
        let filter = ProductFilter::from_criteria(criteria);
        let rows = ProductRepo::filter(self.pool, &filter).await?;
        Ok(rows.into_iter().map(ProductDto::from).collect())
    }

    /// Validate and insert a product. Any supplied id is ignored; the store
    /// assigns one and it is returned.
    pub async fn add(&self, dto: &ProductDto) -> AppResult<DbId> {
        let fields = ProductFields::try_from(dto)?;
        let created = ProductRepo::create(self.pool, &fields).await?;
        tracing::info!(product_id = created.id, "Product added");
        Ok(created.id)
    }

    /// Overwrite all business fields of the product identified by `dto.id`.
    pub async fn update(&self, dto: &ProductDto) -> AppResult<()> {
        let id = require_update_id(dto)?;
        let fields = ProductFields::try_from(dto)?;
        ProductRepo::update(self.pool, id, &fields)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(product_id = id, "Product updated");
        Ok(())
    }

    /// Remove a product. Deleting an id that does not exist is a not-found.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !ProductRepo::delete(self.pool, id).await? {
            return Err(not_found(id).into());
        }
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }
}
