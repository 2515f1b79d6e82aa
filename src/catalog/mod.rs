//! # Catalog / Stock Query
//!
//! The cart consumes the storefront catalog through the [`Catalog`] trait:
//! one call to fetch live stock, one to fetch product details. How those
//! calls are answered (HTTP client, cache, fixture) is outside the cart's
//! concern; the actor only sees the trait object injected into its context.

use crate::model::{Product, ProductId, Stock};
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced by catalog lookups.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The product id is unknown to the catalog.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// The catalog could not be reached or answered with garbage.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the storefront catalog and its stock levels.
///
/// Both methods fetch live data per call; the cart never caches stock.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Current available quantity for a product.
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, CatalogError>;

    /// Full product details for a product.
    async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError>;
}

/// In-memory catalog backed by a fixed product/stock table.
///
/// Stands in for the storefront API in the demo binary and in integration
/// tests. Built with [`StaticCatalog::with_product`].
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: HashMap<ProductId, Product>,
    stocks: HashMap<ProductId, u32>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product with the given stock amount.
    pub fn with_product(mut self, product: Product, stock: u32) -> Self {
        self.stocks.insert(product.id, stock);
        self.products.insert(product.id, product);
        self
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, CatalogError> {
        self.stocks
            .get(&product_id)
            .map(|&amount| Stock {
                id: product_id,
                amount,
            })
            .ok_or(CatalogError::NotFound(product_id))
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        self.products
            .get(&product_id)
            .cloned()
            .ok_or(CatalogError::NotFound(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_catalog_answers_stock_and_product() {
        let catalog = StaticCatalog::new()
            .with_product(Product::new(7u32, "Trail Runner", 219.9, "/img/7.jpg"), 4);

        let stock = catalog.get_stock(ProductId(7)).await.unwrap();
        assert_eq!(stock.amount, 4);

        let product = catalog.get_product(ProductId(7)).await.unwrap();
        assert_eq!(product.name, "Trail Runner");
    }

    #[tokio::test]
    async fn static_catalog_reports_unknown_ids() {
        let catalog = StaticCatalog::new();
        assert_eq!(
            catalog.get_stock(ProductId(1)).await,
            Err(CatalogError::NotFound(ProductId(1)))
        );
    }
}
