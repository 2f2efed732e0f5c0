//! 产品业务服务

use std::sync::Arc;
use tracing::info;

use super::model::{Product, ProductInput};
use super::repository::ProductStore;
use crate::core::error::CoreError;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        self.store.list().await
    }

    pub async fn get_product(&self, id: i32) -> Result<Product, CoreError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()))
    }

    pub async fn create_product(&self, input: ProductInput) -> Result<Product, CoreError> {
        input.check()?;
        let product = self.store.create(&input).await?;
        info!("Created product: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub async fn update_product(&self, id: i32, input: ProductInput) -> Result<Product, CoreError> {
        input.check()?;
        let product = self
            .store
            .update(id, &input)
            .await?
            .ok_or_else(|| CoreError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;
        info!("Updated product: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// 幂等删除：不存在的 id 也视为成功
    pub async fn delete_product(&self, id: i32) -> Result<(), CoreError> {
        let removed = self.store.delete(id).await?;
        info!("Deleted product {} ({} row(s))", id, removed);
        Ok(())
    }

    pub async fn health(&self) -> Result<(), CoreError> {
        self.store.ping().await
    }
}
