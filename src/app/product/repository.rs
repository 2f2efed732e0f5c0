//! 产品存储
//!
//! `ProductStore` 是服务层和存储之间的接口。生产环境用 PostgreSQL，
//! 测试和无数据库运行时用内存实现。

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::model::{Product, ProductInput};
use crate::core::error::CoreError;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 按 id 升序返回全部产品
    async fn list(&self) -> Result<Vec<Product>, CoreError>;

    async fn get(&self, id: i32) -> Result<Option<Product>, CoreError>;

    async fn create(&self, input: &ProductInput) -> Result<Product, CoreError>;

    /// 行不存在时返回 `None`
    async fn update(&self, id: i32, input: &ProductInput) -> Result<Option<Product>, CoreError>;

    /// 返回删除的行数
    async fn delete(&self, id: i32) -> Result<u64, CoreError>;

    async fn ping(&self) -> Result<(), CoreError>;
}

/// PostgreSQL 实现
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, CoreError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, CoreError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn create(&self, input: &ProductInput) -> Result<Product, CoreError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price) VALUES ($1, $2::NUMERIC(10,2)) \
             RETURNING id, name, price::FLOAT8 AS price",
        )
        .bind(&input.name)
        .bind(input.normalized_price())
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update(&self, id: i32, input: &ProductInput) -> Result<Option<Product>, CoreError> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $1, price = $2::NUMERIC(10,2) WHERE id = $3 \
             RETURNING id, name, price::FLOAT8 AS price",
        )
        .bind(&input.name)
        .bind(input.normalized_price())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<u64, CoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(Default)]
struct MemoryTable {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

/// 内存实现，id 与 SERIAL 一样从 1 开始递增且不复用
#[derive(Clone, Default)]
pub struct MemoryProductStore {
    table: Arc<RwLock<MemoryTable>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, CoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, CoreError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, input: &ProductInput) -> Result<Product, CoreError> {
        let mut table = self.table.write().await;
        table.last_id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| CoreError::Internal("product id sequence exhausted".to_string()))?;

        let product = Product {
            id: table.last_id,
            name: input.name.clone(),
            price: input.normalized_price(),
        };
        table.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i32, input: &ProductInput) -> Result<Option<Product>, CoreError> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|product| {
            product.name = input.name.clone();
            product.price = input.normalized_price();
            product.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<u64, CoreError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
