//! 产品数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::error::CoreError;

/// NUMERIC(10,2) 能表示的最大绝对值
pub const MAX_PRICE: f64 = 99_999_999.99;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

/// 创建和更新共用的请求体
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductInput {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[serde(default)]
    pub price: f64,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// 字段校验加上 NUMERIC(10,2) 的范围检查
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()?;
        if !self.price.is_finite() || self.normalized_price().abs() > MAX_PRICE {
            return Err(CoreError::BadRequest("price out of range".to_string()));
        }
        Ok(())
    }

    /// 价格按两位小数存储
    pub fn normalized_price(&self) -> f64 {
        round_price(self.price)
    }
}

pub fn round_price(price: f64) -> f64 {
    let rounded = (price * 100.0).round() / 100.0;
    // -0.0 归一为 0.0，与 NUMERIC 读回的值一致
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
