//! 请求 DTO 与输入校验

use rust_decimal::Decimal;
use serde::Deserialize;
use sportshop_errors::AppError;
use validator::{ValidationError, ValidationErrors};

/// 创建 / 更新商品的请求体
///
/// 所有字段都允许缺省，缺失与越界统一在转换为 [`ProductDraft`] 时报告
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub brand: Option<String>,
}

/// 最低售价，与 NUMERIC(18,2) 的精度一致
const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn required_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
    message: &'static str,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.add(field, violation("required", message));
            None
        }
    }
}

/// 通过校验的商品数据，服务层原样使用
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock: i32,
    pub brand: String,
}

impl TryFrom<ProductInput> for ProductDraft {
    type Error = AppError;

    /// 一次性报告全部字段错误
    fn try_from(input: ProductInput) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        let name = required_text(&mut errors, "name", input.name, "Name is required.");
        let category = required_text(
            &mut errors,
            "category",
            input.category,
            "Category is required.",
        );
        let price = match input.price {
            None => {
                errors.add("price", violation("required", "Price is required."));
                None
            }
            Some(price) if price < MIN_PRICE => {
                errors.add("price", violation("range", "Price must be greater than 0."));
                None
            }
            Some(price) => Some(price),
        };
        let stock = match input.stock {
            None => {
                errors.add("stock", violation("required", "Stock is required."));
                None
            }
            Some(stock) if stock < 0 => {
                errors.add("stock", violation("range", "Stock cannot be negative."));
                None
            }
            Some(stock) => Some(stock),
        };
        let brand = required_text(&mut errors, "brand", input.brand, "Brand is required.");

        match (name, category, price, stock, brand) {
            (Some(name), Some(category), Some(price), Some(stock), Some(brand)) => Ok(Self {
                name,
                category,
                price,
                stock,
                brand,
            }),
            _ => Err(errors.into()),
        }
    }
}
