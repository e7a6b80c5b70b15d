//! 请求提取器

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use sportshop_errors::AppError;

use crate::application::{ProductDraft, ProductInput};

/// 从 JSON 请求体提取已校验的商品数据
///
/// JSON 格式错误与字段校验失败都以 400 Problem Details 拒绝
impl<S> FromRequest<S> for ProductDraft
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<ProductInput>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        ProductDraft::try_from(input)
    }
}
