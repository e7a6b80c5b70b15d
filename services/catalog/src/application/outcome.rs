//! 读操作结果
//!
//! 读路径对外始终返回一个值（未找到时为空），基础设施故障另行携带，
//! 调用方可以区分“没有数据”和“查询失败”。

use sportshop_errors::AppError;

/// 读操作结果
#[derive(Debug)]
pub struct ReadOutcome<T> {
    value: T,
    failure: Option<AppError>,
}

impl<T> ReadOutcome<T> {
    /// 正常结果
    pub fn ok(value: T) -> Self {
        Self {
            value,
            failure: None,
        }
    }

    /// 降级结果：返回空值并保留故障原因
    pub fn degraded(value: T, failure: AppError) -> Self {
        Self {
            value,
            failure: Some(failure),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn failure(&self) -> Option<&AppError> {
        self.failure.as_ref()
    }

    pub fn is_degraded(&self) -> bool {
        self.failure.is_some()
    }

    pub fn into_parts(self) -> (T, Option<AppError>) {
        (self.value, self.failure)
    }
}

impl<T: Default> ReadOutcome<T> {
    /// 以默认值（None / 空集合）降级
    pub fn empty_on(failure: AppError) -> Self {
        Self::degraded(T::default(), failure)
    }
}
