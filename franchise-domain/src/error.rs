//! 领域层统一错误定义
//!
//! 覆盖值校验、聚合内查找、存储与序列化的最小必要集合，
//! 应用层再将其归类为面向调用方的错误。
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 值校验 ---
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    // --- 查找 ---
    #[error("{aggregate_type} not found: {id}")]
    AggregateNotFound {
        aggregate_type: &'static str,
        id: String,
    },
    #[error("branch not found: {key}")]
    BranchNotFound { key: String },
    #[error("product not found: {key}")]
    ProductNotFound { key: String },

    // --- 存储/序列化 ---
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch { expected: String, found: String },
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("io error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("store error: {reason}")]
    Store { reason: String },
}

impl DomainError {
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    pub fn store(reason: impl Into<String>) -> Self {
        Self::Store {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
