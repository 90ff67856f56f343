use franchise_domain::error::DomainError;

/// 错误类别，供请求层选择传输相关的状态码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 调用方输入不满足前置条件
    ClientInput,
    /// 引用的加盟商或分店不存在
    NotFound,
    /// 存储或其他意外失败
    Internal,
}

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("franchise not found with id: {0}")]
    FranchiseNotFound(String),

    #[error("branch not found with id: {0}")]
    BranchNotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::ClientInput,
            Self::FranchiseNotFound(_) | Self::BranchNotFound(_) => ErrorKind::NotFound,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidValue { reason } => Self::InvalidArgument(reason),
            DomainError::AggregateNotFound { id, .. } => Self::FranchiseNotFound(id),
            DomainError::BranchNotFound { key } => Self::BranchNotFound(key),
            // 产品缺失按输入错误处理，而非“未找到”
            DomainError::ProductNotFound { key } => {
                Self::InvalidArgument(format!("product not found with id: {key}"))
            }
            other => Self::Internal(other.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
