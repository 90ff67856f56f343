//! 重命名操作的返回值
//!
//! 重命名不以错误形式抛出“未找到”，而是返回带标签的结果，
//! 由请求层自行决定如何呈现；存储等意外错误仍走 `AppError`。
//!
use franchise_domain::error::DomainError;
use franchise_domain::model::Franchise;

/// 未找到的层级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundTarget {
    Franchise,
    Branch,
    Product,
}

impl NotFoundTarget {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Franchise => "franchise not found",
            Self::Branch => "branch not found",
            Self::Product => "product not found",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenameOutcome {
    Updated(Franchise),
    NotFound(NotFoundTarget),
}

impl RenameOutcome {
    pub fn updated(&self) -> Option<&Franchise> {
        match self {
            Self::Updated(f) => Some(f),
            Self::NotFound(_) => None,
        }
    }

    pub fn not_found_message(&self) -> Option<&'static str> {
        match self {
            Self::Updated(_) => None,
            Self::NotFound(target) => Some(target.message()),
        }
    }

    /// 将领域层的“未找到”错误折叠为标签结果，其余错误原样返回
    pub(crate) fn from_result(result: Result<Franchise, DomainError>) -> Result<Self, DomainError> {
        match result {
            Ok(franchise) => Ok(Self::Updated(franchise)),
            Err(DomainError::AggregateNotFound { .. }) => Ok(Self::NotFound(NotFoundTarget::Franchise)),
            Err(DomainError::BranchNotFound { .. }) => Ok(Self::NotFound(NotFoundTarget::Branch)),
            Err(DomainError::ProductNotFound { .. }) => Ok(Self::NotFound(NotFoundTarget::Product)),
            Err(other) => Err(other),
        }
    }
}
