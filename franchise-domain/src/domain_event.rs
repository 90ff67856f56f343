//! 领域事件
//!
//! 事件由聚合的 `execute` 产生，描述已经决定的状态变化；
//! `apply` 只负责把事件投影到状态上，不再做任何校验。
//!
use std::fmt;

/// 领域事件需要满足的能力边界
pub trait DomainEvent: Clone + PartialEq + fmt::Debug + Send + Sync {
    /// 事件类型（形如 `franchise.branch_added`），用于日志与追踪
    fn event_type(&self) -> &'static str;
}
