//! 实体（Entity）基础抽象
//!
//! 聚合根与其内部实体都以稳定标识区分；不携带版本号，
//! 因为持久化采用整体覆盖写入而非乐观锁。
//!
use std::fmt::Display;

/// 具备唯一标识的实体
pub trait Entity {
    /// 实体标识类型
    type Id: Clone + Display + Send + Sync;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
