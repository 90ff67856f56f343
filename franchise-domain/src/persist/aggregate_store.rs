//! 聚合存储协议
//!
//! 以聚合标识为键整体读写；不支持局部写入，聚合即事务单元。
//!
use crate::aggregate::Aggregate;
use crate::error::DomainResult as Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait AggregateStore<A>: Send + Sync
where
    A: Aggregate,
{
    /// 按标识加载完整聚合，不存在时返回 None
    async fn find_by_id(&self, id: &A::Id) -> Result<Option<A>>;

    /// 整体覆盖写入（upsert），返回持久化后的表示
    async fn save(&self, aggregate: A) -> Result<A>;

    /// 列出全部聚合，顺序由实现决定
    async fn find_all(&self) -> Result<Vec<A>>;
}

#[async_trait]
impl<A, T> AggregateStore<A> for Arc<T>
where
    A: Aggregate + 'static,
    T: AggregateStore<A> + ?Sized,
{
    async fn find_by_id(&self, id: &A::Id) -> Result<Option<A>> {
        (**self).find_by_id(id).await
    }

    async fn save(&self, aggregate: A) -> Result<A> {
        (**self).save(aggregate).await
    }

    async fn find_all(&self) -> Result<Vec<A>> {
        (**self).find_all().await
    }
}
