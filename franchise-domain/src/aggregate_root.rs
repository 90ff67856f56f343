//! 聚合根编排器（AggregateRoot）
//!
//! 封装“加载聚合 → 执行命令 → 应用事件 → 整体保存”的标准流程。
//!
//! 加载与保存之间不做版本校验：同一聚合上的并发命令会出现后写覆盖先写
//! （丢失更新），这是已知且保留的行为。
//!
use crate::{
    aggregate::Aggregate, domain_event::DomainEvent, error::DomainError, persist::AggregateStore,
};
use std::marker::PhantomData;
use tracing::debug;

/// 面向应用层的聚合根编排器。
///
/// - `A`：聚合类型（实现 `Aggregate`）
/// - `S`：聚合存储（实现 `AggregateStore<A>`）
pub struct AggregateRoot<A, S>
where
    A: Aggregate,
    S: AggregateStore<A>,
{
    store: S,
    _marker: PhantomData<fn() -> A>,
}

impl<A, S> AggregateRoot<A, S>
where
    A: Aggregate,
    A::Error: From<DomainError>,
    S: AggregateStore<A>,
{
    /// 创建编排器实例
    pub fn new(store: S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 加载聚合，不存在时返回 `AggregateNotFound`
    pub async fn load(&self, aggregate_id: &A::Id) -> Result<A, A::Error> {
        self.store
            .find_by_id(aggregate_id)
            .await?
            .ok_or_else(|| {
                DomainError::AggregateNotFound {
                    aggregate_type: A::TYPE,
                    id: aggregate_id.to_string(),
                }
                .into()
            })
    }

    /// 保存一个全新的聚合
    pub async fn create(&self, aggregate: A) -> Result<A, A::Error> {
        Ok(self.store.save(aggregate).await?)
    }

    /// 执行聚合命令：
    /// 1. 加载聚合（不存在则失败，不做任何写入）；
    /// 2. 执行命令得到事件（失败时同样不写入）；
    /// 3. 依次应用事件；
    /// 4. 整体保存并返回持久化后的聚合。
    pub async fn execute(&self, aggregate_id: &A::Id, command: A::Command) -> Result<A, A::Error> {
        let mut aggregate = self.load(aggregate_id).await?;

        let events = aggregate.execute(command)?;

        for event in &events {
            debug!(
                aggregate_type = A::TYPE,
                id = %aggregate_id,
                event_type = event.event_type(),
                "apply"
            );
            aggregate.apply(event);
        }

        Ok(self.store.save(aggregate).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::model::{Branch, Franchise, FranchiseCommand, FranchiseId};
    use crate::persist::InMemoryStore;
    use crate::value_object::Name;
    use std::sync::Arc;

    fn name(s: &str) -> Name {
        Name::parse(s).unwrap()
    }

    #[tokio::test]
    async fn execute_loads_applies_and_saves_whole_aggregate() {
        let store = Arc::new(InMemoryStore::<Franchise>::new());
        let root = AggregateRoot::<Franchise, _>::new(Arc::clone(&store));
        let created = root.create(Franchise::new(name("F"), vec![])).await.unwrap();

        let updated = root
            .execute(
                created.id(),
                FranchiseCommand::AddBranch {
                    branch: Branch::new(name("Centro")),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.branches().len(), 1);
        let reloaded = root.load(created.id()).await.unwrap();
        assert_eq!(reloaded, updated);
        assert_eq!(store.save_count(), 2);
    }

    #[tokio::test]
    async fn execute_on_missing_aggregate_writes_nothing() {
        let store = Arc::new(InMemoryStore::<Franchise>::new());
        let root = AggregateRoot::<Franchise, _>::new(Arc::clone(&store));

        let err = root
            .execute(
                &FranchiseId::from("missing"),
                FranchiseCommand::Rename {
                    new_name: "X".into(),
                },
            )
            .await
            .unwrap_err();

        match err {
            DomainError::AggregateNotFound { aggregate_type, id } => {
                assert_eq!(aggregate_type, "franchise");
                assert_eq!(id, "missing");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn rejected_command_writes_nothing() {
        let store = Arc::new(InMemoryStore::<Franchise>::new());
        let root = AggregateRoot::<Franchise, _>::new(Arc::clone(&store));
        let created = root.create(Franchise::new(name("F"), vec![])).await.unwrap();

        let err = root
            .execute(
                created.id(),
                FranchiseCommand::RenameBranch {
                    current_name: "nada".into(),
                    new_name: "X".into(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::BranchNotFound { .. }));
        assert_eq!(store.save_count(), 1);
    }
}
