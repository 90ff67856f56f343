//! 加载与保存之间没有版本校验：两个同时开始的修改会让后保存者覆盖先保存者。
//! 该测试固定这一已知行为，一旦有人引入并发控制它就会失败并提醒更新文档。

use async_trait::async_trait;
use franchise_application::FranchiseService;
use franchise_application::dto::{NewBranch, NewFranchise};
use franchise_domain::entity::Entity;
use franchise_domain::error::DomainResult;
use franchise_domain::model::{Franchise, FranchiseId};
use franchise_domain::persist::{AggregateStore, InMemoryStore};
use std::sync::Arc;
use tokio::sync::Barrier;

/// 读取后在屏障处等待，保证两个操作都读到同一份旧状态
struct InterleavingStore {
    inner: Arc<InMemoryStore<Franchise>>,
    barrier: Barrier,
}

#[async_trait]
impl AggregateStore<Franchise> for InterleavingStore {
    async fn find_by_id(&self, id: &FranchiseId) -> DomainResult<Option<Franchise>> {
        let loaded = self.inner.find_by_id(id).await?;
        self.barrier.wait().await;
        Ok(loaded)
    }

    async fn save(&self, aggregate: Franchise) -> DomainResult<Franchise> {
        self.inner.save(aggregate).await
    }

    async fn find_all(&self) -> DomainResult<Vec<Franchise>> {
        self.inner.find_all().await
    }
}

#[tokio::test]
async fn concurrent_updates_lose_one_write() {
    let inner = Arc::new(InMemoryStore::<Franchise>::new());
    let seed = FranchiseService::new(Arc::clone(&inner))
        .create_franchise(NewFranchise::named("F"))
        .await
        .unwrap();
    let id = seed.id().clone();

    let service = FranchiseService::new(InterleavingStore {
        inner: Arc::clone(&inner),
        barrier: Barrier::new(2),
    });

    let (a, b) = tokio::join!(
        service.add_branch(&id, NewBranch::named("A")),
        service.add_branch(&id, NewBranch::named("B")),
    );
    assert_eq!(a.unwrap().branches().len(), 1);
    assert_eq!(b.unwrap().branches().len(), 1);

    let stored = inner.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored.branches().len(), 1);
    assert_eq!(inner.save_count(), 3);
}
