//! 内存版聚合存储
//!
//! 以序列化后的文档保存聚合，每次读取都反序列化出新副本，
//! 调用方拿到的聚合与存储内容之间不存在共享引用。
//!
use crate::aggregate::Aggregate;
use crate::error::DomainResult as Result;
use crate::persist::{AggregateStore, StoredDocument};
use async_trait::async_trait;
use dashmap::DashMap;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

pub struct InMemoryStore<A> {
    documents: DashMap<String, StoredDocument>,
    saves: AtomicUsize,
    _marker: PhantomData<fn() -> A>,
}

impl<A> Default for InMemoryStore<A> {
    fn default() -> Self {
        Self {
            documents: DashMap::new(),
            saves: AtomicUsize::new(0),
            _marker: PhantomData,
        }
    }
}

impl<A> InMemoryStore<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累计写入次数
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl<A> AggregateStore<A> for InMemoryStore<A>
where
    A: Aggregate + 'static,
{
    async fn find_by_id(&self, id: &A::Id) -> Result<Option<A>> {
        let key = id.to_string();
        // 先克隆文档再释放分片锁，避免在反序列化期间持锁
        let doc = self.documents.get(&key).map(|d| d.value().clone());
        debug!(aggregate_type = A::TYPE, id = %key, found = doc.is_some(), "find_by_id");
        doc.map(|d| d.to_aggregate::<A>()).transpose()
    }

    async fn save(&self, aggregate: A) -> Result<A> {
        let doc = StoredDocument::from_aggregate(&aggregate)?;
        debug!(aggregate_type = A::TYPE, id = %doc.aggregate_id(), "save");
        self.documents.insert(doc.aggregate_id().to_string(), doc);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(aggregate)
    }

    async fn find_all(&self) -> Result<Vec<A>> {
        let docs: Vec<StoredDocument> = self.documents.iter().map(|d| d.value().clone()).collect();
        docs.iter().map(|d| d.to_aggregate::<A>()).collect()
    }
}
