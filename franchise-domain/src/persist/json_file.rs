//! 基于单个 JSON 文件的聚合存储
//!
//! 文件内容为 `{ aggregate_id: StoredDocument }` 映射；写入先落临时文件再原子改名。
//! 每个值是 `StoredDocument` 信封，加盟商文档 `{id, nombre, sucursales}` 位于其 `payload` 字段。
//! 内部互斥锁只串行化单次调用，不跨越调用方的“读-改-写”窗口。
//!
use crate::aggregate::Aggregate;
use crate::error::DomainResult as Result;
use crate::persist::{AggregateStore, StoredDocument};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

type Documents = BTreeMap<String, StoredDocument>;

pub struct JsonFileStore<A> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> A>,
}

impl<A> JsonFileStore<A> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_documents(&self) -> Result<Documents> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(Documents::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Documents::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_documents(&self, documents: &Documents) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(documents)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl<A> AggregateStore<A> for JsonFileStore<A>
where
    A: Aggregate + 'static,
{
    async fn find_by_id(&self, id: &A::Id) -> Result<Option<A>> {
        let _guard = self.lock.lock().await;
        let documents = self.read_documents().await?;
        let key = id.to_string();
        debug!(aggregate_type = A::TYPE, id = %key, path = %self.path.display(), "find_by_id");
        documents
            .get(&key)
            .map(|d| d.to_aggregate::<A>())
            .transpose()
    }

    async fn save(&self, aggregate: A) -> Result<A> {
        let doc = StoredDocument::from_aggregate(&aggregate)?;
        let _guard = self.lock.lock().await;
        let mut documents = self.read_documents().await?;
        debug!(aggregate_type = A::TYPE, id = %doc.aggregate_id(), path = %self.path.display(), "save");
        documents.insert(doc.aggregate_id().to_string(), doc);
        self.write_documents(&documents).await?;
        Ok(aggregate)
    }

    async fn find_all(&self) -> Result<Vec<A>> {
        let _guard = self.lock.lock().await;
        let documents = self.read_documents().await?;
        documents.values().map(|d| d.to_aggregate::<A>()).collect()
    }
}
