//! 持久化（persist）
//!
//! 定义聚合存储协议（`AggregateStore`）与文档表示（`StoredDocument`），并提供：
//! - `InMemoryStore`：测试与本地开发使用；
//! - `JsonFileStore`：单文件文档存储（特性 `json-store`）。
//!
//! 存储只负责单次调用的原子性；调用方的“加载-修改-保存”之间没有版本校验。
//!
mod aggregate_store;
#[cfg(feature = "json-store")]
mod json_file;
mod memory;
mod stored_document;

pub use aggregate_store::AggregateStore;
#[cfg(feature = "json-store")]
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use stored_document::StoredDocument;
