//! 加盟商应用层（franchise-application）
//!
//! - `service`：加盟商领域服务，覆盖创建、追加、删除、库存更新、重命名与最高库存查询
//! - `dto`：入参与查询结果
//! - `error`：面向调用方的错误与类别
//! - `rename`：重命名的标签结果
//! - `config` / `logging`：配置加载与日志初始化
//!
pub mod config;
pub mod dto;
pub mod error;
pub mod logging;
pub mod rename;
pub mod service;

pub use error::{AppError, AppResult, ErrorKind};
pub use rename::{NotFoundTarget, RenameOutcome};
pub use service::FranchiseService;
