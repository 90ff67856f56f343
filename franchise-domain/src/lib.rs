//! 加盟商领域层（franchise-domain）
//!
//! 三层聚合 Franchise → Branch → Product 的建模、查找与修改规则：
//! - 聚合（`aggregate`）、实体（`entity`）与领域事件（`domain_event`）抽象
//! - 值对象（`value_object`）：名称与库存的校验
//! - 规约（`specification`）：按标识或忽略大小写的名称查找，首个匹配优先
//! - 模型（`model`）：加盟商聚合及其命令/事件、最高库存读模型
//! - 持久化（`persist`）：聚合存储协议与内存/JSON 文件实现
//! - `AggregateRoot`：加载 → 执行 → 应用 → 整体保存
//!
//! 典型用法：
//! 1. 选择 `persist` 中的存储实现；
//! 2. 用 `AggregateRoot` 包装存储；
//! 3. 通过 `FranchiseCommand` 修改聚合，由编排器负责整体持久化。
//!
pub mod aggregate;
pub mod aggregate_root;
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod model;
pub mod persist;
pub mod specification;
pub mod value_object;
