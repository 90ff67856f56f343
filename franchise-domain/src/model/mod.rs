//! 加盟商聚合模型：Franchise → Branch → Product
//!
//! 三层均为值语义结构体，不持有反向引用；对嵌套实体的修改一律通过
//! 聚合根的命令/事件完成，随后整体持久化。
//!
mod branch;
mod franchise;
mod ids;
mod product;

pub use branch::Branch;
pub use franchise::{BranchTopProduct, Franchise, FranchiseCommand, FranchiseEvent};
pub use ids::{BranchId, FranchiseId, ProductId};
pub use product::Product;
