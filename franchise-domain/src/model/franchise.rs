use super::{Branch, BranchId, FranchiseId, Product, ProductId};
use crate::aggregate::Aggregate;
use crate::domain_event::DomainEvent;
use crate::entity::Entity;
use crate::error::DomainError;
use crate::specification::{
    HasId, NameEqualsIgnoreCase, Specification, find_first, position_first,
};
use crate::value_object::{Name, Stock};
use serde::{Deserialize, Serialize};

/// 加盟商：聚合根，也是唯一的持久化单元
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Franchise {
    id: FranchiseId,
    #[serde(rename = "nombre")]
    name: Name,
    #[serde(rename = "sucursales", default)]
    branches: Vec<Branch>,
}

/// 加盟商聚合支持的命令
///
/// 按标识定位的命令与按名称定位的命令并存：重命名分店/产品时以当前名称
/// （忽略大小写，首个匹配）查找。
///
/// 重命名命令携带未校验的新名称，先确认目标存在，再校验名称。
#[derive(Debug, Clone)]
pub enum FranchiseCommand {
    AddBranch {
        branch: Branch,
    },
    AddProduct {
        branch_id: BranchId,
        product: Product,
    },
    RemoveProduct {
        branch_id: BranchId,
        product_id: ProductId,
    },
    UpdateStock {
        branch_id: BranchId,
        product_id: ProductId,
        stock: Stock,
    },
    Rename {
        new_name: String,
    },
    RenameBranch {
        current_name: String,
        new_name: String,
    },
    RenameProduct {
        branch_name: String,
        current_name: String,
        new_name: String,
    },
}

/// 加盟商聚合产生的事件；名称定位在 `execute` 中已解析为标识
#[derive(Debug, Clone, PartialEq)]
pub enum FranchiseEvent {
    BranchAdded {
        branch: Branch,
    },
    ProductAdded {
        branch_id: BranchId,
        product: Product,
    },
    ProductRemoved {
        branch_id: BranchId,
        product_id: ProductId,
    },
    StockUpdated {
        branch_id: BranchId,
        product_id: ProductId,
        stock: Stock,
    },
    Renamed {
        name: Name,
    },
    BranchRenamed {
        branch_id: BranchId,
        name: Name,
    },
    ProductRenamed {
        branch_id: BranchId,
        product_id: ProductId,
        name: Name,
    },
}

impl DomainEvent for FranchiseEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::BranchAdded { .. } => "franchise.branch_added",
            Self::ProductAdded { .. } => "franchise.product_added",
            Self::ProductRemoved { .. } => "franchise.product_removed",
            Self::StockUpdated { .. } => "franchise.stock_updated",
            Self::Renamed { .. } => "franchise.renamed",
            Self::BranchRenamed { .. } => "franchise.branch_renamed",
            Self::ProductRenamed { .. } => "franchise.product_renamed",
        }
    }
}

/// 每个分店中库存最高的产品
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTopProduct {
    pub branch_id: BranchId,
    pub branch_name: Name,
    pub product_id: ProductId,
    pub product_name: Name,
    pub stock: Stock,
}

impl Franchise {
    /// 构造新加盟商并生成标识
    pub fn new(name: Name, branches: Vec<Branch>) -> Self {
        Self {
            id: FranchiseId::generate(),
            name,
            branches,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn branch(&self, branch_id: &BranchId) -> Option<&Branch> {
        find_first(&self.branches, &HasId(branch_id))
    }

    /// 对每个分店给出库存最高的产品，没有产品的分店不出现在结果中。
    ///
    /// 并列最高时取分店内迭代顺序的第一个产品（见 [`Branch::top_product`]）。
    pub fn max_stock_per_branch(&self) -> Vec<BranchTopProduct> {
        self.branches
            .iter()
            .filter_map(|branch| {
                branch.top_product().map(|product| BranchTopProduct {
                    branch_id: branch.id().clone(),
                    branch_name: branch.name().clone(),
                    product_id: product.id().clone(),
                    product_name: product.name().clone(),
                    stock: product.stock(),
                })
            })
            .collect()
    }

    fn branch_mut(&mut self, branch_id: &BranchId) -> Option<&mut Branch> {
        let idx = position_first(&self.branches, &HasId(branch_id))?;
        self.branches.get_mut(idx)
    }

    fn require_branch(&self, branch_id: &BranchId) -> Result<&Branch, DomainError> {
        self.branch(branch_id)
            .ok_or_else(|| DomainError::BranchNotFound {
                key: branch_id.to_string(),
            })
    }

    fn require_product<'a>(
        branch: &'a Branch,
        product_id: &ProductId,
    ) -> Result<&'a Product, DomainError> {
        branch
            .product(product_id)
            .ok_or_else(|| DomainError::ProductNotFound {
                key: product_id.to_string(),
            })
    }
}

impl Entity for Franchise {
    type Id = FranchiseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Aggregate for Franchise {
    const TYPE: &'static str = "franchise";

    type Command = FranchiseCommand;
    type Event = FranchiseEvent;
    type Error = DomainError;

    fn execute(&self, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let event = match command {
            FranchiseCommand::AddBranch { branch } => FranchiseEvent::BranchAdded { branch },
            FranchiseCommand::AddProduct { branch_id, product } => {
                self.require_branch(&branch_id)?;
                FranchiseEvent::ProductAdded { branch_id, product }
            }
            FranchiseCommand::RemoveProduct {
                branch_id,
                product_id,
            } => {
                let branch = self.require_branch(&branch_id)?;
                Self::require_product(branch, &product_id)?;
                FranchiseEvent::ProductRemoved {
                    branch_id,
                    product_id,
                }
            }
            FranchiseCommand::UpdateStock {
                branch_id,
                product_id,
                stock,
            } => {
                let branch = self.require_branch(&branch_id)?;
                Self::require_product(branch, &product_id)?;
                FranchiseEvent::StockUpdated {
                    branch_id,
                    product_id,
                    stock,
                }
            }
            // 重命名的新名称在定位目标之后校验，空白名称按非法输入拒绝
            FranchiseCommand::Rename { new_name } => FranchiseEvent::Renamed {
                name: Name::parse(new_name)?,
            },
            FranchiseCommand::RenameBranch {
                current_name,
                new_name,
            } => {
                let branch = find_first(&self.branches, &NameEqualsIgnoreCase(&current_name))
                    .ok_or_else(|| DomainError::BranchNotFound {
                        key: current_name.clone(),
                    })?;
                FranchiseEvent::BranchRenamed {
                    branch_id: branch.id().clone(),
                    name: Name::parse(new_name)?,
                }
            }
            FranchiseCommand::RenameProduct {
                branch_name,
                current_name,
                new_name,
            } => {
                // 同名分店可能有多个：依次在每个匹配分店中查找产品，取第一个命中
                let by_branch = NameEqualsIgnoreCase(&branch_name);
                let by_product = NameEqualsIgnoreCase(&current_name);
                let mut candidates = self
                    .branches
                    .iter()
                    .filter(|b| by_branch.is_satisfied_by(*b))
                    .peekable();
                if candidates.peek().is_none() {
                    return Err(DomainError::BranchNotFound {
                        key: branch_name.clone(),
                    });
                }
                let (branch, product) = candidates
                    .find_map(|b| find_first(b.products(), &by_product).map(|p| (b, p)))
                    .ok_or_else(|| DomainError::ProductNotFound {
                        key: current_name.clone(),
                    })?;
                FranchiseEvent::ProductRenamed {
                    branch_id: branch.id().clone(),
                    product_id: product.id().clone(),
                    name: Name::parse(new_name)?,
                }
            }
        };

        Ok(vec![event])
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            FranchiseEvent::BranchAdded { branch } => self.branches.push(branch.clone()),
            FranchiseEvent::ProductAdded { branch_id, product } => {
                if let Some(branch) = self.branch_mut(branch_id) {
                    branch.push_product(product.clone());
                }
            }
            FranchiseEvent::ProductRemoved {
                branch_id,
                product_id,
            } => {
                if let Some(branch) = self.branch_mut(branch_id) {
                    branch.remove_product(product_id);
                }
            }
            FranchiseEvent::StockUpdated {
                branch_id,
                product_id,
                stock,
            } => {
                if let Some(product) = self
                    .branch_mut(branch_id)
                    .and_then(|b| b.product_mut(product_id))
                {
                    product.set_stock(*stock);
                }
            }
            FranchiseEvent::Renamed { name } => self.name = name.clone(),
            FranchiseEvent::BranchRenamed { branch_id, name } => {
                if let Some(branch) = self.branch_mut(branch_id) {
                    branch.rename(name.clone());
                }
            }
            FranchiseEvent::ProductRenamed {
                branch_id,
                product_id,
                name,
            } => {
                if let Some(product) = self
                    .branch_mut(branch_id)
                    .and_then(|b| b.product_mut(product_id))
                {
                    product.rename(name.clone());
                }
            }
        }
    }
}
