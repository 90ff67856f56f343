//! 数据传输对象（DTO）
//!
//! - 入参：创建加盟商/分店/产品时由请求层反序列化得到，尚未校验；
//! - 出参：最高库存查询的结果行，与领域读模型解耦。
//!
//! 字段的序列化名称沿用持久化文档的命名（`nombre`、`sucursales`、`productos`）。
use franchise_domain::model::BranchTopProduct;
use serde::{Deserialize, Serialize};

/// 新建加盟商，可附带初始分店
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewFranchise {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "sucursales", default)]
    pub branches: Vec<NewBranch>,
}

/// 新建分店，可附带初始产品
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBranch {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "productos", default)]
    pub products: Vec<NewProduct>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(default)]
    pub stock: i64,
}

impl NewFranchise {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            branches: Vec::new(),
        }
    }

    pub fn with_branch(mut self, branch: NewBranch) -> Self {
        self.branches.push(branch);
        self
    }
}

impl NewBranch {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: Vec::new(),
        }
    }

    pub fn with_product(mut self, product: NewProduct) -> Self {
        self.products.push(product);
        self
    }
}

impl NewProduct {
    pub fn new(name: impl Into<String>, stock: i64) -> Self {
        Self {
            name: name.into(),
            stock,
        }
    }
}

/// 分店及其库存最高的产品
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductMaxStockDto {
    #[serde(rename = "sucursalId")]
    pub branch_id: String,
    #[serde(rename = "sucursalNombre")]
    pub branch_name: String,
    #[serde(rename = "productoId")]
    pub product_id: String,
    #[serde(rename = "productoNombre")]
    pub product_name: String,
    pub stock: u32,
}

impl From<BranchTopProduct> for ProductMaxStockDto {
    fn from(top: BranchTopProduct) -> Self {
        Self {
            branch_id: top.branch_id.into(),
            branch_name: top.branch_name.to_string(),
            product_id: top.product_id.into(),
            product_name: top.product_name.to_string(),
            stock: top.stock.value(),
        }
    }
}
