use super::ProductId;
use crate::entity::Entity;
use crate::specification::Named;
use crate::value_object::{Name, Stock};
use serde::{Deserialize, Serialize};

/// 产品，隶属于唯一一个分店
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    #[serde(rename = "nombre")]
    name: Name,
    stock: Stock,
}

impl Product {
    /// 构造新产品并生成标识
    pub fn new(name: Name, stock: Stock) -> Self {
        Self {
            id: ProductId::generate(),
            name,
            stock,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn stock(&self) -> Stock {
        self.stock
    }

    pub(crate) fn set_stock(&mut self, stock: Stock) {
        self.stock = stock;
    }

    pub(crate) fn rename(&mut self, name: Name) {
        self.name = name;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Named for Product {
    fn name(&self) -> &Name {
        &self.name
    }
}
