use super::{BranchId, Product, ProductId};
use crate::entity::Entity;
use crate::specification::{HasId, Named, find_first, position_first};
use crate::value_object::Name;
use serde::{Deserialize, Serialize};

/// 分店，隶属于唯一一个加盟商，按插入顺序持有产品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    id: BranchId,
    #[serde(rename = "nombre")]
    name: Name,
    #[serde(rename = "productos", default)]
    products: Vec<Product>,
}

impl Branch {
    /// 构造新分店并生成标识
    pub fn new(name: Name) -> Self {
        Self::with_products(name, Vec::new())
    }

    pub fn with_products(name: Name, products: Vec<Product>) -> Self {
        Self {
            id: BranchId::generate(),
            name,
            products,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        find_first(&self.products, &HasId(product_id))
    }

    /// 库存最高的产品；并列时取迭代顺序中的第一个，空分店返回 None
    pub fn top_product(&self) -> Option<&Product> {
        self.products.iter().fold(None::<&Product>, |best, p| match best {
            Some(b) if b.stock() >= p.stock() => Some(b),
            _ => Some(p),
        })
    }

    pub(crate) fn product_mut(&mut self, product_id: &ProductId) -> Option<&mut Product> {
        let idx = position_first(&self.products, &HasId(product_id))?;
        self.products.get_mut(idx)
    }

    pub(crate) fn push_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// 按标识移除产品，其余产品保持原有相对顺序
    pub(crate) fn remove_product(&mut self, product_id: &ProductId) -> Option<Product> {
        let idx = position_first(&self.products, &HasId(product_id))?;
        Some(self.products.remove(idx))
    }

    pub(crate) fn rename(&mut self, name: Name) {
        self.name = name;
    }
}

impl Entity for Branch {
    type Id = BranchId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Named for Branch {
    fn name(&self) -> &Name {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_object::Stock;

    fn product(name: &str, stock: u32) -> Product {
        Product::new(Name::parse(name).unwrap(), Stock::from(stock))
    }

    #[test]
    fn top_product_prefers_first_among_ties() {
        let first = product("a", 9);
        let second = product("b", 9);
        let first_id = first.id().clone();
        let branch = Branch::with_products(
            Name::parse("Centro").unwrap(),
            vec![product("z", 1), first, second],
        );
        assert_eq!(branch.top_product().unwrap().id(), &first_id);
    }

    #[test]
    fn top_product_of_empty_branch_is_none() {
        let branch = Branch::new(Name::parse("Vacia").unwrap());
        assert!(branch.top_product().is_none());
    }

    #[test]
    fn remove_product_keeps_relative_order() {
        let (a, b, c) = (product("a", 1), product("b", 2), product("c", 3));
        let (a_id, b_id, c_id) = (a.id().clone(), b.id().clone(), c.id().clone());
        let mut branch = Branch::with_products(Name::parse("X").unwrap(), vec![a, b, c]);

        let removed = branch.remove_product(&b_id).unwrap();
        assert_eq!(removed.id(), &b_id);

        let ids: Vec<_> = branch.products().iter().map(|p| p.id().clone()).collect();
        assert_eq!(ids, vec![a_id, c_id]);
        assert!(branch.remove_product(&b_id).is_none());
    }
}
