//! 规约（Specification）
//!
//! 聚合内部的查找规则统一表达为规约：按标识精确匹配，或按名称忽略大小写匹配。
//! 多个候选同时满足时总是取第一个。
//!
use crate::entity::Entity;
use crate::value_object::Name;

/// 规约模式的核心 trait
pub trait Specification<T> {
    /// 检查候选对象是否满足规约
    fn is_satisfied_by(&self, candidate: &T) -> bool;
}

/// 具备名称的实体
pub trait Named {
    fn name(&self) -> &Name;
}

/// 标识相等
pub struct HasId<'a, I>(pub &'a I);

impl<T, I> Specification<T> for HasId<'_, I>
where
    T: Entity<Id = I>,
    I: PartialEq,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate.id() == self.0
    }
}

/// 名称忽略大小写相等
pub struct NameEqualsIgnoreCase<'a>(pub &'a str);

impl<T: Named> Specification<T> for NameEqualsIgnoreCase<'_> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate.name().eq_ignore_case(self.0)
    }
}

/// 返回第一个满足规约的元素下标
pub fn position_first<T>(items: &[T], spec: &impl Specification<T>) -> Option<usize> {
    items.iter().position(|item| spec.is_satisfied_by(item))
}

/// 返回第一个满足规约的元素
pub fn find_first<'a, T>(items: &'a [T], spec: &impl Specification<T>) -> Option<&'a T> {
    items.iter().find(|item| spec.is_satisfied_by(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: String,
        name: Name,
    }

    impl Entity for Item {
        type Id = String;
        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    impl Named for Item {
        fn name(&self) -> &Name {
            &self.name
        }
    }

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: Name::parse(name).unwrap(),
        }
    }

    #[test]
    fn has_id_matches_exactly() {
        let items = vec![item("a", "Uno"), item("b", "Dos")];
        let target = "b".to_string();
        assert_eq!(position_first(&items, &HasId(&target)), Some(1));

        let upper = "B".to_string();
        assert_eq!(position_first(&items, &HasId(&upper)), None);
    }

    #[test]
    fn name_match_ignores_case_and_first_wins() {
        let items = vec![item("a", "Norte"), item("b", "NORTE"), item("c", "Sur")];
        let found = find_first(&items, &NameEqualsIgnoreCase("norte")).unwrap();
        assert_eq!(found.id, "a");
        assert!(find_first(&items, &NameEqualsIgnoreCase("este")).is_none());
    }

    #[test]
    fn empty_collection_never_matches() {
        let items: Vec<Item> = Vec::new();
        assert!(find_first(&items, &NameEqualsIgnoreCase("x")).is_none());
    }
}
