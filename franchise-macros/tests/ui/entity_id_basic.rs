use franchise_macros::entity_id;

#[entity_id]
struct ShopId(String);

#[entity_id(debug = false)]
struct SecretId(String);

impl std::fmt::Debug for SecretId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretId(..)")
    }
}

fn main() {
    let id = ShopId::generate();
    assert!(!id.as_str().is_empty());
    assert_ne!(id, ShopId::generate());

    let fixed: ShopId = "shop-1".parse().unwrap();
    assert_eq!(fixed.to_string(), "shop-1");
    assert_eq!(fixed, ShopId::from("shop-1"));

    // 透明序列化为裸字符串
    let json = serde_json::to_string(&fixed).unwrap();
    assert_eq!(json, "\"shop-1\"");
    let back: ShopId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, fixed);

    let secret = SecretId::new("s");
    assert_eq!(format!("{:?}", secret), "SecretId(..)");
}
