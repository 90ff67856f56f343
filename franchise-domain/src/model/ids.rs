use franchise_macros::entity_id;

/// 加盟商标识，创建时生成，此后不变
#[entity_id]
pub struct FranchiseId(String);

/// 分店标识，在构造分店时生成
#[entity_id]
pub struct BranchId(String);

/// 产品标识，在构造产品时生成
#[entity_id]
pub struct ProductId(String);
