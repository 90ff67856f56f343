//! 加盟商领域服务
//!
//! 所有修改操作都是“加载 → 校验 → 修改 → 整体保存”，由 `AggregateRoot` 编排。
//! 不依赖聚合的输入校验（名称、库存符号）在访问存储之前完成；
//! 重命名操作没有这类前置校验，先确认目标存在。
//!
//! 加载与保存之间没有版本校验，同一加盟商上的并发修改可能互相覆盖。
//!
use crate::dto::{NewBranch, NewFranchise, NewProduct, ProductMaxStockDto};
use crate::error::{AppError, AppResult};
use crate::rename::RenameOutcome;
use franchise_domain::aggregate_root::AggregateRoot;
use franchise_domain::entity::Entity;
use franchise_domain::error::DomainError;
use franchise_domain::model::{
    Branch, BranchId, Franchise, FranchiseCommand, FranchiseId, Product, ProductId,
};
use franchise_domain::persist::AggregateStore;
use franchise_domain::value_object::{Name, Stock};
use tracing::{info, instrument, warn};

pub struct FranchiseService<S>
where
    S: AggregateStore<Franchise>,
{
    root: AggregateRoot<Franchise, S>,
}

impl<S> FranchiseService<S>
where
    S: AggregateStore<Franchise>,
{
    pub fn new(store: S) -> Self {
        Self {
            root: AggregateRoot::new(store),
        }
    }

    pub fn store(&self) -> &S {
        self.root.store()
    }

    /// 创建加盟商；名称去空白后不得为空，初始分店与产品同样校验
    #[instrument(skip_all, fields(name = %input.name))]
    pub async fn create_franchise(&self, input: NewFranchise) -> AppResult<Franchise> {
        let name = Name::parse(input.name)
            .map_err(|_| AppError::invalid_argument("franchise name must not be empty"))
            .inspect_err(|e| warn!(error = %e, "create_franchise rejected"))?;
        let branches = input
            .branches
            .into_iter()
            .map(build_branch)
            .collect::<AppResult<Vec<_>>>()
            .inspect_err(|e| warn!(error = %e, "create_franchise rejected"))?;

        let franchise = self.root.create(Franchise::new(name, branches)).await?;
        info!(franchise_id = %franchise.id(), "franchise created");
        Ok(franchise)
    }

    #[instrument(skip_all)]
    pub async fn list_franchises(&self) -> AppResult<Vec<Franchise>> {
        Ok(self.store().find_all().await?)
    }

    /// 追加分店，分店标识在此处生成
    #[instrument(skip_all, fields(franchise_id = %franchise_id))]
    pub async fn add_branch(
        &self,
        franchise_id: &FranchiseId,
        input: NewBranch,
    ) -> AppResult<Franchise> {
        let branch = build_branch(input).inspect_err(|e| warn!(error = %e, "add_branch rejected"))?;
        let branch_id = branch.id().clone();

        let franchise = self
            .apply(franchise_id, FranchiseCommand::AddBranch { branch })
            .await?;
        info!(branch_id = %branch_id, "branch added");
        Ok(franchise)
    }

    /// 向按标识定位的分店追加产品；负库存在加载之前即被拒绝
    #[instrument(skip_all, fields(franchise_id = %franchise_id, branch_id = %branch_id))]
    pub async fn add_product(
        &self,
        franchise_id: &FranchiseId,
        branch_id: &BranchId,
        input: NewProduct,
    ) -> AppResult<Franchise> {
        let product =
            build_product(input).inspect_err(|e| warn!(error = %e, "add_product rejected"))?;
        let product_id = product.id().clone();

        let franchise = self
            .apply(
                franchise_id,
                FranchiseCommand::AddProduct {
                    branch_id: branch_id.clone(),
                    product,
                },
            )
            .await?;
        info!(product_id = %product_id, "product added");
        Ok(franchise)
    }

    #[instrument(skip_all, fields(franchise_id = %franchise_id, branch_id = %branch_id, product_id = %product_id))]
    pub async fn remove_product(
        &self,
        franchise_id: &FranchiseId,
        branch_id: &BranchId,
        product_id: &ProductId,
    ) -> AppResult<Franchise> {
        let franchise = self
            .apply(
                franchise_id,
                FranchiseCommand::RemoveProduct {
                    branch_id: branch_id.clone(),
                    product_id: product_id.clone(),
                },
            )
            .await?;
        info!("product removed");
        Ok(franchise)
    }

    /// 覆盖库存；重复以相同数值调用结果一致
    #[instrument(skip_all, fields(franchise_id = %franchise_id, branch_id = %branch_id, product_id = %product_id, new_stock = new_stock))]
    pub async fn update_stock(
        &self,
        franchise_id: &FranchiseId,
        branch_id: &BranchId,
        product_id: &ProductId,
        new_stock: i64,
    ) -> AppResult<Franchise> {
        let stock = Stock::new(new_stock)
            .map_err(|_| AppError::invalid_argument("stock must not be negative"))
            .inspect_err(|e| warn!(error = %e, "update_stock rejected"))?;

        let franchise = self
            .apply(
                franchise_id,
                FranchiseCommand::UpdateStock {
                    branch_id: branch_id.clone(),
                    product_id: product_id.clone(),
                    stock,
                },
            )
            .await?;
        info!(stock = stock.value(), "stock updated");
        Ok(franchise)
    }

    /// 每个分店库存最高的产品，空分店被省略；并列时取分店内第一个
    #[instrument(skip_all, fields(franchise_id = %franchise_id))]
    pub async fn max_stock_per_branch(
        &self,
        franchise_id: &FranchiseId,
    ) -> AppResult<Vec<ProductMaxStockDto>> {
        let franchise = self
            .root
            .load(franchise_id)
            .await
            .map_err(AppError::from)
            .inspect_err(|e| warn!(error = %e, "max_stock_per_branch failed"))?;

        Ok(franchise
            .max_stock_per_branch()
            .into_iter()
            .map(ProductMaxStockDto::from)
            .collect())
    }

    #[instrument(skip_all, fields(franchise_id = %franchise_id))]
    pub async fn rename_franchise(
        &self,
        franchise_id: &FranchiseId,
        new_name: &str,
    ) -> AppResult<RenameOutcome> {
        let result = self
            .root
            .execute(
                franchise_id,
                FranchiseCommand::Rename {
                    new_name: new_name.to_owned(),
                },
            )
            .await;
        finish_rename(result)
    }

    /// 按当前名称（忽略大小写，首个匹配）重命名分店
    #[instrument(skip_all, fields(franchise_id = %franchise_id, current_name = %current_name))]
    pub async fn rename_branch(
        &self,
        franchise_id: &FranchiseId,
        current_name: &str,
        new_name: &str,
    ) -> AppResult<RenameOutcome> {
        let result = self
            .root
            .execute(
                franchise_id,
                FranchiseCommand::RenameBranch {
                    current_name: current_name.to_owned(),
                    new_name: new_name.to_owned(),
                },
            )
            .await;
        finish_rename(result)
    }

    /// 先按名称定位分店，再在该分店内按名称定位产品；两级都是忽略大小写、首个匹配
    #[instrument(skip_all, fields(franchise_id = %franchise_id, branch_name = %branch_name, current_name = %current_name))]
    pub async fn rename_product(
        &self,
        franchise_id: &FranchiseId,
        branch_name: &str,
        current_name: &str,
        new_name: &str,
    ) -> AppResult<RenameOutcome> {
        let result = self
            .root
            .execute(
                franchise_id,
                FranchiseCommand::RenameProduct {
                    branch_name: branch_name.to_owned(),
                    current_name: current_name.to_owned(),
                    new_name: new_name.to_owned(),
                },
            )
            .await;
        finish_rename(result)
    }

    async fn apply(
        &self,
        franchise_id: &FranchiseId,
        command: FranchiseCommand,
    ) -> AppResult<Franchise> {
        self.root
            .execute(franchise_id, command)
            .await
            .map_err(AppError::from)
            .inspect_err(|e| warn!(error = %e, kind = ?e.kind(), "command failed"))
    }
}

fn finish_rename(result: Result<Franchise, DomainError>) -> AppResult<RenameOutcome> {
    let outcome = RenameOutcome::from_result(result)
        .map_err(AppError::from)
        .inspect_err(|e| warn!(error = %e, "rename failed"))?;

    match &outcome {
        RenameOutcome::Updated(franchise) => info!(franchise_id = %franchise.id(), "renamed"),
        RenameOutcome::NotFound(missing) => warn!(missing = missing.message(), "rename target not found"),
    }
    Ok(outcome)
}

fn build_branch(input: NewBranch) -> AppResult<Branch> {
    let name = Name::parse(input.name)
        .map_err(|_| AppError::invalid_argument("branch name must not be empty"))?;
    let products = input
        .products
        .into_iter()
        .map(build_product)
        .collect::<AppResult<Vec<_>>>()?;
    Ok(Branch::with_products(name, products))
}

fn build_product(input: NewProduct) -> AppResult<Product> {
    let invalid =
        || AppError::invalid_argument("invalid product: name must not be empty and stock must be >= 0");
    let name = Name::parse(input.name).map_err(|_| invalid())?;
    let stock = Stock::new(input.stock).map_err(|_| invalid())?;
    Ok(Product::new(name, stock))
}
