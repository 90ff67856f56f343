use anyhow::{Context, Result};
use clap::Parser;
use franchise_application::config::AppConfig;
use franchise_application::dto::{NewBranch, NewFranchise, NewProduct};
use franchise_application::{FranchiseService, config, logging};
use franchise_domain::entity::Entity;
use std::path::PathBuf;

/// 演示：创建加盟商、追加分店与产品、调整库存并输出最高库存
#[derive(Debug, Parser)]
#[command(name = "franchise-demo")]
struct Args {
    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 输出 debug 级别日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => AppConfig::load(path).context("loading config")?,
        None => AppConfig::default(),
    };
    if args.verbose {
        cfg.log.filter = "franchise_application=debug,franchise_domain=debug,info".to_string();
    }
    logging::init_logger(&cfg.log).context("initialising logger")?;

    let service = FranchiseService::new(config::build_store(&cfg.store));

    let franchise = service
        .create_franchise(
            NewFranchise::named("Mi Franquicia").with_branch(
                NewBranch::named("Centro")
                    .with_product(NewProduct::new("Cafe", 5))
                    .with_product(NewProduct::new("Pan", 9)),
            ),
        )
        .await?;
    let franchise_id = franchise.id().clone();

    let franchise = service
        .add_branch(&franchise_id, NewBranch::named("Norte"))
        .await?;
    let norte = franchise
        .branches()
        .last()
        .map(|b| b.id().clone())
        .context("branch just added")?;

    let franchise = service
        .add_product(&franchise_id, &norte, NewProduct::new("Leche", 3))
        .await?;
    let leche = franchise
        .branch(&norte)
        .and_then(|b| b.products().first())
        .map(|p| p.id().clone())
        .context("product just added")?;

    service.update_stock(&franchise_id, &norte, &leche, 12).await?;
    service.rename_branch(&franchise_id, "centro", "Centro Historico").await?;

    let top = service.max_stock_per_branch(&franchise_id).await?;
    println!("{}", serde_json::to_string_pretty(&top)?);

    let all = service.list_franchises().await?;
    println!("{}", serde_json::to_string_pretty(&all)?);

    Ok(())
}
