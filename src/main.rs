use anyhow::Result;
use clap::Parser;
use dominion_sync::db::{self, ContentStore, SqliteStore};
use dominion_sync::{config, seed, sync};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to YAML config file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Run one content sync immediately and exit
    #[arg(long)]
    sync_now: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = config::load(Some(&args.config))?;
    cfg.ensure_dirs()?;
    let tz = cfg.sync_timezone()?;

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| format!("sqlite://{}/dominion.db", cfg.app.data_dir));

    let pool = db::init_pool(&database_url).await?;
    db::run_migrations(&pool).await?;
    let store: Arc<dyn ContentStore> = Arc::new(SqliteStore::new(pool));

    if args.sync_now {
        let report = sync::run_content_sync(store.as_ref()).await?;
        println!(
            "synced {} sparks, {} reflection cards",
            report.sparks, report.reflections
        );
        return Ok(());
    }

    // Startup backfill runs concurrently with the rest of boot; it catches
    // its own errors, so the task itself cannot fail.
    let seed_store = store.clone();
    tokio::spawn(async move {
        seed::auto_seed_dominion_content(seed_store.as_ref()).await;
    });

    let scheduler = sync::NightlySync::start(store, tz, cfg.sync.hour, cfg.sync.minute);
    info!(
        timezone = %cfg.sync.timezone,
        hour = cfg.sync.hour,
        minute = cfg.sync.minute,
        "nightly content sync armed"
    );

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    scheduler.stop();

    Ok(())
}
