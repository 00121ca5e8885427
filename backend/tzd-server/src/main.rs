use tzd_bot::{DisplayNameCache, Dispatcher, IdentityResolver};
use tzd_db::{DirectoryStore, UserRepository};
use tzd_server::{config as settings, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if let Err(e) = dotenvy::dotenv() {
        // a missing .env is normal
        if !e.not_found() {
            eprintln!("Failed to load .env: {e}");
        }
    }

    // Load and validate configuration
    let config = tzd_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting tzd-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();
    if config.bot.operator_role_id.is_none() {
        warn!("No operator role configured - every operator command will be denied");
    }

    // Open the directory
    let database_path = config.database_path()?;
    info!("Opening directory database: {}", database_path.display());
    let repository = UserRepository::open(&database_path).await?;

    let names = Arc::new(DisplayNameCache::new());
    let dispatcher = Dispatcher::new(
        Arc::new(repository.clone()) as Arc<dyn DirectoryStore>,
        names as Arc<dyn IdentityResolver>,
        settings::dispatcher_config(&config),
    );

    let sweep = dispatcher
        .selections()
        .spawn_sweep(settings::sweep_interval(&config));

    let transport_config = settings::transport_config(&config);

    let shutdown_signal = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    info!("Ready, reading events from stdin");
    tokio::select! {
        result = tzd_server::run(
            dispatcher,
            transport_config,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        ) => {
            if let Err(e) = result {
                error!("Transport failed: {}", e);
            }
        }
        _ = shutdown_signal => {}
    }

    sweep.abort();
    repository.close().await;
    info!("Shutdown complete");

    Ok(())
}
