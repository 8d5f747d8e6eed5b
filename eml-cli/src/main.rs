mod form;
mod paths;

use std::fs;
use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use eml_lib::api::HttpRegistrationClient;
use eml_lib::error::{ApiError, StoreError};
use eml_lib::session::LocalSession;
use eml_lib::store::{JsonStore, SqliteStore};
use eml_lib::{IdentityPersistor, RegistrationConfig};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("could not determine a data directory")]
    NoDataDir,
    #[error("storage: {0}")]
    Store(#[from] StoreError),
    #[error("api client: {0}")]
    Api(#[from] ApiError),
    #[error("terminal: {0}")]
    Io(#[from] std::io::Error),
}

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

async fn run() -> Result<(), CliError> {
    let config = RegistrationConfig::from_env();
    log::debug!("Using registration endpoint {}{}", config.api_url, config.register_path);

    let db = paths::storage_db().ok_or(CliError::NoDataDir)?;
    let store = JsonStore::new(SqliteStore::open(&db).await?);

    let session = LocalSession::ensure(&store).await?;
    log::info!("Local session {}", session.local_id());

    let api = HttpRegistrationClient::from_config(&config)?;
    let alerts = |message: &str| eprintln!("! {}", message);
    let persistor = IdentityPersistor::new(Arc::new(api), store, Arc::new(alerts));

    match persistor.load_local_identity().await {
        Ok(Some(identity)) => println!(
            "Conta atual neste dispositivo: {} <{}>",
            identity.real_name, identity.email
        ),
        Ok(None) => {}
        Err(e) => log::error!("Failed to read local identity: {}", e),
    }

    form::run(&persistor).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
