//! # Kiosk Application Library
//!
//! Wires the pure core and the ticket store together behind the terminal
//! prompt loop.
//!
//! ## Module Organization
//! ```text
//! kiosk/
//! ├── lib.rs          ◄─── You are here (startup & wiring)
//! ├── session.rs      ◄─── OrderSession (order + ticket composition)
//! ├── terminal.rs     ◄─── Prompt/response loop
//! ├── error.rs        ◄─── App-level error type
//! └── main.rs         ◄─── Thin binary entry point
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (RUST_LOG override, INFO default)
//! 2. Resolve the database path (KIOSK_DB_PATH override, else platform data
//!    dir, else current directory)
//! 3. Open the ticket store (creates file + table if absent)
//! 4. Build the menu, discount policy, and session
//! 5. Run the prompt loop on stdin/stdout
//! 6. Close the store - on every exit path

pub mod error;
pub mod session;
pub mod terminal;

use std::path::PathBuf;
use std::sync::Arc;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kiosk_core::{DiscountPolicy, Menu, TenPercentOverThreshold, Won};
use kiosk_db::{StoreConfig, TicketStore};

use error::AppError;
use session::OrderSession;

/// The fixed cafe catalog.
const MENU: &[(&str, i64)] = &[
    ("Americano", 3000),
    ("Latte", 3500),
    ("Cappuccino", 3700),
    ("Mocha", 4000),
];

/// Runs the kiosk until the user exits.
///
/// The ticket store is closed before returning regardless of whether the
/// prompt loop succeeded.
pub async fn run() -> Result<(), AppError> {
    init_tracing();
    info!("Starting cafe kiosk");

    let db_path = database_path()?;
    info!(path = %db_path.display(), "Ticket store path resolved");

    let store = TicketStore::open(StoreConfig::new(db_path)).await?;

    let menu = Arc::new(build_menu()?);
    let policy: Arc<dyn DiscountPolicy + Send + Sync> = Arc::new(TenPercentOverThreshold::new());
    let mut session = OrderSession::new(menu, policy, store);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let result = terminal::run_loop(stdin.lock(), &mut stdout, &mut session).await;

    // Explicit release on success and on error alike
    session.shutdown().await;
    result
}

/// Builds the fixed menu from the catalog constants.
fn build_menu() -> Result<Menu, AppError> {
    let names = MENU.iter().map(|(name, _)| (*name).to_string()).collect();
    let prices = MENU.iter().map(|(_, price)| Won::new(*price)).collect();
    Ok(Menu::new(names, prices)?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - Default: INFO, sqlx queries quieted to WARN
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the ticket database path.
///
/// ## Resolution Order
/// 1. `KIOSK_DB_PATH` environment variable (development override)
/// 2. Platform data dir, e.g. `~/.local/share/cafe-kiosk/queue_number.db`
/// 3. `queue_number.db` in the current directory
fn database_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var("KIOSK_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    if let Some(proj_dirs) = ProjectDirs::from("kr", "cafe", "kiosk") {
        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;
        return Ok(data_dir.join("queue_number.db"));
    }

    Ok(PathBuf::from("queue_number.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_builds_a_valid_menu() {
        let menu = build_menu().unwrap();

        assert_eq!(menu.len(), 4);
        assert_eq!(menu.item(0).unwrap().name, "Americano");
        assert_eq!(menu.price(3).unwrap(), Won::new(4000));
    }
}
