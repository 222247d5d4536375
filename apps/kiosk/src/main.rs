//! # Cafe Kiosk Entry Point
//!
//! Thin binary wrapper; the actual setup lives in the library for
//! testability.

#[tokio::main]
async fn main() {
    if let Err(err) = kiosk::run().await {
        eprintln!("kiosk exited with an error: {}", err);
        std::process::exit(1);
    }
}
