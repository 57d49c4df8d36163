//! BikeShare dashboard - Dioxus app.
//! Web: `dx serve`. Desktop: `cargo run --features desktop`.

use dioxus_logger::tracing::{info, Level};

#[cfg(any(feature = "desktop", target_arch = "wasm32"))]
fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting BikeShare dashboard");
    dioxus::launch(bikeshare_frontend::app::App);
}

// `cargo run` for the web build hands over to the Dioxus CLI.
#[cfg(not(any(feature = "desktop", target_arch = "wasm32")))]
fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("web build: serving through dx");
    match std::process::Command::new("dx").arg("serve").status() {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            std::process::exit(1);
        }
    }
}
