//! Entry point for the Cuidamet desktop app.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

mod components;
mod mocks;
mod state;
mod user;

const APP_CSS: &str = include_str!("style.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("cuidamet_app=info,cuidamet_session=info")
        .init();

    tracing::info!("Starting Cuidamet");

    let window = WindowBuilder::new()
        .with_title("Cuidamet")
        .with_inner_size(LogicalSize::new(480.0, 860.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(window)
                .with_custom_head(format!(r#"<style>{}</style>"#, APP_CSS)),
        )
        .launch(components::app::App);
}
