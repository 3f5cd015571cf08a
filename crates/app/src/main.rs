use api_client::{config::resolve_base_url, ApiClient};
use dioxus::prelude::*;

mod auth;
mod format_helpers;
mod views;

use auth::SessionState;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

/// Embedded at build time; a browser build has no filesystem to read from.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let base_url = resolve_base_url(CONFIG_TOML, option_env!("POS_API_BASE_URL"));
        tracing::info!(%base_url, platform = client_platform(), "Retail console starting");
        SessionState::new(ApiClient::new(base_url))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        views::Shell {}
    }
}
