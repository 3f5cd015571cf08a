use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatusKind {
    #[default]
    Error,
    Success,
    Info,
}

impl StatusKind {
    pub fn class(&self) -> &'static str {
        match self {
            StatusKind::Error => "error",
            StatusKind::Success => "success",
            StatusKind::Info => "info",
        }
    }
}

/// Inline banner for request failures and confirmations.
///
/// Renders nothing when `message` is empty, so callers can bind it straight
/// to an error signal.
#[component]
pub fn StatusMessage(#[props(default)] kind: StatusKind, message: String) -> Element {
    if message.trim().is_empty() {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "status-message",
            "data-kind": kind.class(),
            role: if kind == StatusKind::Error { "alert" } else { "status" },
            "{message}"
        }
    }
}
