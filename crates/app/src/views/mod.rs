mod dashboard;
mod employees;
mod login;
mod my_receipts;
mod pos;
mod products;
mod receipts;
mod sections;

use crate::auth::use_session;
use dioxus::prelude::*;
use shared_types::ViewState;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

pub use dashboard::DashboardLayout;
pub use login::Login;

/// Top-level switch over the signed-in state.
#[component]
pub fn Shell() -> Element {
    let session = use_session();
    let view = session.view.read().clone();

    match view {
        ViewState::Unauthenticated => rsx! { Login {} },
        ViewState::Dashboard { dashboard, tab } => rsx! { DashboardLayout { dashboard, tab } },
        ViewState::UnknownRole(role) => rsx! { UnknownRole { role } },
    }
}

/// Fallback for a role with no dashboard. Only logout is offered.
#[component]
fn UnknownRole(role: String) -> Element {
    let mut session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "No dashboard available" }
                    CardDescription { "Your account has the role \"{role}\", which has no screens in this console." }
                }
                CardContent {
                    p { "Ask an administrator to assign you a different role." }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| session.sign_out(),
                        "Logout"
                    }
                }
            }
        }
    }
}

/// Rows, loading flag and error message for a fetched collection.
///
/// A failed fetch leaves the list empty.
pub(crate) fn list_view<T: Clone>(
    fetched: Option<&Result<Vec<T>, shared_types::AppError>>,
) -> (Vec<T>, bool, String) {
    match fetched {
        None => (Vec::new(), true, String::new()),
        Some(Ok(items)) => (items.clone(), false, String::new()),
        Some(Err(err)) => (Vec::new(), false, err.friendly_message()),
    }
}

/// Field-level message for `field`, if the last submit rejected it.
pub(crate) fn field_error(
    error: &Option<shared_types::AppError>,
    field: &str,
) -> Option<String> {
    error.as_ref().and_then(|e| e.field_errors.get(field).cloned())
}

/// Banner text for a failed submit.
pub(crate) fn submit_error(error: &Option<shared_types::AppError>) -> String {
    error.as_ref().map(|e| e.friendly_message()).unwrap_or_default()
}

/// `(value, label)` pairs for a select, plus the current value when it is
/// set but no longer among the known choices (a renamed section, a role the
/// client does not know). The browser would otherwise show the first option
/// while the form still holds the old value.
pub(crate) fn select_options(
    known: impl IntoIterator<Item = (String, String)>,
    current_value: &str,
    current_label: &str,
) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = known.into_iter().collect();
    if !current_value.is_empty() && !options.iter().any(|(value, _)| value == current_value) {
        options.push((current_value.to_string(), current_label.to_string()));
    }
    options
}
