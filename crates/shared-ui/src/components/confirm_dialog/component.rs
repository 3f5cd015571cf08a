use crate::components::button::{Button, ButtonVariant};
use crate::components::modal::{Modal, ModalBody, ModalFooter, ModalHeader};
use dioxus::prelude::*;

/// Yes/no confirmation shown before a destructive action.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default = false)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Modal { open, on_close: move |_| on_cancel.call(()),
            ModalHeader { title, on_close: move |_| on_cancel.call(()) }
            ModalBody {
                p { class: "confirm-dialog-message", "{message}" }
            }
            ModalFooter {
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
