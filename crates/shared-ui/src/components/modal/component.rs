use dioxus::prelude::*;

/// Centered overlay holding a create, edit or view form.
///
/// Clicking the backdrop closes the modal; clicks inside the panel do not.
#[component]
pub fn Modal(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "modal-overlay",
            "data-open": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-panel",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Title row with a close button.
#[component]
pub fn ModalHeader(title: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-header",
            h2 { class: "modal-title", "{title}" }
            button {
                class: "modal-close",
                r#type: "button",
                aria_label: "Close",
                onclick: move |_| on_close.call(()),
                "×"
            }
        }
    }
}

#[component]
pub fn ModalBody(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "modal-body", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Right-aligned action row at the bottom of the modal.
#[component]
pub fn ModalFooter(children: Element) -> Element {
    rsx! {
        div { class: "modal-footer", {children} }
    }
}
