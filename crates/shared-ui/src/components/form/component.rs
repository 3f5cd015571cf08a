use dioxus::prelude::*;

/// Form wrapper that prevents the browser's default submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Label + control + optional field error, stacked.
#[component]
pub fn FormField(
    label: String,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "form-field-label", "{label}" }
            {children}
            if let Some(err) = error {
                p { class: "form-field-error", "{err}" }
            }
        }
    }
}
