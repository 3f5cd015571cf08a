use dioxus::prelude::*;

/// Descriptions and the manual receipt's item list, one entry per line.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    /// Visible height in lines.
    #[props(default = 3)]
    rows: u32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "textarea", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        textarea {
            rows: "{rows}",
            placeholder: placeholder,
            value: value,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}
