use dioxus::prelude::*;

/// Text field for the admin forms and the sale search box.
///
/// Set `decimal` for money fields: the value stays a string for form
/// validation, but touch keyboards open on the number pad.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] decimal: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut base = vec![Attribute::new("class", "input", None, false)];
    if decimal {
        base.push(Attribute::new("inputmode", "decimal", None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            placeholder: placeholder,
            disabled: disabled,
            required: required,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}
