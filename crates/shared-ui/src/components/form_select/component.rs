use dioxus::prelude::*;

/// Native `<select>` used by the employee role and product section pickers.
///
/// With a `placeholder`, a disabled first option is shown until the form
/// holds a value, so a new record never silently takes the first choice.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    placeholder: Option<String>,
    #[props(default)] onchange: EventHandler<FormEvent>,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    let nothing_chosen = value.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        select {
            class: "form-select",
            value: value,
            disabled: disabled,
            onchange: move |evt| onchange.call(evt),
            if let Some(text) = placeholder {
                option { value: "", disabled: true, selected: nothing_chosen, "{text}" }
            }
            {children}
        }
    }
}
