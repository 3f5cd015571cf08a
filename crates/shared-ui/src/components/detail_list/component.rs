use dioxus::prelude::*;

/// Read-only record view, rendered as a description list. Used by the
/// receipt viewer.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One `label: value` row. Children replace `value` when given, e.g. the
/// bulleted item lines of a receipt.
#[component]
pub fn DetailItem(
    label: String,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let rich = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value",
                if rich { {children} } else { "{value}" }
            }
        }
    }
}
