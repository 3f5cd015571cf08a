use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_ui::*;

#[test]
fn empty_table_row_spans_all_columns() {
    let html = dioxus_ssr::render_element(rsx! {
        DataTableEmpty { colspan: 4, message: "No products found." }
    });
    assert!(html.contains(r#"colspan="4""#), "{html}");
    assert!(html.contains("No products found."), "{html}");
}

#[test]
fn detail_item_renders_plain_value() {
    let html = dioxus_ssr::render_element(rsx! {
        DetailItem { label: "Customer", value: "Kamal Perera" }
    });
    assert!(html.contains("Customer"));
    assert!(html.contains("Kamal Perera"));
}

#[test]
fn detail_item_prefers_children_over_value() {
    let html = dioxus_ssr::render_element(rsx! {
        DetailItem { label: "Items (2)", value: "unused",
            ul { li { "2 x Lux Soap" } }
        }
    });
    assert!(html.contains("<dt"), "{html}");
    assert!(html.contains("2 x Lux Soap"), "{html}");
    assert!(!html.contains("unused"), "{html}");
}

#[test]
fn select_placeholder_comes_first() {
    let html = dioxus_ssr::render_element(rsx! {
        FormSelect { placeholder: "Select a section".to_string(),
            option { value: "Dairy", "Dairy" }
        }
    });
    let placeholder = html.find("Select a section").expect("placeholder missing");
    let dairy = html.find(">Dairy<").expect("option missing");
    assert!(placeholder < dairy, "{html}");
}

#[test]
fn decimal_input_requests_number_pad() {
    let html = dioxus_ssr::render_element(rsx! {
        Input { decimal: true, placeholder: "0.00" }
    });
    assert!(html.contains(r#"inputmode="decimal""#), "{html}");
}

#[test]
fn active_nav_item_is_marked() {
    let html = dioxus_ssr::render_element(rsx! {
        SidebarNavItem { active: true, onclick: move |_| {}, "Manage Products" }
    });
    assert!(html.contains(r#"data-active="true""#), "{html}");
    assert!(html.contains(r#"aria-current="page""#), "{html}");
}

#[test]
fn closed_modal_renders_nothing() {
    let html = dioxus_ssr::render_element(rsx! {
        Modal { open: false, on_close: move |_| {}, p { "hidden" } }
    });
    assert_eq!(html, "");
}

#[test]
fn blank_status_message_renders_nothing() {
    let html = dioxus_ssr::render_element(rsx! {
        StatusMessage { message: "   " }
    });
    assert_eq!(html, "");
}

#[test]
fn modal_header_shows_title() {
    let html = dioxus_ssr::render_element(rsx! {
        ModalHeader { title: "Edit Product", on_close: move |_| {} }
    });
    assert!(html.contains("Edit Product"));
}
