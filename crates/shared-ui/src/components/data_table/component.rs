use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Header row; wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Cell holding the row's action buttons.
#[component]
pub fn DataTableActions(children: Element) -> Element {
    rsx! {
        td { class: "data-table-actions", {children} }
    }
}

/// Full-width row shown when the table has nothing to display.
#[component]
pub fn DataTableEmpty(colspan: u32, message: String) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", "{message}" }
        }
    }
}
