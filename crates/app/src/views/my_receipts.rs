use super::list_view;
use super::receipts::ReceiptViewModal;
use crate::auth::use_session;
use crate::format_helpers::{format_datetime_human, format_money};
use api_client::CashierReceipts;
use dioxus::prelude::*;
use shared_types::{filter_receipts, Receipt};
use shared_ui::{
    Button, ButtonVariant, DataTable, DataTableActions, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Input, PageActions,
    PageHeader, PageTitle, SkeletonRows, StatusKind, StatusMessage,
};

/// The signed-in cashier's own receipts with a client-side filter.
#[component]
pub fn MyReceiptsPanel() -> Element {
    let session = use_session();
    let receipts =
        use_resource(move || async move { session.client().list::<CashierReceipts>().await });

    let mut search = use_signal(String::new);
    let mut viewing = use_signal(|| Option::<Receipt>::None);

    let (all, is_loading, load_error) = list_view(receipts.read().as_ref());
    let term = search();
    let rows: Vec<Receipt> = filter_receipts(&all, &term).into_iter().cloned().collect();
    let empty_message = if all.is_empty() {
        "You have not issued any receipts yet.".to_string()
    } else {
        "No receipts match your search.".to_string()
    };

    let summary = if term.trim().is_empty() || all.is_empty() {
        String::new()
    } else {
        format!("Showing {} of {} receipts", rows.len(), all.len())
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./panels.css") }

        section { class: "panel",
            PageHeader {
                PageTitle { "My Receipts" }
                PageActions {
                    Input {
                        value: term.clone(),
                        placeholder: "Search by ID or customer",
                        class: "panel-search",
                        on_input: move |evt: FormEvent| search.set(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: term.is_empty(),
                        onclick: move |_| search.set(String::new()),
                        "Show All"
                    }
                }
            }

            StatusMessage { message: load_error }
            StatusMessage { kind: StatusKind::Info, message: summary }

            if is_loading {
                SkeletonRows {}
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "ID" }
                        DataTableColumn { "Customer" }
                        DataTableColumn { "Date" }
                        DataTableColumn { "Total" }
                        DataTableColumn { "Items" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        if rows.is_empty() {
                            DataTableEmpty { colspan: 6, message: empty_message }
                        }
                        for receipt in rows.iter() {
                            {
                                let for_view = receipt.clone();
                                rsx! {
                                    DataTableRow { key: "{receipt.id}",
                                        DataTableCell { "{receipt.id}" }
                                        DataTableCell { "{receipt.customer_name}" }
                                        DataTableCell { "{format_datetime_human(&receipt.date_time)}" }
                                        DataTableCell { "{format_money(receipt.total_amount)}" }
                                        DataTableCell { "{receipt.items.len()}" }
                                        DataTableActions {
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: move |_| viewing.set(Some(for_view.clone())),
                                                "View"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            ReceiptViewModal {
                receipt: viewing(),
                on_close: move |_| viewing.set(None),
            }
        }
    }
}
