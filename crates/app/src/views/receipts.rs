use super::pos::PointOfSaleModal;
use super::{field_error, list_view, submit_error};
use crate::auth::use_session;
use crate::format_helpers::{format_datetime_human, format_item_count, format_money};
use api_client::Receipts;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_types::{AppError, ModalState, Receipt, ReceiptForm};
use shared_ui::{
    Button, ButtonVariant, ConfirmDialog, DataTable, DataTableActions, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, DetailItem,
    DetailList, Form, FormField, Input, Modal, ModalBody, ModalFooter, ModalHeader, PageActions,
    PageHeader, PageTitle, SkeletonRows, StatusKind, StatusMessage, Textarea,
};

/// Who is looking at the receipts tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptsMode {
    /// Manual entry form and delete.
    Admin,
    /// Point-of-sale entry, no delete.
    Cashier,
}

/// Read-only breakdown of one receipt.
#[component]
pub fn ReceiptDetails(receipt: Receipt) -> Element {
    rsx! {
        DetailList {
            DetailItem { label: "Receipt ID", value: receipt.id.to_string() }
            DetailItem { label: "Customer", value: receipt.customer_name.clone() }
            DetailItem { label: "Date", value: format_datetime_human(&receipt.date_time) }
            DetailItem { label: "Cashier", value: receipt.cashier_email.clone() }
            DetailItem { label: "Total", value: format_money(receipt.total_amount) }
            DetailItem { label: format_item_count(receipt.items.len()),
                ul { class: "receipt-items",
                    for (idx, item) in receipt.items.iter().enumerate() {
                        li { key: "{idx}", "{item}" }
                    }
                }
            }
        }
    }
}

/// Modal wrapper around [`ReceiptDetails`].
#[component]
pub fn ReceiptViewModal(receipt: Option<Receipt>, on_close: EventHandler<()>) -> Element {
    let open = receipt.is_some();
    let title = receipt
        .as_ref()
        .map(|r| format!("Receipt #{}", r.id))
        .unwrap_or_default();

    rsx! {
        Modal { open, on_close: move |_| on_close.call(()),
            ModalHeader { title, on_close: move |_| on_close.call(()) }
            ModalBody {
                if let Some(receipt) = receipt {
                    ReceiptDetails { receipt }
                }
            }
            ModalFooter {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}

#[component]
pub fn ReceiptsPanel(mode: ReceiptsMode) -> Element {
    let session = use_session();
    let mut receipts =
        use_resource(move || async move { session.client().list::<Receipts>().await });

    let mut modal = use_signal(ModalState::<Receipt>::default);
    let mut form = use_signal(ReceiptForm::default);
    let mut form_error = use_signal(|| Option::<AppError>::None);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Receipt>::None);
    let mut deleting = use_signal(|| false);
    let mut action_error = use_signal(String::new);
    let mut notice = use_signal(String::new);

    let open_create = move |_| {
        form.set(ReceiptForm::for_cashier(session.email()));
        form_error.set(None);
        notice.set(String::new());
        modal.set(ModalState::Creating);
    };

    let handle_save = move |_: FormEvent| {
        let payload = match form.read().to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                form_error.set(Some(err));
                return;
            }
        };
        let client = session.client();

        spawn(async move {
            saving.set(true);
            let result = client.create::<Receipts>(&payload).await;
            saving.set(false);

            match result {
                Ok(()) => {
                    modal.set(ModalState::Closed);
                    notice.set("Receipt created.".to_string());
                    receipts.restart();
                }
                Err(err) => form_error.set(Some(err)),
            }
        });
    };

    let handle_delete = move |_| {
        let Some(target) = pending_delete() else {
            return;
        };
        let client = session.client();

        spawn(async move {
            deleting.set(true);
            let result = client.delete::<Receipts>(target.id).await;
            deleting.set(false);
            pending_delete.set(None);

            match result {
                Ok(()) => {
                    action_error.set(String::new());
                    receipts.restart();
                }
                Err(err) => action_error.set(err.friendly_message()),
            }
        });
    };

    let (rows, is_loading, load_error) = list_view(receipts.read().as_ref());
    let errors = form_error();
    let can_delete = mode == ReceiptsMode::Admin;
    let viewing = modal.read().viewing().cloned();
    let manual_form_open = mode == ReceiptsMode::Admin && modal.read().is_form();
    let pos_open = modal.read().is_form();
    let delete_message = pending_delete()
        .map(|r| format!("Delete receipt #{} for {}? This cannot be undone.", r.id, r.customer_name))
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./panels.css") }

        section { class: "panel",
            PageHeader {
                PageTitle { "Receipt Management" }
                PageActions {
                    Button { onclick: open_create,
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        if mode == ReceiptsMode::Cashier { "New Sale" } else { "Add Receipt" }
                    }
                }
            }

            StatusMessage { message: load_error }
            StatusMessage { message: action_error() }
            StatusMessage { kind: StatusKind::Success, message: notice() }

            if is_loading {
                SkeletonRows {}
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "ID" }
                        DataTableColumn { "Customer" }
                        DataTableColumn { "Date" }
                        DataTableColumn { "Total" }
                        DataTableColumn { "Cashier" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        if rows.is_empty() {
                            DataTableEmpty { colspan: 6, message: "No receipts found." }
                        }
                        for receipt in rows.iter() {
                            {
                                let for_view = receipt.clone();
                                let for_delete = receipt.clone();
                                rsx! {
                                    DataTableRow { key: "{receipt.id}",
                                        DataTableCell { "{receipt.id}" }
                                        DataTableCell { "{receipt.customer_name}" }
                                        DataTableCell { "{format_datetime_human(&receipt.date_time)}" }
                                        DataTableCell { "{format_money(receipt.total_amount)}" }
                                        DataTableCell { "{receipt.cashier_email}" }
                                        DataTableActions {
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: move |_| modal.set(ModalState::Viewing(for_view.clone())),
                                                "View"
                                            }
                                            if can_delete {
                                                Button {
                                                    variant: ButtonVariant::Destructive,
                                                    onclick: move |_| pending_delete.set(Some(for_delete.clone())),
                                                    "Delete"
                                                }
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
                receipt: viewing,
                on_close: move |_| modal.set(ModalState::Closed),
            }

            Modal {
                open: manual_form_open,
                on_close: move |_| modal.set(ModalState::Closed),
                ModalHeader {
                    title: modal.read().form_title("Receipt"),
                    on_close: move |_| modal.set(ModalState::Closed),
                }
                Form { onsubmit: handle_save,
                    ModalBody {
                        StatusMessage { message: submit_error(&errors) }

                        FormField { label: "Customer Name", error: field_error(&errors, "customer_name"),
                            Input {
                                value: form.read().customer_name.clone(),
                                on_input: move |evt: FormEvent| form.write().customer_name = evt.value(),
                            }
                        }
                        FormField { label: "Cashier Email", error: field_error(&errors, "cashier_email"),
                            Input {
                                input_type: "email",
                                value: form.read().cashier_email.clone(),
                                on_input: move |evt: FormEvent| form.write().cashier_email = evt.value(),
                            }
                        }
                        FormField { label: "Total Amount", error: field_error(&errors, "total_amount"),
                            Input {
                                decimal: true,
                                placeholder: "0.00",
                                value: form.read().total_amount.clone(),
                                on_input: move |evt: FormEvent| form.write().total_amount = evt.value(),
                            }
                        }
                        FormField { label: "Items (one per line)", error: field_error(&errors, "items"),
                            Textarea {
                                rows: 5,
                                placeholder: "2 x Milk Powder 400g",
                                value: form.read().items.clone(),
                                on_input: move |evt: FormEvent| form.write().items = evt.value(),
                            }
                        }
                    }
                    ModalFooter {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| modal.set(ModalState::Closed),
                            "Cancel"
                        }
                        Button { submit: true, disabled: saving(),
                            if saving() { "Saving..." } else { "{modal.read().submit_label()}" }
                        }
                    }
                }
            }

            if mode == ReceiptsMode::Cashier {
                PointOfSaleModal {
                    open: pos_open,
                    on_close: move |_| modal.set(ModalState::Closed),
                    on_submitted: move |_| {
                        modal.set(ModalState::Closed);
                        notice.set("Receipt created.".to_string());
                        receipts.restart();
                    },
                }
            }

            if can_delete {
                ConfirmDialog {
                    open: pending_delete.read().is_some(),
                    title: "Delete Receipt",
                    message: delete_message,
                    busy: deleting(),
                    on_confirm: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
