use super::{field_error, list_view, select_options, submit_error};
use crate::auth::use_session;
use crate::format_helpers::format_money;
use api_client::{Products, Sections};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_types::{AppError, ModalState, Product, ProductForm};
use shared_ui::{
    Button, ButtonVariant, ConfirmDialog, DataTable, DataTableActions, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Form, FormField,
    FormSelect, Input, Modal, ModalBody, ModalFooter, ModalHeader, PageActions, PageHeader,
    PageTitle, SkeletonRows, StatusMessage, Textarea,
};

/// Product catalogue management, shared by the admin and storekeeper
/// dashboards.
#[component]
pub fn ProductsPanel() -> Element {
    let session = use_session();
    let mut products =
        use_resource(move || async move { session.client().list::<Products>().await });
    // Feeds the section picker. A failure here only degrades the picker.
    let sections = use_resource(move || async move { session.client().list::<Sections>().await });

    let mut modal = use_signal(ModalState::<Product>::default);
    let mut form = use_signal(ProductForm::default);
    let mut form_error = use_signal(|| Option::<AppError>::None);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Product>::None);
    let mut deleting = use_signal(|| false);
    let mut action_error = use_signal(String::new);

    let open_create = move |_| {
        form.set(ProductForm::default());
        form_error.set(None);
        modal.set(ModalState::Creating);
    };

    let handle_save = move |_: FormEvent| {
        let target = modal.read().editing().map(|p| p.id);
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
            let result = match target {
                Some(id) => client.update::<Products>(id, &payload).await,
                None => client.create::<Products>(&payload).await,
            };
            saving.set(false);

            match result {
                Ok(()) => {
                    modal.set(ModalState::Closed);
                    products.restart();
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
            let result = client.delete::<Products>(target.id).await;
            deleting.set(false);
            pending_delete.set(None);

            match result {
                Ok(()) => {
                    action_error.set(String::new());
                    products.restart();
                }
                Err(err) => action_error.set(err.friendly_message()),
            }
        });
    };

    let (rows, is_loading, load_error) = list_view(products.read().as_ref());
    let section_names: Vec<String> = match sections.read().as_ref() {
        Some(Ok(list)) => list.iter().map(|s| s.name.clone()).collect(),
        _ => Vec::new(),
    };
    let errors = form_error();
    let current_section = form.read().section.clone();
    let section_options = select_options(
        section_names.iter().map(|name| (name.clone(), name.clone())),
        &current_section,
        &current_section,
    );
    let delete_message = pending_delete()
        .map(|p| format!("Delete product \"{}\"? This cannot be undone.", p.name))
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./panels.css") }

        section { class: "panel",
            PageHeader {
                PageTitle { "Product Management" }
                PageActions {
                    Button { onclick: open_create,
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Product"
                    }
                }
            }

            StatusMessage { message: load_error }
            StatusMessage { message: action_error() }

            if is_loading {
                SkeletonRows {}
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "ID" }
                        DataTableColumn { "Name" }
                        DataTableColumn { "Price" }
                        DataTableColumn { "Quantity" }
                        DataTableColumn { "Section" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        if rows.is_empty() {
                            DataTableEmpty { colspan: 6, message: "No products found." }
                        }
                        for product in rows.iter() {
                            {
                                let for_edit = product.clone();
                                let for_delete = product.clone();
                                rsx! {
                                    DataTableRow { key: "{product.id}",
                                        DataTableCell { "{product.id}" }
                                        DataTableCell { "{product.name}" }
                                        DataTableCell { "{format_money(product.price)}" }
                                        DataTableCell { "{product.quantity}" }
                                        DataTableCell { "{product.section}" }
                                        DataTableActions {
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: move |_| {
                                                    form.set(ProductForm::from_product(&for_edit));
                                                    form_error.set(None);
                                                    modal.set(ModalState::Editing(for_edit.clone()));
                                                },
                                                "Edit"
                                            }
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

            Modal {
                open: modal.read().is_form(),
                on_close: move |_| modal.set(ModalState::Closed),
                ModalHeader {
                    title: modal.read().form_title("Product"),
                    on_close: move |_| modal.set(ModalState::Closed),
                }
                Form { onsubmit: handle_save,
                    ModalBody {
                        StatusMessage { message: submit_error(&errors) }

                        FormField { label: "Name", error: field_error(&errors, "name"),
                            Input {
                                value: form.read().name.clone(),
                                on_input: move |evt: FormEvent| form.write().name = evt.value(),
                            }
                        }
                        FormField { label: "Description",
                            Textarea {
                                value: form.read().description.clone(),
                                on_input: move |evt: FormEvent| form.write().description = evt.value(),
                            }
                        }
                        div { class: "form-row",
                            FormField { label: "Price", error: field_error(&errors, "price"),
                                Input {
                                    decimal: true,
                                    placeholder: "0.00",
                                    value: form.read().price.clone(),
                                    on_input: move |evt: FormEvent| form.write().price = evt.value(),
                                }
                            }
                            FormField { label: "Quantity", error: field_error(&errors, "quantity"),
                                Input {
                                    input_type: "number",
                                    value: form.read().quantity.clone(),
                                    on_input: move |evt: FormEvent| form.write().quantity = evt.value(),
                                }
                            }
                        }
                        FormField { label: "Section", error: field_error(&errors, "section"),
                            if section_names.is_empty() {
                                Input {
                                    value: current_section.clone(),
                                    placeholder: "Section name",
                                    on_input: move |evt: FormEvent| form.write().section = evt.value(),
                                }
                            } else {
                                FormSelect {
                                    value: current_section.clone(),
                                    placeholder: "Select a section".to_string(),
                                    onchange: move |evt: FormEvent| form.write().section = evt.value(),
                                    for (value, label) in section_options.iter() {
                                        option {
                                            key: "{value}",
                                            value: "{value}",
                                            selected: *value == current_section,
                                            "{label}"
                                        }
                                    }
                                }
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

            ConfirmDialog {
                open: pending_delete.read().is_some(),
                title: "Delete Product",
                message: delete_message,
                busy: deleting(),
                on_confirm: handle_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
