use super::{field_error, list_view, submit_error};
use crate::auth::use_session;
use api_client::Sections;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_types::{AppError, ModalState, Section, SectionForm};
use shared_ui::{
    Button, ButtonVariant, ConfirmDialog, DataTable, DataTableActions, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Form, FormField,
    Input, Modal, ModalBody, ModalFooter, ModalHeader, PageActions, PageHeader, PageTitle,
    SkeletonRows, StatusMessage, Textarea,
};

#[component]
pub fn SectionsPanel() -> Element {
    let session = use_session();
    let mut sections =
        use_resource(move || async move { session.client().list::<Sections>().await });

    let mut modal = use_signal(ModalState::<Section>::default);
    let mut form = use_signal(SectionForm::default);
    let mut form_error = use_signal(|| Option::<AppError>::None);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Section>::None);
    let mut deleting = use_signal(|| false);
    let mut action_error = use_signal(String::new);

    let open_create = move |_| {
        form.set(SectionForm::default());
        form_error.set(None);
        modal.set(ModalState::Creating);
    };

    let handle_save = move |_: FormEvent| {
        let target = modal.read().editing().map(|s| s.id);
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
                Some(id) => client.update::<Sections>(id, &payload).await,
                None => client.create::<Sections>(&payload).await,
            };
            saving.set(false);

            match result {
                Ok(()) => {
                    modal.set(ModalState::Closed);
                    sections.restart();
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
            let result = client.delete::<Sections>(target.id).await;
            deleting.set(false);
            pending_delete.set(None);

            match result {
                Ok(()) => {
                    action_error.set(String::new());
                    sections.restart();
                }
                Err(err) => action_error.set(err.friendly_message()),
            }
        });
    };

    let (rows, is_loading, load_error) = list_view(sections.read().as_ref());
    let errors = form_error();
    let delete_message = pending_delete()
        .map(|s| {
            format!(
                "Delete section \"{}\"? Products in this section may be affected.",
                s.name
            )
        })
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./panels.css") }

        section { class: "panel",
            PageHeader {
                PageTitle { "Section Management" }
                PageActions {
                    Button { onclick: open_create,
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Section"
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
                        DataTableColumn { "Description" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        if rows.is_empty() {
                            DataTableEmpty { colspan: 4, message: "No sections found." }
                        }
                        for section in rows.iter() {
                            {
                                let for_edit = section.clone();
                                let for_delete = section.clone();
                                rsx! {
                                    DataTableRow { key: "{section.id}",
                                        DataTableCell { "{section.id}" }
                                        DataTableCell { "{section.name}" }
                                        DataTableCell { "{section.description}" }
                                        DataTableActions {
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: move |_| {
                                                    form.set(SectionForm::from_section(&for_edit));
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
                    title: modal.read().form_title("Section"),
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
                title: "Delete Section",
                message: delete_message,
                busy: deleting(),
                on_confirm: handle_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
