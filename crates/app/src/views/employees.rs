use super::{field_error, list_view, select_options, submit_error};
use crate::auth::use_session;
use api_client::Employees;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_types::{AppError, Employee, EmployeeForm, ModalState, Role, ASSIGNABLE_ROLES};
use shared_ui::{
    Badge, BadgeTone, Button, ButtonVariant, ConfirmDialog, DataTable, DataTableActions,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    Form, FormField, FormSelect, Input, Modal, ModalBody, ModalFooter, ModalHeader, PageActions,
    PageHeader, PageTitle, SkeletonRows, StatusKind, StatusMessage,
};

fn role_tone(role: &Role) -> BadgeTone {
    match role {
        Role::Admin => BadgeTone::Danger,
        Role::Cashier => BadgeTone::Info,
        Role::Storekeeper => BadgeTone::Success,
        Role::Unknown(_) => BadgeTone::Neutral,
    }
}

/// Admin-only employee management.
#[component]
pub fn EmployeesPanel() -> Element {
    let session = use_session();
    let mut employees =
        use_resource(move || async move { session.client().list::<Employees>().await });

    let mut modal = use_signal(ModalState::<Employee>::default);
    let mut form = use_signal(EmployeeForm::default);
    let mut form_error = use_signal(|| Option::<AppError>::None);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Employee>::None);
    let mut deleting = use_signal(|| false);
    let mut action_error = use_signal(String::new);

    let open_create = move |_| {
        form.set(EmployeeForm::default());
        form_error.set(None);
        modal.set(ModalState::Creating);
    };

    let handle_save = move |_: FormEvent| {
        let target = modal.read().editing().cloned();
        let payload = match form.read().to_payload(target.is_some()) {
            Ok(payload) => payload,
            Err(err) => {
                form_error.set(Some(err));
                return;
            }
        };
        let client = session.client();

        spawn(async move {
            saving.set(true);
            let result = match &target {
                Some(existing) => client.update::<Employees>(existing.id, &payload).await,
                None => client.create::<Employees>(&payload).await,
            };
            saving.set(false);

            match result {
                Ok(()) => {
                    modal.set(ModalState::Closed);
                    employees.restart();
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
            let result = client.delete::<Employees>(target.id).await;
            deleting.set(false);
            pending_delete.set(None);

            match result {
                Ok(()) => {
                    action_error.set(String::new());
                    employees.restart();
                }
                Err(err) => action_error.set(err.friendly_message()),
            }
        });
    };

    let (rows, is_loading, load_error) = list_view(employees.read().as_ref());
    let errors = form_error();
    let current_role = form.read().role.as_str().to_string();
    let role_options = select_options(
        ASSIGNABLE_ROLES
            .iter()
            .map(|r| (r.as_str().to_string(), r.label().to_string())),
        &current_role,
        form.read().role.label(),
    );
    let is_editing = modal.read().editing().is_some();
    let delete_message = pending_delete()
        .map(|e| format!("Delete employee {} ({})? This cannot be undone.", e.full_name(), e.email))
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./panels.css") }

        section { class: "panel",
            PageHeader {
                PageTitle { "Employee Management" }
                PageActions {
                    Button { onclick: open_create,
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Employee"
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
                        DataTableColumn { "First Name" }
                        DataTableColumn { "Last Name" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Role" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        if rows.is_empty() {
                            DataTableEmpty { colspan: 6, message: "No employees found." }
                        }
                        for employee in rows.iter() {
                            {
                                let for_edit = employee.clone();
                                let for_delete = employee.clone();
                                let tone = role_tone(&employee.role);
                                rsx! {
                                    DataTableRow { key: "{employee.id}",
                                        DataTableCell { "{employee.id}" }
                                        DataTableCell { "{employee.f_name}" }
                                        DataTableCell { "{employee.l_name}" }
                                        DataTableCell { "{employee.email}" }
                                        DataTableCell {
                                            Badge { tone, "{employee.role.label()}" }
                                        }
                                        DataTableActions {
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: move |_| {
                                                    form.set(EmployeeForm::from_employee(&for_edit));
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
                    title: modal.read().form_title("Employee"),
                    on_close: move |_| modal.set(ModalState::Closed),
                }
                Form { onsubmit: handle_save,
                    ModalBody {
                        StatusMessage { kind: StatusKind::Error, message: submit_error(&errors) }

                        div { class: "form-row",
                            FormField { label: "First Name", error: field_error(&errors, "f_name"),
                                Input {
                                    value: form.read().f_name.clone(),
                                    on_input: move |evt: FormEvent| form.write().f_name = evt.value(),
                                }
                            }
                            FormField { label: "Last Name", error: field_error(&errors, "l_name"),
                                Input {
                                    value: form.read().l_name.clone(),
                                    on_input: move |evt: FormEvent| form.write().l_name = evt.value(),
                                }
                            }
                        }
                        FormField { label: "Address", error: field_error(&errors, "address"),
                            Input {
                                value: form.read().address.clone(),
                                on_input: move |evt: FormEvent| form.write().address = evt.value(),
                            }
                        }
                        FormField { label: "Email", error: field_error(&errors, "email"),
                            Input {
                                input_type: "email",
                                value: form.read().email.clone(),
                                on_input: move |evt: FormEvent| form.write().email = evt.value(),
                            }
                        }
                        div { class: "form-row",
                            FormField { label: "Phone Number", error: field_error(&errors, "phone_no"),
                                Input {
                                    input_type: "tel",
                                    value: form.read().phone_no.clone(),
                                    on_input: move |evt: FormEvent| form.write().phone_no = evt.value(),
                                }
                            }
                            FormField { label: "Salary", error: field_error(&errors, "salary"),
                                Input {
                                    input_type: "number",
                                    value: form.read().salary.clone(),
                                    on_input: move |evt: FormEvent| form.write().salary = evt.value(),
                                }
                            }
                        }
                        FormField { label: "Password", error: field_error(&errors, "password"),
                            Input {
                                input_type: "password",
                                value: form.read().password.clone(),
                                placeholder: if is_editing {
                                    "Leave blank to keep current password".to_string()
                                } else {
                                    String::new()
                                },
                                on_input: move |evt: FormEvent| form.write().password = evt.value(),
                            }
                        }
                        FormField { label: "Role",
                            FormSelect {
                                value: current_role.clone(),
                                onchange: move |evt: FormEvent| form.write().role = Role::parse(&evt.value()),
                                for (value, label) in role_options.iter() {
                                    option {
                                        key: "{value}",
                                        value: "{value}",
                                        selected: *value == current_role,
                                        "{label}"
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
                title: "Delete Employee",
                message: delete_message,
                busy: deleting(),
                on_confirm: handle_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
