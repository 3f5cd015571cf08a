use crate::auth::use_session;
use crate::format_helpers::format_money;
use api_client::Products;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMinus, LdPlus, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{Cart, Product};
use shared_ui::{
    Button, ButtonVariant, DataTable, DataTableActions, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormField, Input, Modal,
    ModalBody, ModalFooter, ModalHeader, StatusMessage,
};

/// Cashier's cart builder: search the catalogue, assemble lines, submit as
/// a receipt.
///
/// The cart survives closing and reopening the modal; it is cleared only
/// after a successful submit. The catalogue is re-read every time the modal
/// opens so prices and new products stay current.
#[component]
pub fn PointOfSaleModal(
    open: bool,
    on_close: EventHandler<()>,
    on_submitted: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut catalogue =
        use_resource(move || async move { session.client().list::<Products>().await });

    let mut cart = use_signal(Cart::new);
    let mut customer_name = use_signal(String::new);
    let mut error_msg = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let mut was_open = use_signal(|| open);
    use_effect(use_reactive((&open,), move |(open,)| {
        if just_opened(*was_open.peek(), open) {
            catalogue.restart();
        }
        was_open.set(open);
    }));

    use_effect(move || {
        if let Some(Ok(products)) = catalogue.read().as_ref() {
            cart.write().set_catalogue(products.clone());
        }
    });

    let handle_submit = move |_| {
        if submitting() {
            return;
        }
        let snapshot = cart.read().clone();
        let customer = customer_name();
        let client = session.client();

        spawn(async move {
            submitting.set(true);
            error_msg.set(String::new());

            match client.submit_cart(&snapshot, &customer).await {
                Ok(()) => {
                    cart.write().clear();
                    customer_name.set(String::new());
                    on_submitted.call(());
                }
                Err(err) => error_msg.set(err.friendly_message()),
            }
            submitting.set(false);
        });
    };

    let catalogue_error = match catalogue.read().as_ref() {
        Some(Err(err)) => err.friendly_message(),
        _ => String::new(),
    };
    let current = cart.read().clone();
    let results: Vec<Product> = current.search_results().into_iter().cloned().collect();
    let has_term = !current.search_term().trim().is_empty();
    let total = format_money(current.total());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pos.css") }

        Modal { open, on_close: move |_| on_close.call(()),
            ModalHeader { title: "New Sale", on_close: move |_| on_close.call(()) }
            ModalBody {
                StatusMessage { message: catalogue_error }
                StatusMessage { message: error_msg() }

                FormField { label: "Customer Name",
                    Input {
                        value: customer_name(),
                        placeholder: "Customer name",
                        on_input: move |evt: FormEvent| customer_name.set(evt.value()),
                    }
                }

                FormField { label: "Search Products",
                    Input {
                        value: current.search_term().to_string(),
                        placeholder: "Search by name or ID",
                        on_input: move |evt: FormEvent| cart.write().set_search_term(evt.value()),
                    }
                }

                if has_term {
                    ul { class: "pos-results",
                        if results.is_empty() {
                            li { class: "pos-results-empty", "No matching products." }
                        }
                        for product in results.iter() {
                            {
                                let to_add = product.clone();
                                rsx! {
                                    li { key: "{product.id}",
                                        button {
                                            class: "pos-result",
                                            r#type: "button",
                                            onclick: move |_| cart.write().add(to_add.clone()),
                                            span { class: "pos-result-name", "#{product.id} {product.name}" }
                                            span { class: "pos-result-price", "{format_money(product.price)}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Product" }
                        DataTableColumn { "Price" }
                        DataTableColumn { "Qty" }
                        DataTableColumn { "Subtotal" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        if current.is_empty() {
                            DataTableEmpty { colspan: 5, message: "Cart is empty." }
                        }
                        for line in current.lines().iter() {
                            {
                                let id = line.product.id;
                                rsx! {
                                    DataTableRow { key: "{id}",
                                        DataTableCell { "{line.product.name}" }
                                        DataTableCell { "{format_money(line.product.price)}" }
                                        DataTableCell {
                                            div { class: "pos-qty",
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    aria_label: "Decrease quantity",
                                                    onclick: move |_| cart.write().update_quantity(id, -1),
                                                    Icon::<LdMinus> { icon: LdMinus, width: 14, height: 14 }
                                                }
                                                span { class: "pos-qty-value", "{line.quantity}" }
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    aria_label: "Increase quantity",
                                                    onclick: move |_| cart.write().update_quantity(id, 1),
                                                    Icon::<LdPlus> { icon: LdPlus, width: 14, height: 14 }
                                                }
                                            }
                                        }
                                        DataTableCell { "{format_money(line.line_total())}" }
                                        DataTableActions {
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                aria_label: "Remove",
                                                onclick: move |_| cart.write().remove(id),
                                                Icon::<LdTrash2> { icon: LdTrash2, width: 14, height: 14 }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "pos-total",
                    span { "Total" }
                    strong { "{total}" }
                }
            }
            ModalFooter {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                Button {
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() { "Submitting..." } else { "Create Receipt" }
                }
            }
        }
    }
}

/// True on the closed to open transition only.
fn just_opened(was_open: bool, open: bool) -> bool {
    open && !was_open
}
