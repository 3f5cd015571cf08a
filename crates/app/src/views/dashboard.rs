use super::employees::EmployeesPanel;
use super::my_receipts::MyReceiptsPanel;
use super::products::ProductsPanel;
use super::receipts::{ReceiptsMode, ReceiptsPanel};
use super::sections::SectionsPanel;
use crate::auth::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdHistory, LdLayers, LdLogOut, LdPackage, LdReceipt, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{Dashboard, Tab};
use shared_ui::{
    Button, ButtonVariant, Sidebar, SidebarFooter, SidebarHeader, SidebarNav, SidebarNavItem,
};

fn tab_icon(tab: Tab) -> Element {
    match tab {
        Tab::Employees => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        Tab::Products => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        Tab::Sections => rsx! { Icon::<LdLayers> { icon: LdLayers, width: 18, height: 18 } },
        Tab::Receipts => rsx! { Icon::<LdReceipt> { icon: LdReceipt, width: 18, height: 18 } },
        Tab::MyReceipts => rsx! { Icon::<LdHistory> { icon: LdHistory, width: 18, height: 18 } },
    }
}

/// Sidebar with the dashboard's tabs and the active management panel.
#[component]
pub fn DashboardLayout(dashboard: Dashboard, tab: Tab) -> Element {
    let mut session = use_session();
    let employee_name = session.employee_name();

    let panel = match tab {
        Tab::Employees => rsx! { EmployeesPanel {} },
        Tab::Products => rsx! { ProductsPanel {} },
        Tab::Sections => rsx! { SectionsPanel {} },
        Tab::Receipts if dashboard == Dashboard::Cashier => rsx! {
            ReceiptsPanel { mode: ReceiptsMode::Cashier }
        },
        Tab::Receipts => rsx! { ReceiptsPanel { mode: ReceiptsMode::Admin } },
        Tab::MyReceipts => rsx! { MyReceiptsPanel {} },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            Sidebar {
                SidebarHeader {
                    title: dashboard.title().to_string(),
                    subtitle: format!("Welcome, {employee_name}"),
                }
                SidebarNav {
                    for item in dashboard.tabs().iter().copied() {
                        SidebarNavItem {
                            key: "{item.as_str()}",
                            active: item == tab,
                            onclick: move |_| session.select_tab(item),
                            span { class: "dashboard-nav-icon", {tab_icon(item)} }
                            "{item.label()}"
                        }
                    }
                }
                SidebarFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "dashboard-logout",
                        onclick: move |_| session.sign_out(),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        "Logout"
                    }
                }
            }

            main { class: "dashboard-content", {panel} }
        }
    }
}
