//! Role-based view routing.
//!
//! The top-level view is a closed state machine: nobody is signed in, a
//! known role's dashboard is showing with one of its tabs active, or the
//! signed-in role has no dashboard and only a logout action is offered.

use crate::models::{Role, Session};

/// A management panel inside a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Employees,
    Products,
    Sections,
    Receipts,
    MyReceipts,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Employees => "employees",
            Tab::Products => "products",
            Tab::Sections => "sections",
            Tab::Receipts => "receipts",
            Tab::MyReceipts => "my-receipts",
        }
    }

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Employees => "Manage Employees",
            Tab::Products => "Manage Products",
            Tab::Sections => "Manage Sections",
            Tab::Receipts => "Manage Receipts",
            Tab::MyReceipts => "My Receipts",
        }
    }
}

/// Dashboards for the roles that have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    Admin,
    Cashier,
    Storekeeper,
}

const ADMIN_TABS: &[Tab] = &[Tab::Employees, Tab::Products, Tab::Sections, Tab::Receipts];
const CASHIER_TABS: &[Tab] = &[Tab::Receipts, Tab::MyReceipts];
const STOREKEEPER_TABS: &[Tab] = &[Tab::Products, Tab::Sections];

impl Dashboard {
    /// `None` for roles without a dashboard.
    pub fn for_role(role: &Role) -> Option<Self> {
        match role {
            Role::Admin => Some(Dashboard::Admin),
            Role::Cashier => Some(Dashboard::Cashier),
            Role::Storekeeper => Some(Dashboard::Storekeeper),
            Role::Unknown(_) => None,
        }
    }

    /// Tabs in sidebar order.
    pub fn tabs(&self) -> &'static [Tab] {
        match self {
            Dashboard::Admin => ADMIN_TABS,
            Dashboard::Cashier => CASHIER_TABS,
            Dashboard::Storekeeper => STOREKEEPER_TABS,
        }
    }

    pub fn default_tab(&self) -> Tab {
        match self {
            Dashboard::Admin => Tab::Employees,
            Dashboard::Cashier => Tab::Receipts,
            Dashboard::Storekeeper => Tab::Products,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dashboard::Admin => "Admin Panel",
            Dashboard::Cashier => "Cashier Panel",
            Dashboard::Storekeeper => "Storekeeper Panel",
        }
    }
}

/// What the application shell is currently rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Unauthenticated,
    Dashboard { dashboard: Dashboard, tab: Tab },
    /// Signed in with a role that has no dashboard; holds the raw role string.
    UnknownRole(String),
}

impl ViewState {
    /// The view that follows a successful login.
    pub fn for_session(session: &Session) -> Self {
        match Dashboard::for_role(&session.role) {
            Some(dashboard) => ViewState::Dashboard {
                dashboard,
                tab: dashboard.default_tab(),
            },
            None => ViewState::UnknownRole(session.role.as_str().to_string()),
        }
    }

    pub fn logout(&mut self) {
        *self = ViewState::Unauthenticated;
    }

    /// Switch tabs within the current dashboard. Returns `false` (and leaves
    /// the state unchanged) when the tab is not part of it.
    pub fn select_tab(&mut self, next: Tab) -> bool {
        match self {
            ViewState::Dashboard { dashboard, tab } if dashboard.tabs().contains(&next) => {
                *tab = next;
                true
            }
            _ => false,
        }
    }

    pub fn active_tab(&self) -> Option<Tab> {
        match self {
            ViewState::Dashboard { tab, .. } => Some(*tab),
            _ => None,
        }
    }
}
