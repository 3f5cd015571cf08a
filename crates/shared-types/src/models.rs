use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Roles & session
// ---------------------------------------------------------------------------

/// Employee role as reported by the remote API.
///
/// The API sends uppercase strings (`"ADMIN"`, `"CASHIER"`, `"STOREKEEPER"`).
/// Anything else is preserved verbatim in `Unknown` so it can be shown back
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    #[default]
    Cashier,
    Storekeeper,
    Unknown(String),
}

impl Role {
    /// Parse a role string case-insensitively. Unknown values are kept as-is.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "ADMIN" => Role::Admin,
            "CASHIER" => Role::Cashier,
            "STOREKEEPER" => Role::Storekeeper,
            _ => Role::Unknown(s.to_string()),
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::Cashier => "CASHIER",
            Role::Storekeeper => "STOREKEEPER",
            Role::Unknown(s) => s,
        }
    }

    /// Human-readable label for badges and selects.
    pub fn label(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Cashier => "Cashier",
            Role::Storekeeper => "StoreKeeper",
            Role::Unknown(s) => s,
        }
    }
}

/// Roles an admin can assign, in select order. The first is the form default.
pub const ASSIGNABLE_ROLES: [Role; 3] = [Role::Cashier, Role::Storekeeper, Role::Admin];

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::parse(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login endpoint response. Extra fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub employee_name: String,
    pub role: Role,
}

/// The in-memory record of the currently authenticated employee.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub employee_name: String,
    pub role: Role,
    /// The email typed at login; sent as `loggedInEmail` on every request.
    pub email: String,
}

impl Session {
    pub fn from_login(response: LoginResponse, email: impl Into<String>) -> Self {
        Self {
            employee_name: response.employee_name,
            role: response.role,
            email: email.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub f_name: String,
    pub l_name: String,
    #[serde(default)]
    pub address: String,
    pub email: String,
    #[serde(rename = "phoneNo", default)]
    pub phone_no: i64,
    #[serde(default)]
    pub salary: i64,
    pub role: Role,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.f_name, self.l_name).trim().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    /// Name of the owning section. The API calls this field `category`.
    #[serde(rename = "category", default)]
    pub section: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A persisted record of a completed sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: i64,
    pub customer_name: String,
    /// ISO-8601 timestamp as sent by the server.
    #[serde(default)]
    pub date_time: String,
    pub total_amount: f64,
    #[serde(default)]
    pub cashier_email: String,
    /// Free-text line descriptions, e.g. `"2 x Lux Soap"`.
    #[serde(default)]
    pub items: Vec<String>,
}
