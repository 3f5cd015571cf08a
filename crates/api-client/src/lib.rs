//! Typed client for the remote retail API.
//!
//! Every authenticated request carries the signed-in employee's email in the
//! `loggedInEmail` header; the server uses it in place of a session token.

pub mod api;
pub mod config;

pub use api::{
    ApiClient, CashierReceipts, Deletable, Editable, Employees, Products, Receipts, Resource,
    Sections, LOGGED_IN_EMAIL_HEADER,
};
