//! CRUD endpoint families.
//!
//! Every panel talks to its collection the same way: GET the list, POST to
//! create, PUT `/{id}` to update, DELETE `/{id}` to remove. Which of those a
//! family supports is expressed with the `Editable` / `Deletable` markers.

use super::ApiClient;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AppError, Employee, EmployeePayload, NewReceipt, Product, ProductPayload, Receipt, Section,
    SectionPayload,
};

pub trait Resource {
    type Item: DeserializeOwned;
    type Payload: Serialize;

    /// Collection path relative to the API base URL.
    const PATH: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;
}

/// Supports `PUT {PATH}/{id}`.
pub trait Editable: Resource {}

/// Supports `DELETE {PATH}/{id}`.
pub trait Deletable: Resource {}

pub struct Employees;

impl Resource for Employees {
    type Item = Employee;
    type Payload = EmployeePayload;
    const PATH: &'static str = "/api/admin/employees";
    const SINGULAR: &'static str = "employee";
    const PLURAL: &'static str = "employees";
}
impl Editable for Employees {}
impl Deletable for Employees {}

pub struct Products;

impl Resource for Products {
    type Item = Product;
    type Payload = ProductPayload;
    const PATH: &'static str = "/api/admin/products";
    const SINGULAR: &'static str = "product";
    const PLURAL: &'static str = "products";
}
impl Editable for Products {}
impl Deletable for Products {}

pub struct Sections;

impl Resource for Sections {
    type Item = Section;
    type Payload = SectionPayload;
    const PATH: &'static str = "/api/admin/sections";
    const SINGULAR: &'static str = "section";
    const PLURAL: &'static str = "sections";
}
impl Editable for Sections {}
impl Deletable for Sections {}

/// All receipts, admin-scoped.
pub struct Receipts;

impl Resource for Receipts {
    type Item = Receipt;
    type Payload = NewReceipt;
    const PATH: &'static str = "/api/admin/receipts";
    const SINGULAR: &'static str = "receipt";
    const PLURAL: &'static str = "receipts";
}
impl Deletable for Receipts {}

/// The signed-in cashier's own receipts. List and create only.
pub struct CashierReceipts;

impl Resource for CashierReceipts {
    type Item = Receipt;
    type Payload = NewReceipt;
    const PATH: &'static str = "/api/cashier/receipts";
    const SINGULAR: &'static str = "receipt";
    const PLURAL: &'static str = "your receipts";
}

fn item_path<R: Resource>(id: i64) -> String {
    format!("{}/{}", R::PATH, id)
}

impl ApiClient {
    pub async fn list<R: Resource>(&self) -> Result<Vec<R::Item>, AppError> {
        tracing::debug!(path = R::PATH, "Fetching {}", R::PLURAL);
        self.get_json(R::PATH, &format!("Failed to fetch {}", R::PLURAL))
            .await
    }

    pub async fn create<R: Resource>(&self, payload: &R::Payload) -> Result<(), AppError> {
        self.send_json(
            Method::POST,
            R::PATH,
            payload,
            &format!("Failed to create {}", R::SINGULAR),
        )
        .await?;
        tracing::info!(path = R::PATH, "Created {}", R::SINGULAR);
        Ok(())
    }

    pub async fn update<R: Editable>(&self, id: i64, payload: &R::Payload) -> Result<(), AppError> {
        self.send_json(
            Method::PUT,
            &item_path::<R>(id),
            payload,
            &format!("Failed to update {}", R::SINGULAR),
        )
        .await?;
        tracing::info!(path = R::PATH, id, "Updated {}", R::SINGULAR);
        Ok(())
    }

    pub async fn delete<R: Deletable>(&self, id: i64) -> Result<(), AppError> {
        self.send_empty(
            Method::DELETE,
            &item_path::<R>(id),
            &format!("Failed to delete {}", R::SINGULAR),
        )
        .await?;
        tracing::info!(path = R::PATH, id, "Deleted {}", R::SINGULAR);
        Ok(())
    }
}
