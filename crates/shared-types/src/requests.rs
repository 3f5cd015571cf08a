//! Request payloads sent to the remote API, and the string-backed form
//! states the UI edits before coercing them into payloads.

use crate::error::AppError;
use crate::models::{Employee, Product, Role, Section};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Message attached to every form validation error.
pub const FORM_INVALID: &str = "Please fix the highlighted fields";

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeePayload {
    pub f_name: String,
    pub l_name: String,
    pub address: String,
    pub email: String,
    #[serde(rename = "phoneNo")]
    pub phone_no: i64,
    pub salary: i64,
    /// Omitted on update when the admin left the field blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(rename = "category")]
    pub section: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionPayload {
    pub name: String,
    pub description: String,
}

/// Body of a receipt-creation request (admin or cashier endpoint).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReceipt {
    pub customer_name: String,
    pub total_amount: f64,
    pub cashier_email: String,
    pub items: Vec<String>,
}

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// Collects per-field problems while a form is being coerced.
#[derive(Debug, Default)]
struct FieldErrors(HashMap<String, String>);

impl FieldErrors {
    fn required(&mut self, field: &str, value: &str, label: &str) {
        if value.trim().is_empty() {
            self.0.insert(field.to_string(), format!("{label} is required"));
        }
    }

    fn decimal(&mut self, field: &str, value: &str, label: &str) -> f64 {
        match value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                self.0.insert(field.to_string(), format!("{label} must be a number"));
                0.0
            }
        }
    }

    fn whole(&mut self, field: &str, value: &str, label: &str) -> i64 {
        match value.trim().parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                self.0.insert(field.to_string(), format!("{label} must be a whole number"));
                0
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, AppError> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(AppError::validation(FORM_INVALID, self.0))
        }
    }
}

/// Split a multi-line text area into receipt item strings, dropping blank lines.
pub fn split_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub f_name: String,
    pub l_name: String,
    pub address: String,
    pub email: String,
    pub phone_no: String,
    pub salary: String,
    pub password: String,
    pub role: Role,
}

impl EmployeeForm {
    /// Prefill from an existing employee. The password is never round-tripped.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            f_name: employee.f_name.clone(),
            l_name: employee.l_name.clone(),
            address: employee.address.clone(),
            email: employee.email.clone(),
            phone_no: employee.phone_no.to_string(),
            salary: employee.salary.to_string(),
            password: String::new(),
            role: employee.role.clone(),
        }
    }

    /// Coerce into a payload. On update a blank password is omitted; on
    /// create it is required.
    pub fn to_payload(&self, is_update: bool) -> Result<EmployeePayload, AppError> {
        let mut errors = FieldErrors::default();
        errors.required("f_name", &self.f_name, "First name");
        errors.required("l_name", &self.l_name, "Last name");
        errors.required("address", &self.address, "Address");
        errors.required("email", &self.email, "Email");
        let phone_no = errors.whole("phone_no", &self.phone_no, "Phone number");
        let salary = errors.whole("salary", &self.salary, "Salary");

        let password = if self.password.is_empty() {
            if !is_update {
                errors.required("password", &self.password, "Password");
            }
            None
        } else {
            Some(self.password.clone())
        };

        errors.finish(EmployeePayload {
            f_name: self.f_name.trim().to_string(),
            l_name: self.l_name.trim().to_string(),
            address: self.address.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_no,
            salary,
            password,
            role: self.role.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub section: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: format!("{:.2}", product.price),
            quantity: product.quantity.to_string(),
            section: product.section.clone(),
        }
    }

    pub fn to_payload(&self) -> Result<ProductPayload, AppError> {
        let mut errors = FieldErrors::default();
        errors.required("name", &self.name, "Product name");
        errors.required("section", &self.section, "Section");
        let price = errors.decimal("price", &self.price, "Price");
        let quantity = errors.whole("quantity", &self.quantity, "Quantity");

        errors.finish(ProductPayload {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            price,
            quantity,
            section: self.section.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionForm {
    pub name: String,
    pub description: String,
}

impl SectionForm {
    pub fn from_section(section: &Section) -> Self {
        Self {
            name: section.name.clone(),
            description: section.description.clone(),
        }
    }

    pub fn to_payload(&self) -> Result<SectionPayload, AppError> {
        let mut errors = FieldErrors::default();
        errors.required("name", &self.name, "Section name");
        errors.finish(SectionPayload {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
        })
    }
}

/// Manual receipt entry used by the admin receipts panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptForm {
    pub customer_name: String,
    pub cashier_email: String,
    pub total_amount: String,
    /// One item per line.
    pub items: String,
}

impl ReceiptForm {
    /// A blank form with the cashier email prefilled.
    pub fn for_cashier(email: impl Into<String>) -> Self {
        Self {
            cashier_email: email.into(),
            ..Self::default()
        }
    }

    pub fn to_payload(&self) -> Result<NewReceipt, AppError> {
        let mut errors = FieldErrors::default();
        errors.required("customer_name", &self.customer_name, "Customer name");
        errors.required("cashier_email", &self.cashier_email, "Cashier email");
        let total_amount = errors.decimal("total_amount", &self.total_amount, "Total amount");
        let items = split_items(&self.items);
        if items.is_empty() {
            errors
                .0
                .insert("items".to_string(), "Add at least one item".to_string());
        }

        errors.finish(NewReceipt {
            customer_name: self.customer_name.trim().to_string(),
            total_amount,
            cashier_email: self.cashier_email.trim().to_string(),
            items,
        })
    }
}
