//! Point-of-sale cart builder.
//!
//! Holds the product catalogue a cashier searches, the current search term,
//! and the ordered cart lines. All operations are synchronous and pure; the
//! API client turns a validated cart into a receipt-creation request.

use crate::error::AppError;
use crate::models::Product;
use crate::requests::NewReceipt;
use std::collections::HashMap;

/// Maximum number of products offered for a search term.
pub const MAX_SEARCH_RESULTS: usize = 5;

pub const EMPTY_CART: &str = "Please add at least one item to the receipt.";
pub const MISSING_CUSTOMER: &str = "Customer name is required.";

/// One product in the cart. `quantity` is never below 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }

    /// Receipt item text, e.g. `"2 x Lux Soap"`.
    pub fn describe(&self) -> String {
        format!("{} x {}", self.quantity, self.product.name)
    }
}

/// Case-insensitive name match or substring match on the numeric id.
/// Returns at most [`MAX_SEARCH_RESULTS`] products in catalogue order.
///
/// Surrounding whitespace is ignored, so a blank term matches nothing and
/// `" 2"` searches the same as `"2"`.
pub fn search_products<'a>(catalogue: &'a [Product], term: &str) -> Vec<&'a Product> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    catalogue
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle) || p.id.to_string().contains(term))
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

/// Round a money amount to whole cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    catalogue: Vec<Product>,
    search_term: String,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalogue(catalogue: Vec<Product>) -> Self {
        Self {
            catalogue,
            ..Self::default()
        }
    }

    /// Replace the searchable catalogue. Existing cart lines are kept.
    pub fn set_catalogue(&mut self, catalogue: Vec<Product>) {
        self.catalogue = catalogue;
    }

    pub fn catalogue(&self) -> &[Product] {
        &self.catalogue
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search(&self, term: &str) -> Vec<&Product> {
        search_products(&self.catalogue, term)
    }

    /// Results for the current search term.
    pub fn search_results(&self) -> Vec<&Product> {
        self.search(&self.search_term)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, product_id: i64) -> Option<u32> {
        self.line(product_id).map(|l| l.quantity)
    }

    fn line(&self, product_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    fn line_mut(&mut self, product_id: i64) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product.id == product_id)
    }

    /// Add one unit of `product`, merging with an existing line for the same
    /// id. Clears the search term.
    pub fn add(&mut self, product: Product) {
        match self.line_mut(product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine {
                product,
                quantity: 1,
            }),
        }
        self.search_term.clear();
    }

    /// Adjust a line's quantity by `delta`, clamping at 1. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: i64, delta: i32) {
        if let Some(line) = self.line_mut(product_id) {
            let next = (i64::from(line.quantity) + i64::from(delta)).clamp(1, i64::from(u32::MAX));
            line.quantity = u32::try_from(next).unwrap_or(1);
        }
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.search_term.clear();
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Item strings in cart order.
    pub fn item_descriptions(&self) -> Vec<String> {
        self.lines.iter().map(CartLine::describe).collect()
    }

    /// Validate the cart and build the receipt payload.
    ///
    /// Fails with a validation error when the cart is empty or the customer
    /// name is blank.
    pub fn to_receipt(&self, customer_name: &str, cashier_email: &str) -> Result<NewReceipt, AppError> {
        if self.lines.is_empty() {
            return Err(AppError::validation(EMPTY_CART, HashMap::new()));
        }
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            let mut fields = HashMap::new();
            fields.insert("customer_name".to_string(), MISSING_CUSTOMER.to_string());
            return Err(AppError::validation(MISSING_CUSTOMER, fields));
        }
        Ok(NewReceipt {
            customer_name: customer_name.to_string(),
            total_amount: round_cents(self.total()),
            cashier_email: cashier_email.to_string(),
            items: self.item_descriptions(),
        })
    }
}
