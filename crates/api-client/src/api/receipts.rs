use super::{ApiClient, CashierReceipts};
use shared_types::{AppError, Cart};

impl ApiClient {
    /// Turn the point-of-sale cart into a receipt on the cashier endpoint.
    ///
    /// Validation runs first: an empty cart or blank customer name fails
    /// without any request being sent.
    #[tracing::instrument(skip(self, cart))]
    pub async fn submit_cart(&self, cart: &Cart, customer_name: &str) -> Result<(), AppError> {
        let cashier_email = self.logged_in_email().unwrap_or_default();
        let receipt = cart.to_receipt(customer_name, cashier_email)?;
        tracing::info!(
            lines = receipt.items.len(),
            total = receipt.total_amount,
            "Submitting point-of-sale receipt"
        );
        self.create::<CashierReceipts>(&receipt).await
    }
}
