use crate::models::Receipt;

/// Filter receipts by id substring or case-insensitive customer-name substring.
/// A blank term keeps everything.
pub fn filter_receipts<'a>(receipts: &'a [Receipt], term: &str) -> Vec<&'a Receipt> {
    let term = term.trim();
    if term.is_empty() {
        return receipts.iter().collect();
    }
    let needle = term.to_lowercase();
    receipts
        .iter()
        .filter(|r| r.id.to_string().contains(term) || r.customer_name.to_lowercase().contains(&needle))
        .collect()
}
