use crate::common::StubApi;
use api_client::{CashierReceipts, Receipts};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{filter_receipts, ReceiptForm};

const ADMIN: &str = "admin@shop.lk";
const CASHIER: &str = "nimal@shop.lk";

fn receipts_json() -> serde_json::Value {
    json!([
        {
            "id": 101, "customerName": "Kamal Perera", "dateTime": "2026-03-01T10:15:00",
            "totalAmount": 11.5, "cashierEmail": CASHIER, "items": ["2 x Lux Soap", "1 x Milo 400g"]
        },
        {
            "id": 102, "customerName": "Dilani", "dateTime": "2026-03-01T11:00:00",
            "totalAmount": 3.0, "cashierEmail": CASHIER, "items": ["1 x Bread"]
        }
    ])
}

#[tokio::test]
async fn test_admin_lists_all_receipts() {
    let stub = StubApi::start().await;
    stub.respond_json("GET", "/api/admin/receipts", 200, receipts_json());

    let receipts = stub.session_client(ADMIN).list::<Receipts>().await.unwrap();

    assert_eq!(receipts.len(), 2);
    assert_eq!(receipts[0].items, vec!["2 x Lux Soap", "1 x Milo 400g"]);
    assert_eq!(stub.only_request().path, "/api/admin/receipts");
}

#[tokio::test]
async fn test_cashier_lists_own_receipts_and_filters() {
    let stub = StubApi::start().await;
    stub.respond_json("GET", "/api/cashier/receipts", 200, receipts_json());

    let receipts = stub
        .session_client(CASHIER)
        .list::<CashierReceipts>()
        .await
        .unwrap();

    let req = stub.only_request();
    assert_eq!(req.path, "/api/cashier/receipts");
    assert_eq!(req.logged_in_email.as_deref(), Some(CASHIER));

    let by_name: Vec<i64> = filter_receipts(&receipts, "kamal").iter().map(|r| r.id).collect();
    assert_eq!(by_name, vec![101]);
    let by_id: Vec<i64> = filter_receipts(&receipts, "102").iter().map(|r| r.id).collect();
    assert_eq!(by_id, vec![102]);
}

#[tokio::test]
async fn test_manual_receipt_posts_split_items() {
    let stub = StubApi::start().await;
    let form = ReceiptForm {
        customer_name: "Walk-in".into(),
        total_amount: "7.25".into(),
        items: "1 x Bread\n\n2 x Eggs\n".into(),
        ..ReceiptForm::for_cashier(ADMIN)
    };

    stub.session_client(ADMIN)
        .create::<Receipts>(&form.to_payload().unwrap())
        .await
        .unwrap();

    let req = stub.only_request();
    assert_eq!(req.path, "/api/admin/receipts");
    assert_eq!(
        req.body,
        Some(json!({
            "customerName": "Walk-in",
            "totalAmount": 7.25,
            "cashierEmail": ADMIN,
            "items": ["1 x Bread", "2 x Eggs"]
        }))
    );
}

#[tokio::test]
async fn test_delete_receipt() {
    let stub = StubApi::start().await;

    stub.session_client(ADMIN).delete::<Receipts>(101).await.unwrap();

    let req = stub.only_request();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/api/admin/receipts/101");
}

#[tokio::test]
async fn test_undecodable_list_body_is_remote_failure() {
    let stub = StubApi::start().await;
    stub.respond("GET", "/api/admin/receipts", 200, "not json");

    let err = stub.session_client(ADMIN).list::<Receipts>().await.unwrap_err();

    assert_eq!(err.status, None);
    assert!(err.message.starts_with("Unexpected response from server"));
}
