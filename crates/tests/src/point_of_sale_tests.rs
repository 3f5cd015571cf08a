use crate::common::StubApi;
use api_client::Products;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Cart, Product, EMPTY_CART, MISSING_CUSTOMER};

const CASHIER: &str = "nimal@shop.lk";

fn product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.into(),
        description: String::new(),
        price,
        quantity: 100,
        section: "Grocery".into(),
    }
}

fn catalogue() -> Vec<Product> {
    vec![
        product(1, "Lux Soap", 3.0),
        product(2, "Milo 400g", 5.5),
        product(12, "Bread", 1.25),
    ]
}

#[tokio::test]
async fn test_empty_cart_fails_without_network() {
    let stub = StubApi::start().await;
    let cart = Cart::with_catalogue(catalogue());

    let err = stub
        .session_client(CASHIER)
        .submit_cart(&cart, "Kamal")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.message, EMPTY_CART);
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_blank_customer_fails_without_network() {
    let stub = StubApi::start().await;
    let mut cart = Cart::with_catalogue(catalogue());
    cart.add(product(1, "Lux Soap", 3.0));

    let err = stub
        .session_client(CASHIER)
        .submit_cart(&cart, "   ")
        .await
        .unwrap_err();

    assert_eq!(err.message, MISSING_CUSTOMER);
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_submit_cart_posts_receipt_to_cashier_endpoint() {
    let stub = StubApi::start().await;
    stub.respond("POST", "/api/cashier/receipts", 201, "");
    let mut cart = Cart::with_catalogue(catalogue());

    cart.set_search_term("lux");
    let soap = cart.search_results()[0].clone();
    cart.add(soap.clone());
    cart.add(soap);
    cart.set_search_term("2");
    let milo = cart
        .search_results()
        .into_iter()
        .find(|p| p.id == 2)
        .cloned()
        .unwrap();
    cart.add(milo);

    stub.session_client(CASHIER)
        .submit_cart(&cart, " Kamal Perera ")
        .await
        .unwrap();

    let req = stub.only_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/cashier/receipts");
    assert_eq!(req.logged_in_email.as_deref(), Some(CASHIER));
    assert_eq!(
        req.body,
        Some(json!({
            "customerName": "Kamal Perera",
            "totalAmount": 11.5,
            "cashierEmail": CASHIER,
            "items": ["2 x Lux Soap", "1 x Milo 400g"]
        }))
    );
}

#[tokio::test]
async fn test_submit_cart_rejection_is_verbatim() {
    let stub = StubApi::start().await;
    stub.respond_json(
        "POST",
        "/api/cashier/receipts",
        422,
        json!({ "error": "Insufficient stock for Milo 400g" }),
    );
    let mut cart = Cart::with_catalogue(catalogue());
    cart.add(product(2, "Milo 400g", 5.5));

    let err = stub
        .session_client(CASHIER)
        .submit_cart(&cart, "Kamal")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::RemoteRequestFailed);
    assert_eq!(err.message, "Insufficient stock for Milo 400g");
}

#[tokio::test]
async fn test_reopening_sale_reloads_catalogue_and_keeps_cart() {
    let stub = StubApi::start().await;
    stub.respond_json(
        "GET",
        "/api/admin/products",
        200,
        json!([{ "id": 1, "name": "Lux Soap", "price": 3.0, "quantity": 10 }]),
    );
    let client = stub.session_client(CASHIER);

    let mut cart = Cart::new();
    cart.set_catalogue(client.list::<Products>().await.unwrap());
    cart.add(cart.search("lux")[0].clone());

    // Price change and a new product land while the sale is closed.
    stub.respond_json(
        "GET",
        "/api/admin/products",
        200,
        json!([
            { "id": 1, "name": "Lux Soap", "price": 3.5, "quantity": 10 },
            { "id": 7, "name": "Sunlight", "price": 2.0, "quantity": 5 }
        ]),
    );
    cart.set_catalogue(client.list::<Products>().await.unwrap());

    let fetches = stub
        .requests()
        .iter()
        .filter(|r| r.method == "GET" && r.path == "/api/admin/products")
        .count();
    assert_eq!(fetches, 2);
    assert_eq!(cart.search("sun").len(), 1);
    assert_eq!(cart.search("lux")[0].price, 3.5);
    assert_eq!(cart.quantity_of(1), Some(1));
}
