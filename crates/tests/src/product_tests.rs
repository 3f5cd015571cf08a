use crate::common::StubApi;
use api_client::Products;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::ProductForm;

const KEEPER: &str = "kasun@shop.lk";

#[tokio::test]
async fn test_list_products_reads_section_from_category() {
    let stub = StubApi::start().await;
    stub.respond_json(
        "GET",
        "/api/admin/products",
        200,
        json!([
            { "id": 1, "name": "Lux Soap", "description": "100g", "price": 1.5, "quantity": 40, "category": "Toiletries" },
            { "id": 2, "name": "Samba Rice 5kg", "price": 12.0, "quantity": 8 }
        ]),
    );

    let products = stub.session_client(KEEPER).list::<Products>().await.unwrap();

    assert_eq!(products[0].section, "Toiletries");
    assert_eq!(products[1].section, "");
    assert_eq!(products[1].description, "");
    assert_eq!(stub.only_request().logged_in_email.as_deref(), Some(KEEPER));
}

#[tokio::test]
async fn test_create_product_sends_coerced_numbers() {
    let stub = StubApi::start().await;
    let form = ProductForm {
        name: "Milo 400g".into(),
        description: "Tin".into(),
        price: "4.75".into(),
        quantity: "24".into(),
        section: "Beverages".into(),
    };
    let payload = form.to_payload().unwrap();

    stub.session_client(KEEPER).create::<Products>(&payload).await.unwrap();

    let req = stub.only_request();
    assert_eq!(req.path, "/api/admin/products");
    assert_eq!(
        req.body,
        Some(json!({
            "name": "Milo 400g",
            "description": "Tin",
            "price": 4.75,
            "quantity": 24,
            "category": "Beverages"
        }))
    );
}

#[tokio::test]
async fn test_update_product_error_fallback_when_body_has_no_error() {
    let stub = StubApi::start().await;
    stub.respond_json("PUT", "/api/admin/products/9", 400, json!({ "message": "bad" }));
    let form = ProductForm {
        name: "Milo".into(),
        price: "4".into(),
        quantity: "1".into(),
        section: "Beverages".into(),
        ..ProductForm::default()
    };

    let err = stub
        .session_client(KEEPER)
        .update::<Products>(9, &form.to_payload().unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.message, "Failed to update product");
}

#[test]
fn test_non_numeric_price_and_quantity_are_rejected() {
    let form = ProductForm {
        name: "Milo".into(),
        price: "four".into(),
        quantity: "1.5".into(),
        section: "Beverages".into(),
        ..ProductForm::default()
    };
    let err = form.to_payload().unwrap_err();
    assert!(err.field_errors.contains_key("price"));
    assert!(err.field_errors.contains_key("quantity"));
}
