use crate::common::StubApi;
use api_client::Sections;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Section, SectionForm};

const ADMIN: &str = "admin@shop.lk";

#[tokio::test]
async fn test_list_sections() {
    let stub = StubApi::start().await;
    stub.respond_json(
        "GET",
        "/api/admin/sections",
        200,
        json!([{ "id": 4, "name": "Dairy", "description": "Chilled" }]),
    );

    let sections = stub.session_client(ADMIN).list::<Sections>().await.unwrap();

    assert_eq!(
        sections,
        vec![Section {
            id: 4,
            name: "Dairy".into(),
            description: "Chilled".into(),
        }]
    );
}

#[tokio::test]
async fn test_create_then_list_is_two_requests() {
    let stub = StubApi::start().await;
    stub.respond_json("GET", "/api/admin/sections", 200, json!([]));
    let client = stub.session_client(ADMIN);
    let form = SectionForm {
        name: "Bakery".into(),
        description: String::new(),
    };

    client.create::<Sections>(&form.to_payload().unwrap()).await.unwrap();
    client.list::<Sections>().await.unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].body, Some(json!({ "name": "Bakery", "description": "" })));
    assert_eq!(requests[1].method, "GET");
    assert!(requests
        .iter()
        .all(|r| r.logged_in_email.as_deref() == Some(ADMIN)));
}

#[tokio::test]
async fn test_delete_section_in_use_surfaces_server_message() {
    let stub = StubApi::start().await;
    stub.respond_json(
        "DELETE",
        "/api/admin/sections/4",
        409,
        json!({ "error": "Section has products" }),
    );

    let err = stub.session_client(ADMIN).delete::<Sections>(4).await.unwrap_err();

    assert_eq!(err.message, "Section has products");
}
