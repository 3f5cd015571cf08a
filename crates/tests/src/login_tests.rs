use crate::common::StubApi;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Dashboard, Role, Tab, ViewState, GENERIC_FAILURE};

#[tokio::test]
async fn test_login_success_builds_session_from_typed_email() {
    let stub = StubApi::start().await;
    stub.respond_json(
        "POST",
        "/api/employees/login",
        200,
        json!({ "employeeName": "Nimal Perera", "role": "CASHIER", "email": "other@shop.lk" }),
    );

    let session = stub.client().login("  nimal@shop.lk ", "secret").await.unwrap();

    assert_eq!(session.employee_name, "Nimal Perera");
    assert_eq!(session.role, Role::Cashier);
    assert_eq!(session.email, "nimal@shop.lk");
}

#[tokio::test]
async fn test_login_sends_credentials_without_identity_header() {
    let stub = StubApi::start().await;
    stub.respond_json(
        "POST",
        "/api/employees/login",
        200,
        json!({ "employeeName": "Amaya", "role": "ADMIN" }),
    );

    stub.client().login("amaya@shop.lk", "pw").await.unwrap();

    let req = stub.only_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/employees/login");
    assert_eq!(req.logged_in_email, None);
    assert_eq!(req.body, Some(json!({ "email": "amaya@shop.lk", "password": "pw" })));
}

#[tokio::test]
async fn test_login_failure_surfaces_error_verbatim() {
    let stub = StubApi::start().await;
    stub.respond_json(
        "POST",
        "/api/employees/login",
        401,
        json!({ "error": "Invalid email or password" }),
    );

    let err = stub.client().login("x@shop.lk", "wrong").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::RemoteRequestFailed);
    assert_eq!(err.status, Some(401));
    assert_eq!(err.message, "Invalid email or password");
}

#[tokio::test]
async fn test_login_failure_without_error_field_uses_generic_message() {
    let stub = StubApi::start().await;
    stub.respond("POST", "/api/employees/login", 500, "<html>oops</html>");

    let err = stub.client().login("x@shop.lk", "pw").await.unwrap_err();

    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, GENERIC_FAILURE);
}

#[tokio::test]
async fn test_storekeeper_login_routes_to_products_tab() {
    let stub = StubApi::start().await;
    stub.respond_json(
        "POST",
        "/api/employees/login",
        200,
        json!({ "employeeName": "Kasun", "role": "STOREKEEPER" }),
    );

    let session = stub.client().login("kasun@shop.lk", "pw").await.unwrap();
    let view = ViewState::for_session(&session);

    assert_eq!(
        view,
        ViewState::Dashboard {
            dashboard: Dashboard::Storekeeper,
            tab: Tab::Products,
        }
    );
}

#[tokio::test]
async fn test_unrecognised_role_routes_to_fallback() {
    let stub = StubApi::start().await;
    stub.respond_json(
        "POST",
        "/api/employees/login",
        200,
        json!({ "employeeName": "Ruwan", "role": "AUDITOR" }),
    );

    let session = stub.client().login("ruwan@shop.lk", "pw").await.unwrap();
    let view = ViewState::for_session(&session);

    assert!(matches!(view, ViewState::UnknownRole(_)));
    assert_eq!(view.active_tab(), None);
}

#[tokio::test]
async fn test_unreachable_server_is_remote_failure_without_status() {
    // Nothing listens on port 1.
    let client = api_client::ApiClient::new("http://127.0.0.1:1");

    let err = client.login("x@shop.lk", "pw").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::RemoteRequestFailed);
    assert_eq!(err.status, None);
}
