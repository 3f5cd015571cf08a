use crate::common::StubApi;
use api_client::Employees;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{EmployeeForm, Role};

const ADMIN: &str = "admin@shop.lk";

fn filled_form() -> EmployeeForm {
    EmployeeForm {
        f_name: "Sahan".into(),
        l_name: "Silva".into(),
        address: "12 Galle Road".into(),
        email: "sahan@shop.lk".into(),
        phone_no: "771234567".into(),
        salary: "85000".into(),
        password: "changeme".into(),
        role: Role::Storekeeper,
    }
}

#[tokio::test]
async fn test_list_employees_sends_identity_and_decodes() {
    let stub = StubApi::start().await;
    stub.respond_json(
        "GET",
        "/api/admin/employees",
        200,
        json!([
            {
                "id": 1, "f_name": "Amaya", "l_name": "Fernando", "address": "Kandy",
                "email": "amaya@shop.lk", "phoneNo": 711111111, "salary": 120000, "role": "ADMIN"
            },
            {
                "id": 2, "f_name": "Nimal", "l_name": "Perera",
                "email": "nimal@shop.lk", "phoneNo": 722222222, "salary": 60000, "role": "CASHIER"
            }
        ]),
    );

    let employees = stub.session_client(ADMIN).list::<Employees>().await.unwrap();

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].full_name(), "Amaya Fernando");
    assert_eq!(employees[1].role, Role::Cashier);
    assert_eq!(employees[1].address, "");
    assert_eq!(stub.only_request().logged_in_email.as_deref(), Some(ADMIN));
}

#[tokio::test]
async fn test_create_employee_includes_password() {
    let stub = StubApi::start().await;
    let payload = filled_form().to_payload(false).unwrap();

    stub.session_client(ADMIN).create::<Employees>(&payload).await.unwrap();

    let req = stub.only_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/admin/employees");
    assert_eq!(
        req.body,
        Some(json!({
            "f_name": "Sahan",
            "l_name": "Silva",
            "address": "12 Galle Road",
            "email": "sahan@shop.lk",
            "phoneNo": 771234567,
            "salary": 85000,
            "password": "changeme",
            "role": "STOREKEEPER"
        }))
    );
}

#[tokio::test]
async fn test_update_employee_omits_blank_password() {
    let stub = StubApi::start().await;
    let mut form = filled_form();
    form.password.clear();
    let payload = form.to_payload(true).unwrap();

    stub.session_client(ADMIN).update::<Employees>(7, &payload).await.unwrap();

    let req = stub.only_request();
    assert_eq!(req.method, "PUT");
    assert_eq!(req.path, "/api/admin/employees/7");
    let body = req.body.unwrap();
    assert!(body.get("password").is_none(), "{body}");
    assert_eq!(body["email"], "sahan@shop.lk");
}

#[tokio::test]
async fn test_delete_employee_hits_item_path() {
    let stub = StubApi::start().await;
    stub.respond("DELETE", "/api/admin/employees/3", 204, "");

    stub.session_client(ADMIN).delete::<Employees>(3).await.unwrap();

    let req = stub.only_request();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/api/admin/employees/3");
    assert_eq!(req.logged_in_email.as_deref(), Some(ADMIN));
}

#[tokio::test]
async fn test_create_employee_conflict_shows_server_message() {
    let stub = StubApi::start().await;
    stub.respond_json(
        "POST",
        "/api/admin/employees",
        409,
        json!({ "error": "Email already registered" }),
    );
    let payload = filled_form().to_payload(false).unwrap();

    let err = stub
        .session_client(ADMIN)
        .create::<Employees>(&payload)
        .await
        .unwrap_err();

    assert_eq!(err.status, Some(409));
    assert_eq!(err.message, "Email already registered");
}

#[tokio::test]
async fn test_list_employees_failure_uses_action_fallback() {
    let stub = StubApi::start().await;
    stub.respond("GET", "/api/admin/employees", 503, "");

    let err = stub.session_client(ADMIN).list::<Employees>().await.unwrap_err();

    assert_eq!(err.message, "Failed to fetch employees");
}

#[test]
fn test_invalid_employee_form_never_builds_payload() {
    let mut form = filled_form();
    form.salary = "lots".into();
    let err = form.to_payload(false).unwrap_err();
    assert!(err.is_validation());
    assert!(err.field_errors.contains_key("salary"));
}
