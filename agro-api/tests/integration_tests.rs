//! Integration tests for the AgroOptima API
//!
//! Each test runs against a fresh in-memory database behind a real
//! router, driven through axum-test.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

use agro_api::auth::TokenIssuer;
use agro_api::{create_router, AppState};
use agro_db::{seed_demo_data, Database};

const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

fn create_test_state() -> AppState {
    let db = Arc::new(Database::open_in_memory().unwrap());
    AppState::new(db, TokenIssuer::new(TEST_SECRET, 3600))
}

fn create_test_server() -> TestServer {
    TestServer::new(create_router(create_test_state())).unwrap()
}

fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("authorization"),
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    )
}

async fn create_client(server: &TestServer, producer_id: &str) {
    let response = server
        .post("/api/clients")
        .json(&json!({
            "producerId": producer_id,
            "firstName": "Jan",
            "lastName": "Kowalski",
            "totalArea": 11.0,
            "status": "ACTIVE",
        }))
        .await;
    response.assert_status_ok();
}

async fn register_and_login(server: &TestServer, email: &str, role: &str) -> String {
    server
        .post("/api/auth/register")
        .json(&json!({
            "email": email,
            "password": "super-tajne-haslo",
            "fullName": "Testowy Użytkownik",
            "role": role,
        }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": email, "password": "super-tajne-haslo" }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    body["token"].as_str().unwrap().to_string()
}

// ============ Health ============

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], true);
}

// ============ Authentication ============

#[tokio::test]
async fn test_register_login_round_trip() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "email": "doradca@agrooptima.pl",
            "password": "super-tajne-haslo",
            "fullName": "Piotr Nowak",
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["role"], "ADVISOR");
    assert!(body["token"].as_str().is_some());

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "doradca@agrooptima.pl",
            "password": "super-tajne-haslo",
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["email"], "doradca@agrooptima.pl");
}

#[tokio::test]
async fn test_register_duplicate_email_is_conflict() {
    let server = create_test_server();
    register_and_login(&server, "a@agrooptima.pl", "ADVISOR").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "a@agrooptima.pl", "password": "inne-tajne-haslo" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let server = create_test_server();
    register_and_login(&server, "a@agrooptima.pl", "ADVISOR").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "a@agrooptima.pl", "password": "zle-haslo" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_rejects_bad_payloads() {
    let server = create_test_server();

    server
        .post("/api/auth/register")
        .json(&json!({ "email": "not-an-email", "password": "super-tajne-haslo" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/api/auth/register")
        .json(&json!({ "email": "a@agrooptima.pl", "password": "krotkie" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/api/auth/register")
        .json(&json!({
            "email": "a@agrooptima.pl",
            "password": "super-tajne-haslo",
            "role": "FARMER",
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

// ============ Clients ============

#[tokio::test]
async fn test_client_upsert_is_idempotent() {
    let server = create_test_server();
    create_client(&server, "065432109").await;
    create_client(&server, "065432109").await;

    let response = server.get("/api/clients").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let clients = body.as_array().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0]["producerId"], "065432109");
    assert_eq!(clients[0]["totalArea"], 11.0);
}

#[tokio::test]
async fn test_client_invalid_producer_id_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/api/clients")
        .json(&json!({
            "producerId": "12345",
            "firstName": "Jan",
            "lastName": "Kowalski",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Nothing was written.
    let body: serde_json::Value = server.get("/api/clients").await.json();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_client_update_overwrites_in_place() {
    let server = create_test_server();
    create_client(&server, "065432109").await;

    server
        .post("/api/clients")
        .json(&json!({
            "producerId": "065432109",
            "firstName": "Jan",
            "lastName": "Kowalski",
            "totalArea": 12.5,
            "status": "COMPLETED",
        }))
        .await
        .assert_status_ok();

    let body: serde_json::Value = server.get("/api/clients").await.json();
    let clients = body.as_array().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0]["status"], "COMPLETED");
    assert_eq!(clients[0]["totalArea"], 12.5);
}

// ============ Documents ============

#[tokio::test]
async fn test_document_add_and_remove() {
    let server = create_test_server();
    create_client(&server, "065432109").await;

    server
        .post("/api/clients/065432109/documents")
        .json(&json!({
            "id": "d1",
            "name": "Wniosek 2026.pdf",
            "type": "PDF",
            "category": "WNIOSEK",
            "campaignYear": "2026",
        }))
        .await
        .assert_status_ok();

    let body: serde_json::Value = server.get("/api/clients").await.json();
    assert_eq!(body[0]["documents"][0]["id"], "d1");
    assert_eq!(body[0]["documents"][0]["type"], "PDF");

    server
        .delete("/api/clients/065432109/documents/d1")
        .await
        .assert_status_ok();
    let body: serde_json::Value = server.get("/api/clients").await.json();
    assert!(body[0]["documents"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_document_add_for_unknown_client_is_not_found() {
    let server = create_test_server();

    let response = server
        .post("/api/clients/999999999/documents")
        .json(&json!({
            "id": "d1",
            "name": "x.pdf",
            "type": "PDF",
            "category": "INNE",
        }))
        .await;
    response.assert_status_not_found();
}

// ============ Parcels ============

#[tokio::test]
async fn test_parcel_scenario_round_trip() {
    let server = create_test_server();
    create_client(&server, "065432109").await;

    let parcels = json!([{
        "id": "f1",
        "name": "Działka za lasem",
        "area": 5.4,
        "eligibleArea": 5.4,
        "crop": "Pszenica",
        "history": [{
            "year": 2025,
            "crop": "Rzepak",
            "appliedEcoSchemes": ["E_IPR"],
            "soilPh": 5.5,
            "eligibleArea": 5.35,
        }],
    }]);

    let response = server
        .post("/api/clients/065432109/fields")
        .json(&parcels)
        .await;
    response.assert_status_ok();
    // The response echoes the submitted representation.
    let echoed: serde_json::Value = response.json();
    assert_eq!(echoed[0]["id"], "f1");

    let response = server.get("/api/clients/065432109/fields").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let stored = body.as_array().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["id"], "f1");

    let history = stored[0]["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    let entry = history[0].as_object().unwrap();
    assert_eq!(entry["year"], 2025);
    assert_eq!(entry["soilPh"], 5.5);
    assert_eq!(entry["eligibleArea"], 5.35);
    assert_eq!(entry["appliedEcoSchemes"], json!(["E_IPR"]));
    // Absent from the bag: the key must be missing, not null.
    assert!(!entry.contains_key("limingDate"));
}

#[tokio::test]
async fn test_parcel_update_unknown_producer_is_not_found() {
    let server = create_test_server();

    let response = server
        .post("/api/clients/999999999/fields")
        .json(&json!([{
            "id": "f1",
            "name": "Działka",
            "area": 1.0,
            "eligibleArea": 1.0,
            "crop": "Pszenica",
        }]))
        .await;
    response.assert_status_not_found();

    // And no rows were created for it.
    let body: serde_json::Value = server.get("/api/clients/999999999/fields").await.json();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_parcel_replace_discards_stale_rows() {
    let server = create_test_server();
    create_client(&server, "065432109").await;

    let first = json!([
        { "id": "f1", "name": "A", "area": 1.0, "eligibleArea": 1.0, "crop": "Pszenica" },
        { "id": "f2", "name": "B", "area": 2.0, "eligibleArea": 2.0, "crop": "Rzepak" },
    ]);
    server
        .post("/api/clients/065432109/fields")
        .json(&first)
        .await
        .assert_status_ok();

    let second = json!([
        { "id": "f3", "name": "C", "area": 3.0, "eligibleArea": 3.0, "crop": "Żyto" },
    ]);
    server
        .post("/api/clients/065432109/fields")
        .json(&second)
        .await
        .assert_status_ok();

    let body: serde_json::Value = server.get("/api/clients/065432109/fields").await.json();
    let stored = body.as_array().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["id"], "f3");
}

#[tokio::test]
async fn test_parcel_replace_is_atomic_on_mid_batch_failure() {
    let server = create_test_server();
    create_client(&server, "065432109").await;

    server
        .post("/api/clients/065432109/fields")
        .json(&json!([
            { "id": "f1", "name": "A", "area": 1.0, "eligibleArea": 1.0, "crop": "Pszenica" },
        ]))
        .await
        .assert_status_ok();

    // Duplicate parcel id within the batch: constraint violation on the
    // second insert, the whole submission rolls back.
    let response = server
        .post("/api/clients/065432109/fields")
        .json(&json!([
            { "id": "dup", "name": "X", "area": 1.0, "eligibleArea": 1.0, "crop": "Pszenica" },
            { "id": "dup", "name": "Y", "area": 2.0, "eligibleArea": 2.0, "crop": "Rzepak" },
        ]))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = server.get("/api/clients/065432109/fields").await.json();
    let stored = body.as_array().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["id"], "f1");
}

// ============ Cascade ============

#[tokio::test]
async fn test_delete_client_cascades_and_leaves_empty_lists() {
    let server = create_test_server();
    create_client(&server, "065432109").await;

    server
        .post("/api/clients/065432109/documents")
        .json(&json!({ "id": "d1", "name": "x.pdf", "type": "PDF", "category": "INNE" }))
        .await
        .assert_status_ok();
    server
        .post("/api/clients/065432109/fields")
        .json(&json!([{
            "id": "f1",
            "name": "A",
            "area": 1.0,
            "eligibleArea": 1.0,
            "crop": "Pszenica",
            "history": [{ "year": 2025, "crop": "Pszenica" }],
        }]))
        .await
        .assert_status_ok();

    server.delete("/api/clients/065432109").await.assert_status_ok();

    // Parent gone: child queries are legitimately empty, not 404.
    let fields: serde_json::Value = server.get("/api/clients/065432109/fields").await.json();
    assert!(fields.as_array().unwrap().is_empty());
    let payments: serde_json::Value =
        server.get("/api/clients/065432109/payments").await.json();
    assert!(payments.as_array().unwrap().is_empty());
    let clients: serde_json::Value = server.get("/api/clients").await.json();
    assert!(clients.as_array().unwrap().is_empty());

    // Deleting again is a no-op success.
    server.delete("/api/clients/065432109").await.assert_status_ok();
}

// ============ Dictionaries ============

#[tokio::test]
async fn test_rate_upsert_and_delete() {
    let server = create_test_server();

    let rate = json!({
        "id": "E25_13",
        "name": "Integrowana Produkcja Roślin (Rolnicze)",
        "rate": 505.18,
        "unit": "PLN/ha",
        "category": "EKOSCHEMAT",
        "year": 2025,
        "shortName": "E_IPR",
        "compatibleWith": ["E_OPN"],
    });
    server.post("/api/rates").json(&rate).await.assert_status_ok();
    server.post("/api/rates").json(&rate).await.assert_status_ok();

    let body: serde_json::Value = server.get("/api/rates").await.json();
    let rates = body.as_array().unwrap();
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0]["shortName"], "E_IPR");
    assert_eq!(rates[0]["compatibleWith"], json!(["E_OPN"]));

    server.delete("/api/rates/E25_13").await.assert_status_ok();
    server.delete("/api/rates/E25_13").await.assert_status_ok();
    let body: serde_json::Value = server.get("/api/rates").await.json();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_crop_upsert_and_delete() {
    let server = create_test_server();

    let crop = json!({
        "id": "c-bobowate",
        "name": "Rośliny Bobowate",
        "type": "BOBOWATE",
        "isLegume": true,
        "isCatchCrop": false,
    });
    server.post("/api/crops").json(&crop).await.assert_status_ok();
    server.post("/api/crops").json(&crop).await.assert_status_ok();

    let body: serde_json::Value = server.get("/api/crops").await.json();
    let crops = body.as_array().unwrap();
    assert_eq!(crops.len(), 1);
    assert_eq!(crops[0]["isLegume"], true);
    assert_eq!(crops[0]["type"], "BOBOWATE");

    server.delete("/api/crops/c-bobowate").await.assert_status_ok();
    let body: serde_json::Value = server.get("/api/crops").await.json();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_template_upsert_and_delete() {
    let server = create_test_server();

    let template = json!({
        "id": "tpl_simple",
        "name": "Prosty Import (Excel)",
        "type": "PARCELS",
        "year": 2026,
        "separator": ";",
        "mappings": { "name": "Nazwa", "area": "Powierzchnia" },
    });
    server
        .post("/api/templates")
        .json(&template)
        .await
        .assert_status_ok();
    server
        .post("/api/templates")
        .json(&template)
        .await
        .assert_status_ok();

    let body: serde_json::Value = server.get("/api/templates").await.json();
    let templates = body.as_array().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0]["mappings"]["area"], "Powierzchnia");

    server
        .delete("/api/templates/tpl_simple")
        .await
        .assert_status_ok();
    let body: serde_json::Value = server.get("/api/templates").await.json();
    assert!(body.as_array().unwrap().is_empty());
}

// ============ Admin ============

#[tokio::test]
async fn test_admin_routes_require_admin_token() {
    let server = create_test_server();

    server
        .get("/api/admin/tables")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let advisor_token = register_and_login(&server, "doradca@agrooptima.pl", "ADVISOR").await;
    let (name, value) = bearer(&advisor_token);
    server
        .get("/api/admin/tables")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let admin_token = register_and_login(&server, "admin@agrooptima.pl", "ADMIN").await;
    let (name, value) = bearer(&admin_token);
    let response = server.get("/api/admin/tables").add_header(name, value).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let tables = body["tables"].as_array().unwrap();
    assert!(tables.iter().any(|t| t == "farmers"));
    assert!(tables.iter().any(|t| t == "field_history"));
}

#[tokio::test]
async fn test_admin_reset_drops_and_reseeds() {
    let server = create_test_server();
    create_client(&server, "065432109").await;
    let admin_token = register_and_login(&server, "admin@agrooptima.pl", "ADMIN").await;

    let (name, value) = bearer(&admin_token);
    let response = server.post("/api/admin/reset").add_header(name, value).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "reset");
    assert_eq!(body["seeded"], true);

    // The manually created client is gone; demo clients are in place.
    let clients: serde_json::Value = server.get("/api/clients").await.json();
    let clients = clients.as_array().unwrap();
    assert!(!clients.is_empty());
    assert!(clients.iter().all(|c| c["producerId"] != "065432109"));
}

// ============ Seeded state ============

#[tokio::test]
async fn test_seeded_demo_data_is_readable() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    seed_demo_data(&db).unwrap();
    let state = AppState::new(db, TokenIssuer::new(TEST_SECRET, 3600));
    let server = TestServer::new(create_router(state)).unwrap();

    let clients: serde_json::Value = server.get("/api/clients").await.json();
    assert_eq!(clients.as_array().unwrap().len(), 2);

    let fields: serde_json::Value = server.get("/api/clients/582901443/fields").await.json();
    let fields = fields.as_array().unwrap();
    assert_eq!(fields.len(), 2);
    let history = fields[0]["history"].as_array().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0]["eligibleArea"], 5.35);

    let payments: serde_json::Value =
        server.get("/api/clients/582901443/payments").await.json();
    assert_eq!(payments.as_array().unwrap().len(), 1);

    // Seeded demo credentials can log in.
    server
        .post("/api/auth/login")
        .json(&json!({ "email": "doradca@agrooptima.pl", "password": "doradca123" }))
        .await
        .assert_status_ok();
}
