use std::sync::Arc;

use alert_service::{
    api::{AppState, build_router},
    config::Config,
};
use serde_json::json;
use tokio::net::TcpListener;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, path_regex},
};

pub struct TestApp {
    pub address: String,
    pub identity_server: MockServer,
    pub whatsapp_server: MockServer,
    pub email_server: MockServer,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Boots the service on an ephemeral port with every provider pointed at a
/// local mock server. `mutate` tweaks the config before the app starts.
pub async fn spawn_app_with(mutate: impl FnOnce(&mut Config)) -> TestApp {
    let identity_server = MockServer::start().await;
    let whatsapp_server = MockServer::start().await;
    let email_server = MockServer::start().await;

    let mut config = Config {
        identity_service_url: identity_server.uri(),
        twilio_account_sid: Some("ACtest0000000000".to_string()),
        twilio_auth_token: Some("test_auth_token".to_string()),
        twilio_whatsapp_from: Some("+15550006789".to_string()),
        resend_api_key: Some("re_test_key".to_string()),
        whatsapp_api_base: whatsapp_server.uri(),
        email_api_base: email_server.uri(),
        email_from: "StockRoom <alerts@stockroomhq.com>".to_string(),
        survey_operator_email: "ops@stockroomhq.com".to_string(),
        server_port: 0,
    };
    mutate(&mut config);

    let state = Arc::new(AppState::from_config(config).expect("state construction"));
    let app = build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        identity_server,
        whatsapp_server,
        email_server,
    }
}

pub async fn mock_identity_ok(app: &TestApp) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-123",
            "email": "owner@example.com"
        })))
        .mount(&app.identity_server)
        .await;
}

pub async fn mock_identity_unauthorized(app: &TestApp) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_token"
        })))
        .mount(&app.identity_server)
        .await;
}

/// Mounts a succeeding WhatsApp provider double expecting exactly `count`
/// calls over the test.
pub async fn mock_whatsapp_ok(app: &TestApp, count: u64) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/2010-04-01/Accounts/.+/Messages\.json$"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sid": "SM0000test",
            "status": "queued"
        })))
        .expect(count)
        .mount(&app.whatsapp_server)
        .await;
}

pub fn valid_low_stock_body() -> serde_json::Value {
    json!({
        "to": "+2348012345678",
        "alertType": "low_stock",
        "items": [
            { "name": "Cement", "quantity": 5, "reorderLevel": 10 }
        ]
    })
}

pub fn sample_survey_data() -> serde_json::Value {
    json!({
        "fullName": "Adaeze Obi",
        "email": "adaeze@example.com",
        "phone": "+2348012345678",
        "businessType": "Pharmacy",
        "employeeCount": "6-20",
        "location": "Enugu",
        "currentMethod": "Paper ledger",
        "challenges": ["Stockouts", "Expiry losses"],
        "desiredFeatures": ["Expiry alerts"],
        "budgetRange": "5000-15000",
        "launchInterest": "Very interested",
        "comments": "Please support offline mode"
    })
}
