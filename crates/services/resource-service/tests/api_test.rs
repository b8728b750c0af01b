//! Integration tests for the HTTP API.
//!
//! The real services and router run over in-memory repositories, so no
//! PostgreSQL instance is needed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{AppError, AppResult, JwtConfig};
use domain::{Address, AddressChanges, IngredientType, NewAddress};
use resource_service_lib::infra::Database;
use resource_service_lib::repository::{AddressRepository, IngredientTypeRepository, UserRepository};
use resource_service_lib::routes::create_router;
use resource_service_lib::service::{
    AddressManager, Claims, IngredientTypeManager, JwtAuthenticator, LoginManager,
};
use resource_service_lib::state::AppState;

const SECRET: &str = "test-secret-key-for-testing-only-32chars";

// =============================================================================
// In-memory repositories
// =============================================================================

#[derive(Default)]
struct MemoryAddresses {
    rows: Mutex<Vec<Address>>,
}

fn address(id: i32, person_id: i32, street: &str) -> Address {
    let now = Utc::now();
    Address {
        id,
        person_id,
        street: street.to_string(),
        number: "10".to_string(),
        complement: None,
        district: "Centro".to_string(),
        city: "Curitiba".to_string(),
        state: "PR".to_string(),
        country: "Brasil".to_string(),
        zip_code: "80000-000".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl AddressRepository for MemoryAddresses {
    async fn find_all(&self) -> AppResult<Vec<Address>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Address>> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_id_and_person(&self, id: i32, person_id: i32) -> AppResult<Option<Address>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id && a.person_id == person_id)
            .cloned())
    }

    async fn find_by_person(&self, person_id: i32) -> AppResult<Vec<Address>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.person_id == person_id)
            .cloned()
            .collect())
    }

    async fn create(&self, person_id: i32, data: NewAddress) -> AppResult<Address> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let mut row = address(id, person_id, &data.street);
        row.number = data.number;
        row.complement = data.complement;
        row.district = data.district;
        row.city = data.city;
        row.state = data.state;
        row.country = data.country;
        row.zip_code = data.zip_code;
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, changes: AddressChanges) -> AppResult<Address> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::not_found("missing"))?;
        if let Some(street) = changes.street {
            row.street = street;
        }
        if let Some(city) = changes.city {
            row.city = city;
        }
        if let Some(complement) = changes.complement {
            row.complement = complement;
        }
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<Address> {
        let mut rows = self.rows.lock().unwrap();
        let pos = rows
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| AppError::not_found("missing"))?;
        Ok(rows.remove(pos))
    }
}

#[derive(Default)]
struct MemoryIngredientTypes {
    rows: Mutex<Vec<IngredientType>>,
}

#[async_trait]
impl IngredientTypeRepository for MemoryIngredientTypes {
    async fn find_all(&self) -> AppResult<Vec<IngredientType>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<IngredientType>> {
        Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, name: String, repeatable: i32) -> AppResult<IngredientType> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let row = IngredientType {
            id: rows.len() as i32 + 1,
            name,
            repeatable,
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        name: Option<String>,
        repeatable: Option<i32>,
    ) -> AppResult<IngredientType> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::not_found("missing"))?;
        if let Some(name) = name {
            row.name = name;
        }
        if let Some(repeatable) = repeatable {
            row.repeatable = repeatable;
        }
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<IngredientType> {
        let mut rows = self.rows.lock().unwrap();
        let pos = rows
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::not_found("missing"))?;
        Ok(rows.remove(pos))
    }
}

/// user id -> person id
struct MemoryUsers(HashMap<i32, Option<i32>>);

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_person_id(&self, user_id: i32) -> AppResult<Option<i32>> {
        Ok(self.0.get(&user_id).copied().flatten())
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Users 1 and 2 own persons 10 and 20; user 3 has no person.
fn app_with(addresses: Vec<Address>, connection: DatabaseConnection) -> Router {
    let users = MemoryUsers(HashMap::from([(1, Some(10)), (2, Some(20)), (3, None)]));
    let login = Arc::new(LoginManager::new(Arc::new(users)));

    let address_repo = MemoryAddresses {
        rows: Mutex::new(addresses),
    };
    let address_service = Arc::new(AddressManager::new(Arc::new(address_repo), login));
    let ingredient_type_service = Arc::new(IngredientTypeManager::new(Arc::new(
        MemoryIngredientTypes::default(),
    )));
    let auth_service = Arc::new(JwtAuthenticator::new(&JwtConfig {
        secret: SECRET.to_string(),
    }));

    let state = AppState::new(
        address_service,
        ingredient_type_service,
        auth_service,
        Arc::new(Database::from_connection(connection)),
    );
    create_router(state)
}

/// Router over a mock database with no queued results, so every ping fails.
fn app(addresses: Vec<Address>) -> Router {
    app_with(
        addresses,
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
    )
}

fn token_for(user_id: i32) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        iat: now.timestamp(),
        exp: (now + Duration::hours(1)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

fn request(method: Method, uri: &str, user_id: Option<i32>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token_for(user_id)));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn create_address_body() -> Value {
    json!({
        "street": "Rua XV de Novembro",
        "number": "700",
        "district": "Centro",
        "city": "Curitiba",
        "state": "PR",
        "country": "Brasil",
        "zip_code": "80020-310"
    })
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn resource_routes_require_a_token() {
    let (status, body) = send(app(vec![]), request(Method::GET, "/addresses", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, _) = send(
        app(vec![]),
        request(Method::GET, "/ingredient-types", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bad_token_is_rejected() {
    let req = Request::builder()
        .uri("/addresses")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(app(vec![]), req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Addresses
// =============================================================================

#[tokio::test]
async fn list_my_addresses_only_returns_own_rows() {
    let app = app(vec![address(1, 10, "Mine"), address(2, 20, "Theirs")]);

    let (status, body) = send(app, request(Method::GET, "/addresses/me", Some(1), None)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["street"], "Mine");
}

#[tokio::test]
async fn get_my_address_of_someone_else_is_forbidden() {
    let app = app(vec![address(5, 20, "Theirs")]);

    let (status, body) = send(app, request(Method::GET, "/addresses/me/5", Some(1), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["message"], "Operação inválida.");
}

#[tokio::test]
async fn get_address_with_non_numeric_id_is_bad_request() {
    let (status, body) = send(
        app(vec![]),
        request(Method::GET, "/addresses/abc", Some(1), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["message"], "Número inválido.");
}

#[tokio::test]
async fn get_missing_address_is_not_found() {
    let (status, body) = send(
        app(vec![]),
        request(Method::GET, "/addresses/9", Some(1), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Não existe o endereço solicitado.");
}

#[tokio::test]
async fn create_address_attaches_callers_person() {
    let (status, body) = send(
        app(vec![]),
        request(Method::POST, "/addresses", Some(2), Some(create_address_body())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["person_id"], 20);
    assert_eq!(body["street"], "Rua XV de Novembro");
}

#[tokio::test]
async fn create_address_without_person_is_not_found() {
    let (status, body) = send(
        app(vec![]),
        request(Method::POST, "/addresses", Some(3), Some(create_address_body())),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User not found.");
}

#[tokio::test]
async fn create_address_with_empty_street_fails_validation() {
    let mut payload = create_address_body();
    payload["street"] = json!("");

    let (status, body) = send(
        app(vec![]),
        request(Method::POST, "/addresses", Some(1), Some(payload)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_own_address_applies_changes() {
    let app = app(vec![address(4, 10, "Old")]);

    let (status, body) = send(
        app,
        request(
            Method::PATCH,
            "/addresses/4",
            Some(1),
            Some(json!({ "street": "New" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["street"], "New");
    assert_eq!(body["city"], "Curitiba");
}

#[tokio::test]
async fn patch_with_null_complement_clears_it() {
    let mut stored = address(4, 10, "Mine");
    stored.complement = Some("Fundos".to_string());
    let app = app(vec![stored]);

    let (status, body) = send(
        app.clone(),
        request(
            Method::PATCH,
            "/addresses/4",
            Some(1),
            Some(json!({ "street": "Nova" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["complement"], "Fundos");

    let (status, body) = send(
        app,
        request(
            Method::PATCH,
            "/addresses/4",
            Some(1),
            Some(json!({ "complement": null })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("complement").is_none());
}

#[tokio::test]
async fn delete_someone_elses_address_is_forbidden() {
    let app = app(vec![address(4, 20, "Theirs")]);

    let (status, _) = send(app, request(Method::DELETE, "/addresses/4", Some(1), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn delete_own_address_returns_removed_row() {
    let app = app(vec![address(4, 10, "Mine")]);

    let (status, body) = send(app, request(Method::DELETE, "/addresses/4", Some(1), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 4);
}

// =============================================================================
// Ingredient types
// =============================================================================

#[tokio::test]
async fn create_ingredient_type_coerces_numeric_text() {
    let (status, body) = send(
        app(vec![]),
        request(
            Method::POST,
            "/ingredient-types",
            Some(1),
            Some(json!({ "name": "Tempero", "repeatable": "3" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["repeatable"], 3);
    assert_eq!(body["name"], "Tempero");
}

#[tokio::test]
async fn create_ingredient_type_with_bad_repeatable_is_bad_request() {
    let (status, body) = send(
        app(vec![]),
        request(
            Method::POST,
            "/ingredient-types",
            Some(1),
            Some(json!({ "name": "Tempero", "repeatable": "muitos" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Repeatable Inválido");
}

#[tokio::test]
async fn ingredient_type_with_non_numeric_id_is_not_found() {
    let (status, body) = send(
        app(vec![]),
        request(Method::GET, "/ingredient-types/abc", Some(1), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Ingredient Type Não Encontrado");
}

#[tokio::test]
async fn create_ingredient_type_with_boolean_repeatable_names_the_field() {
    let (status, body) = send(
        app(vec![]),
        request(
            Method::POST,
            "/ingredient-types",
            Some(1),
            Some(json!({ "name": "Tempero", "repeatable": true })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["message"], "Repeatable Inválido");
}

#[tokio::test]
async fn patch_with_null_repeatable_is_rejected() {
    let app = app(vec![]);
    let (status, _) = send(
        app.clone(),
        request(
            Method::POST,
            "/ingredient-types",
            Some(1),
            Some(json!({ "name": "Fruta", "repeatable": 1 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app.clone(),
        request(
            Method::PATCH,
            "/ingredient-types/1",
            Some(1),
            Some(json!({ "repeatable": null })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Repeatable Inválido");

    let (status, body) = send(
        app,
        request(
            Method::PATCH,
            "/ingredient-types/1",
            Some(1),
            Some(json!({ "name": "Fruta seca" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Fruta seca");
    assert_eq!(body["repeatable"], 1);
}

#[tokio::test]
async fn missing_ingredient_type_cannot_be_removed() {
    let (status, _) = send(
        app(vec![]),
        request(Method::DELETE, "/ingredient-types/42", Some(1), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_is_public_and_reports_database() {
    let connection = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let (status, body) = send(
        app_with(vec![], connection),
        request(Method::GET, "/health", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn health_is_degraded_without_database() {
    let (status, body) = send(app(vec![]), request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"]["status"], "unhealthy");
}
