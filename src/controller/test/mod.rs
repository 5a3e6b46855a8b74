//! HTTP-level tests driving the real router.

use axum::{
    body::Body,
    extract::Path,
    http::{header, Method, Request, StatusCode},
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};

use crate::{
    error::AppError, middleware::session::AuthSession, resource::Resource, router::router,
    state::AppState,
};

mod resource;

/// Router with every table created and a `/test/login/{userId}` route standing in for the
/// login flow.
struct TestApp {
    db: DatabaseConnection,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_builder(TestBuilder::new().with_all_tables()).await
    }

    async fn with_builder(builder: TestBuilder) -> Self {
        let test = builder.build().await.unwrap();
        let db = test.db.as_ref().unwrap().clone();

        let router = router()
            .route("/test/login/{user_id}", get(login))
            .with_state(AppState::new(db.clone()))
            .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false));

        Self { db, router }
    }

    /// Logs `user_id` in and returns the session cookie.
    async fn login(&self, user_id: i32) -> String {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/test/login/{}", user_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("login sets a session cookie")
            .to_str()
            .unwrap();

        set_cookie.split(';').next().unwrap().to_string()
    }

    async fn request(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, cookie, None).await
    }

    async fn post(&self, uri: &str, cookie: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, cookie, Some(body)).await
    }

    async fn put(&self, uri: &str, cookie: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, cookie, Some(body)).await
    }

    async fn delete(&self, uri: &str, cookie: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, cookie, None).await
    }

    /// Creates an admin and returns their session cookie.
    async fn admin_cookie(&self) -> String {
        let admin = factory::user::create_admin(&self.db).await.unwrap();
        self.login(admin.id).await
    }
}

async fn login(session: Session, Path(user_id): Path<i32>) -> Result<StatusCode, AppError> {
    AuthSession::new(&session).set_user_id(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Asserts the uniform error body.
fn assert_error_body(body: &Value, status: StatusCode) {
    assert!(body["error"].is_string());
    assert_eq!(body["statusCode"], status.as_u16());
    assert!(body["timestamp"].is_string());
}

/// Asserts that `body` carries exactly the relation keys of `R` for the given projection.
fn assert_relation_keys<R: Resource>(body: &Value, full: bool) {
    for relation in R::FULL_RELATIONS {
        assert_eq!(
            body.get(*relation).is_some(),
            full,
            "relation '{}' of {}",
            relation,
            R::NAME
        );
    }
}
