//! End-to-end tests driving the full router through `tower::ServiceExt::oneshot`.


use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use serde_json::{json, Value};
use test_utils::context::TestContext;
use tower::ServiceExt;

use crate::server::{router::router, startup::session_layer, state::AppState};

/// Password used for every account registered through [`TestApp::register_and_login`].
const PASSWORD: &str = "correct horse";

/// Router wired to a migrated in-memory database with a session layer.
struct TestApp {
    /// Keeps the in-memory database alive for the duration of the test.
    _context: TestContext,
    app: Router,
}

impl TestApp {
    async fn new() -> Self {
        let mut context = TestContext::new();
        let db = context.database().await.unwrap().clone();

        Migrator::up(&db, None).await.unwrap();

        let session_store = context.session_store().await.unwrap();
        let app = router()
            .with_state(AppState::new(db))
            .layer(session_layer(session_store));

        Self {
            _context: context,
            app,
        }
    }

    async fn request(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Registers `username` and logs in, returning the session cookie.
    async fn register_and_login(&self, username: &str) -> String {
        let credentials = json!({ "username": username, "password": PASSWORD });

        let response = self
            .request(
                Method::POST,
                "/api/auth/register",
                None,
                Some(credentials.clone()),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = self
            .request(Method::POST, "/api/auth/login", None, Some(credentials))
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        session_cookie(&response)
    }

    /// Posts a message and returns its ID.
    async fn post_message(&self, cookie: &str, text: &str) -> i64 {
        let response = self
            .request(
                Method::POST,
                "/api/messages",
                Some(cookie),
                Some(json!({ "message": text })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        body_json(response).await["id"].as_i64().unwrap()
    }
}

/// Extracts the `name=value` pair of the session cookie from a response.
fn session_cookie(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set a session cookie")
        .to_str()
        .unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&bytes).unwrap()
}
