use axum::{extract::State, Json};
use sqlx::Connection;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::db::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, User};
use crate::AppState;

/// Creates a user with the credentials exactly as sent. Nothing stops the
/// same email from registering twice unless the schema says otherwise.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = state.db.connect().await?;
    sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.password)
        .execute(&mut conn)
        .await?;
    conn.close().await?;

    tracing::info!(email = %req.email, "user registered");
    Ok(Json(MessageResponse::new("User registered successfully!")))
}

/// Matches email and password against the stored values. When several rows
/// share the email, whichever the store returns first wins.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // Match both columns in one query; zero rows means bad credentials.
    let mut conn = state.db.connect().await?;
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ? AND password = ?")
        .bind(&req.email)
        .bind(&req.password)
        .fetch_optional(&mut conn)
        .await?;
    conn.close().await?;

    let user = user.ok_or(ApiError::InvalidCredentials)?;
    tracing::info!(user_id = user.id, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: state.config.auth.token.clone(),
        user: user.into(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::api::testing::{
        body_json, post_json, setup_state, setup_state_with_schema, test_app,
    };

    #[tokio::test]
    async fn register_then_login_roundtrip() {
        let (_dir, state) = setup_state().await;
        let app = test_app(state);

        let response = post_json(
            app.clone(),
            "/register",
            json!({"name": "Ann", "email": "ann@x.com", "password": "pw1"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "User registered successfully!");

        let response = post_json(
            app,
            "/login",
            json!({"email": "ann@x.com", "password": "pw1"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["token"], "dummy-token");
        assert_eq!(body["user"]["id"], 1);
        assert_eq!(body["user"]["name"], "Ann");
        assert_eq!(body["user"]["email"], "ann@x.com");
        assert_eq!(body["user"]["phone"], "");
        assert_eq!(body["user"]["address"], "");
        // created_at defaults to the insertion time and renders the way the
        // store wrote it.
        let join_date = body["user"]["joinDate"].as_str().unwrap();
        assert!(
            chrono::NaiveDateTime::parse_from_str(join_date, "%Y-%m-%d %H:%M:%S").is_ok(),
            "got: {join_date}"
        );
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_rejected() {
        let (_dir, state) = setup_state().await;
        let app = test_app(state);

        post_json(
            app.clone(),
            "/register",
            json!({"name": "Ann", "email": "ann@x.com", "password": "pw1"}),
        )
        .await;

        let response = post_json(
            app,
            "/login",
            json!({"email": "ann@x.com", "password": "wrong"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid email or password");
        assert!(body.get("user").is_none());
        assert!(body.get("token").is_none());
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_rejected() {
        let (_dir, state) = setup_state().await;
        let app = test_app(state);

        let response = post_json(
            app,
            "/login",
            json!({"email": "nobody@x.com", "password": "pw1"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid email or password");
    }

    #[tokio::test]
    async fn login_renders_missing_columns_as_empty_strings() {
        let (_dir, state) = setup_state().await;

        let mut conn = state.db.connect().await.unwrap();
        sqlx::query(
            "INSERT INTO users (name, email, password, created_at) VALUES (?, ?, ?, NULL)",
        )
        .bind("Bo")
        .bind("bo@x.com")
        .bind("pw")
        .execute(&mut conn)
        .await
        .unwrap();

        let response = post_json(
            test_app(state),
            "/login",
            json!({"email": "bo@x.com", "password": "pw"}),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["user"]["phone"], "");
        assert_eq!(body["user"]["address"], "");
        assert_eq!(body["user"]["joinDate"], "");
    }

    #[tokio::test]
    async fn duplicate_registration_inserts_a_second_row() {
        let (_dir, state) = setup_state().await;
        let app = test_app(state.clone());
        let payload = json!({"name": "Ann", "email": "ann@x.com", "password": "pw1"});

        for _ in 0..2 {
            let response = post_json(app.clone(), "/register", payload.clone()).await;
            let body = body_json(response).await;
            assert_eq!(body["message"], "User registered successfully!");
        }

        let mut conn = state.db.connect().await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind("ann@x.com")
            .fetch_one(&mut conn)
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn unique_email_schema_reports_the_constraint() {
        let (_dir, state) = setup_state_with_schema(
            "CREATE TABLE users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                phone TEXT,
                address TEXT,
                created_at TEXT DEFAULT (datetime('now'))
            );",
        )
        .await;
        let app = test_app(state);
        let payload = json!({"name": "Ann", "email": "ann@x.com", "password": "pw1"});

        post_json(app.clone(), "/register", payload.clone()).await;
        let response = post_json(app, "/register", payload).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("UNIQUE constraint failed"), "got: {error}");
    }

    #[tokio::test]
    async fn register_without_a_required_field_is_unprocessable() {
        let (_dir, state) = setup_state().await;
        let response = post_json(
            test_app(state),
            "/register",
            json!({"name": "Ann", "email": "ann@x.com"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn missing_schema_collapses_to_error_text() {
        let (_dir, state) = setup_state_with_schema("").await;
        let response = post_json(
            test_app(state),
            "/register",
            json!({"name": "Ann", "email": "ann@x.com", "password": "pw1"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("no such table"), "got: {error}");
    }

    #[tokio::test]
    async fn login_store_failure_reports_the_store_message() {
        let (_dir, state) = setup_state_with_schema("").await;
        let response = post_json(
            test_app(state),
            "/login",
            json!({"email": "ann@x.com", "password": "pw1"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        // A broken store is a system failure, not a credentials failure.
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("no such table"), "got: {error}");
        assert_ne!(error, "Invalid email or password");
    }
}
