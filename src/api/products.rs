//! Product warranty registration.

use axum::{extract::State, Json};
use sqlx::Connection;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::db::{MessageResponse, NewProduct};
use crate::AppState;

/// Stores a product registration verbatim. Dates and warranty periods stay
/// whatever text the client sent.
pub async fn add_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewProduct>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = state.db.connect().await?;
    sqlx::query(
        r#"
        INSERT INTO products
            (user_id, product_name, category, model_number, serial_number,
             purchase_date, warranty_period, email)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(req.user_id)
    .bind(&req.product_name)
    .bind(&req.category)
    .bind(&req.model_number)
    .bind(&req.serial_number)
    .bind(&req.purchase_date)
    .bind(&req.warranty_period)
    .bind(&req.email)
    .execute(&mut conn)
    .await?;
    conn.close().await?;

    tracing::info!(user_id = req.user_id, product = %req.product_name, "product registered");
    Ok(Json(MessageResponse::new("Product registered successfully!")))
}
