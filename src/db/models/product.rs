//! Product-warranty registration request shape.

use serde::{Deserialize, Serialize};

/// Payload for registering a purchased product for warranty tracking.
///
/// `user_id` is stored as given; it is not checked against the `users`
/// table, so orphaned registrations are possible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub user_id: i64,
    pub product_name: String,
    pub category: String,
    pub model_number: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub warranty_period: String,
    pub email: String,
}
