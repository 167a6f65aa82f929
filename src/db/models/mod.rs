//! Row and request/response types split by domain.

pub mod common;
pub mod product;
pub mod reminder;
pub mod user;

pub use common::*;
pub use product::*;
pub use reminder::*;
pub use user::*;
