//! API request and response models

pub mod user;

pub use user::{CreateUserRequest, User, UserListResponse};
