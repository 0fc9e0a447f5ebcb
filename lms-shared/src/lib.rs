pub mod auth;

pub use auth::{ROLES, Role, RoleError};
