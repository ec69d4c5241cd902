//! Credential handling for registrar-cli

pub mod password;

pub use password::{hash_password, verify_password};
