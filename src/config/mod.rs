//! Configuration and path management for registrar-cli

pub mod paths;
pub mod settings;

pub use paths::RegistrarPaths;
pub use settings::{AdminCredentials, Settings};
