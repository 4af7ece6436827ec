pub mod commands;

pub use crate::config::toml_config::TransportKind;
pub use commands::App;
