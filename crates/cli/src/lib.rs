//! `dealership-cli`
//!
//! **Responsibility:** interactive menu shell around the inventory.
//!
//! The shell only validates user input, calls into the registry and the
//! store, and formats the outcomes they return. It owns no business rules.

pub mod config;
pub mod input;
pub mod menu;
pub mod render;
pub mod shell;

pub use config::CliConfig;
pub use menu::MenuOption;
pub use shell::{Shell, ShellOptions};
