pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{observer::ConsoleObserver, storage::LocalStore};
pub use config::SpinnerConfig;
pub use core::{engine::SpinEngine, spinner::Spinner, Roster};
pub use domain::model::{DietaryFilters, Item, Restaurant, SpinResult};
pub use utils::error::{Result, SpinnerError};
