pub mod engine;
pub mod geometry;
pub mod layout;
pub mod roster;
pub mod selector;
pub mod spinner;

pub use crate::domain::model::{DietaryFilters, Item, Restaurant, SpinResult};
pub use crate::domain::ports::{ConfigProvider, RestaurantStore, SpinObserver};
pub use crate::utils::error::Result;
pub use roster::Roster;
