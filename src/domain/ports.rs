use crate::domain::model::{Restaurant, SpinResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

pub trait RestaurantStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> impl std::future::Future<Output = Result<Option<Vec<Restaurant>>>> + Send;
    fn save(
        &self,
        restaurants: &[Restaurant],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_path(&self) -> PathBuf;
    fn spin_duration(&self) -> Duration;
    fn min_revolutions(&self) -> u32;
    fn extra_revolutions(&self) -> u32;
}

#[async_trait]
pub trait SpinObserver: Send + Sync {
    async fn on_spin_started(&self, _spin: &SpinResult) {}
    async fn on_spin_finished(&self, spin: &SpinResult) -> Result<()>;
}
