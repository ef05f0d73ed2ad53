use crate::core::{RestaurantStore, Roster};
use crate::domain::model::Restaurant;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Restaurant list saved as pretty JSON in a local file.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RestaurantStore for LocalStore {
    async fn load(&self) -> Result<Option<Vec<Restaurant>>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let restaurants = serde_json::from_slice(&data)?;
        Ok(Some(restaurants))
    }

    async fn save(&self, restaurants: &[Restaurant]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(restaurants)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Loads the saved roster, falling back to the defaults when nothing usable
/// is on disk.
pub async fn load_roster<S: RestaurantStore>(store: &S) -> Roster {
    match store.load().await {
        Ok(Some(restaurants)) => match Roster::new(restaurants) {
            Ok(roster) => roster,
            Err(e) => {
                tracing::warn!("⚠️ Saved restaurants are invalid ({}), using defaults", e);
                Roster::with_defaults()
            }
        },
        Ok(None) => {
            tracing::debug!("no saved restaurants, using defaults");
            Roster::with_defaults()
        }
        Err(e) => {
            tracing::warn!("⚠️ Could not load saved restaurants ({}), using defaults", e);
            Roster::with_defaults()
        }
    }
}

/// Best-effort save: failures are logged and reported as `false`.
pub async fn save_roster<S: RestaurantStore>(store: &S, roster: &Roster) -> bool {
    match store.save(roster.restaurants()).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("⚠️ Could not save restaurants: {}", e);
            tracing::warn!("💡 Suggestion: {}", e.recovery_suggestion());
            false
        }
    }
}
