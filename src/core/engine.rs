use crate::core::geometry::Revolutions;
use crate::core::spinner::{SpinRequest, Spinner};
use crate::domain::model::{Item, SpinResult};
use crate::domain::ports::{ConfigProvider, SpinObserver};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::time::Duration;

pub const DEFAULT_SPIN_DURATION: Duration = Duration::from_millis(4000);

/// Returns the spinner to Idle if a started spin is dropped before it completes.
struct SpinGuard<'a> {
    spinner: &'a RefCell<Spinner>,
    armed: bool,
}

impl<'a> SpinGuard<'a> {
    fn new(spinner: &'a RefCell<Spinner>) -> Self {
        Self {
            spinner,
            armed: true,
        }
    }

    fn complete(mut self) -> Option<SpinResult> {
        self.armed = false;
        self.spinner.borrow_mut().finish()
    }
}

impl Drop for SpinGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Ok(mut spinner) = self.spinner.try_borrow_mut() {
            if let Some(result) = spinner.finish() {
                tracing::warn!(
                    "⚠️ Spin #{} was cancelled before completion, wheel is idle again",
                    result.trigger
                );
            }
        }
    }
}

/// Drives a `Spinner` through one timed spin on a single-threaded runtime.
///
/// The spinner lives in a `RefCell` that is never borrowed across an await,
/// so overlapping `spin` calls on the same engine hit the Idle/Spinning guard.
pub struct SpinEngine<O: SpinObserver> {
    spinner: RefCell<Spinner>,
    rng: RefCell<StdRng>,
    duration: Duration,
    observer: O,
}

impl<O: SpinObserver> SpinEngine<O> {
    pub fn new(observer: O) -> Self {
        Self {
            spinner: RefCell::new(Spinner::default()),
            rng: RefCell::new(StdRng::from_os_rng()),
            duration: DEFAULT_SPIN_DURATION,
            observer,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, observer: O) -> Self {
        let revolutions = Revolutions {
            min: config.min_revolutions(),
            extra: config.extra_revolutions(),
        };
        Self {
            spinner: RefCell::new(Spinner::new(revolutions)),
            rng: RefCell::new(StdRng::from_os_rng()),
            duration: config.spin_duration(),
            observer,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.rng.replace(StdRng::seed_from_u64(seed));
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn rotation(&self) -> f64 {
        self.spinner.borrow().rotation()
    }

    pub fn is_spinning(&self) -> bool {
        self.spinner.borrow().is_spinning()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Starts a spin, waits out the animation and reports the winner.
    ///
    /// Returns the request outcome; an ignored request returns immediately
    /// without touching the observer.
    pub async fn spin(&self, items: &[Item]) -> Result<SpinRequest> {
        let request = {
            let mut rng = self.rng.borrow_mut();
            self.spinner.borrow_mut().request_spin(items, &mut *rng)?
        };

        let started = match &request {
            SpinRequest::Started(result) => result.clone(),
            SpinRequest::Ignored(reason) => {
                tracing::debug!(?reason, "spin request ignored");
                return Ok(request);
            }
        };

        tracing::info!(
            "🎰 Spin #{} started with {} restaurants",
            started.trigger,
            items.len()
        );
        tracing::debug!(
            winner = %started.winner.name,
            rotation = started.final_rotation,
            "winner decided at spin start"
        );
        let guard = SpinGuard::new(&self.spinner);
        self.observer.on_spin_started(&started).await;

        tokio::time::sleep(self.duration).await;

        // 動畫結束，回報開始時就決定好的結果
        let finished = guard.complete().unwrap_or(started);
        tracing::info!("🎉 Spin #{} landed on {}", finished.trigger, finished.winner.name);
        self.observer.on_spin_finished(&finished).await?;

        Ok(SpinRequest::Started(finished))
    }
}
