use crate::core::geometry::{compute_rotation, Revolutions};
use crate::core::selector::select;
use crate::domain::model::{Item, SpinResult};
use crate::utils::error::Result;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub enum SpinState {
    Idle,
    Spinning(SpinResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    AlreadySpinning,
    EmptyCollection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinRequest {
    Started(SpinResult),
    Ignored(IgnoredReason),
}

/// Caller-owned wheel state: the accumulated rotation, the trigger counter
/// and the Idle/Spinning guard.
#[derive(Debug, Clone)]
pub struct Spinner {
    rotation: f64,
    trigger: u64,
    state: SpinState,
    revolutions: Revolutions,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new(Revolutions::default())
    }
}

impl Spinner {
    pub fn new(revolutions: Revolutions) -> Self {
        Self {
            rotation: 0.0,
            trigger: 0,
            state: SpinState::Idle,
            revolutions,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn trigger(&self) -> u64 {
        self.trigger
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning(_))
    }

    /// Idle -> Spinning. The winner is decided here, not when the animation ends.
    pub fn request_spin<R: Rng + ?Sized>(&mut self, items: &[Item], rng: &mut R) -> Result<SpinRequest> {
        if let SpinState::Spinning(_) = self.state {
            tracing::debug!("spin requested while spinning, ignoring");
            return Ok(SpinRequest::Ignored(IgnoredReason::AlreadySpinning));
        }
        if items.is_empty() {
            tracing::debug!("spin requested with no items, ignoring");
            return Ok(SpinRequest::Ignored(IgnoredReason::EmptyCollection));
        }

        let winner_index = select(items, rng)?;
        let final_rotation =
            compute_rotation(self.rotation, winner_index, items.len(), &self.revolutions, rng)?;

        self.trigger += 1;
        self.rotation = final_rotation;

        let result = SpinResult {
            winner: items[winner_index].clone(),
            winner_index,
            final_rotation,
            trigger: self.trigger,
        };
        self.state = SpinState::Spinning(result.clone());

        Ok(SpinRequest::Started(result))
    }

    /// Spinning -> Idle. Returns the in-flight result, `None` when already idle.
    pub fn finish(&mut self) -> Option<SpinResult> {
        match std::mem::replace(&mut self.state, SpinState::Idle) {
            SpinState::Spinning(result) => Some(result),
            SpinState::Idle => None,
        }
    }
}
