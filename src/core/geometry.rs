//! Maps a winning segment to the rotation that brings it under the pointer.
//!
//! Angles are in degrees, in the wheel's own frame: segment `i` spans
//! `[i * segment, (i + 1) * segment)` and the pointer sits at 270°.

use crate::utils::error::{Result, SpinnerError};
use rand::Rng;

pub const FULL_TURN: f64 = 360.0;
pub const POINTER_ANGLE: f64 = 270.0;

pub const DEFAULT_MIN_REVOLUTIONS: u32 = 5;
pub const DEFAULT_EXTRA_REVOLUTIONS: u32 = 2;

/// How many whole turns a spin makes before landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revolutions {
    pub min: u32,
    /// Upper bound (inclusive) of the random extra turns added to `min`.
    pub extra: u32,
}

impl Default for Revolutions {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_REVOLUTIONS,
            extra: DEFAULT_EXTRA_REVOLUTIONS,
        }
    }
}

impl Revolutions {
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.min.saturating_add(rng.random_range(0..=self.extra))
    }
}

fn check_bounds(winner_index: usize, item_count: usize) -> Result<()> {
    if item_count == 0 || winner_index >= item_count {
        return Err(SpinnerError::InvalidGeometry {
            winner_index,
            item_count,
        });
    }
    Ok(())
}

pub fn segment_angle(item_count: usize) -> Result<f64> {
    if item_count == 0 {
        return Err(SpinnerError::InvalidGeometry {
            winner_index: 0,
            item_count,
        });
    }
    Ok(FULL_TURN / item_count as f64)
}

pub fn segment_center(winner_index: usize, item_count: usize) -> Result<f64> {
    check_bounds(winner_index, item_count)?;
    let segment = segment_angle(item_count)?;
    Ok(segment * winner_index as f64 + segment / 2.0)
}

/// Rotation to add for one spin: whole turns plus the offset that parks the
/// winner's center under the pointer.
pub fn target_delta(winner_index: usize, item_count: usize, full_revolutions: u32) -> Result<f64> {
    let center = segment_center(winner_index, item_count)?;
    Ok(f64::from(full_revolutions) * FULL_TURN + (POINTER_ANGLE - center))
}

/// Accumulates the next resting rotation. Never normalized into `[0, 360)`
/// so the wheel always turns forward from where it stopped.
pub fn compute_rotation<R: Rng + ?Sized>(
    previous_rotation: f64,
    winner_index: usize,
    item_count: usize,
    revolutions: &Revolutions,
    rng: &mut R,
) -> Result<f64> {
    check_bounds(winner_index, item_count)?;
    let turns = revolutions.draw(rng);
    let next = rotation_with_revolutions(previous_rotation, winner_index, item_count, turns)?;
    tracing::debug!(
        previous_rotation,
        next_rotation = next,
        turns,
        winner_index,
        item_count,
        "wheel rotation computed"
    );
    Ok(next)
}

pub fn rotation_with_revolutions(
    previous_rotation: f64,
    winner_index: usize,
    item_count: usize,
    full_revolutions: u32,
) -> Result<f64> {
    Ok(previous_rotation + target_delta(winner_index, item_count, full_revolutions)?)
}

/// Index of the segment under the pointer after the wheel turned by `delta`
/// from its resting position.
pub fn segment_under_pointer(delta: f64, item_count: usize) -> Result<usize> {
    let segment = segment_angle(item_count)?;
    let wheel_angle = (POINTER_ANGLE - delta).rem_euclid(FULL_TURN);
    let index = (wheel_angle / segment).floor() as usize;
    Ok(index.min(item_count - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_four_segments_second_winner() {
        assert_eq!(segment_angle(4).unwrap(), 90.0);
        assert_eq!(segment_center(1, 4).unwrap(), 135.0);

        for turns in 5..=7 {
            let delta = target_delta(1, 4, turns).unwrap();
            assert_eq!(delta.rem_euclid(FULL_TURN), 135.0);
        }
    }

    #[test]
    fn test_rotation_always_moves_forward() {
        let mut rng = StdRng::seed_from_u64(3);
        let revolutions = Revolutions::default();
        let mut rotation = 0.0;
        for count in 1..=10 {
            for winner in 0..count {
                let next =
                    compute_rotation(rotation, winner, count, &revolutions, &mut rng).unwrap();
                assert!(next > rotation);
                // 至少五圈再減去最多一整圈的偏移
                assert!(next - rotation >= 5.0 * FULL_TURN - FULL_TURN);
                rotation = next;
            }
        }
    }

    #[test]
    fn test_revolutions_drawn_from_five_to_seven() {
        let mut rng = StdRng::seed_from_u64(11);
        let revolutions = Revolutions::default();
        let mut seen = [false; 3];
        for _ in 0..1_000 {
            let turns = revolutions.draw(&mut rng);
            assert!((5..=7).contains(&turns));
            seen[(turns - 5) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_huge_revolution_bounds_do_not_overflow() {
        let mut rng = StdRng::seed_from_u64(5);
        let revolutions = Revolutions {
            min: u32::MAX,
            extra: 2,
        };
        assert_eq!(revolutions.draw(&mut rng), u32::MAX);
    }

    #[test]
    fn test_pointer_lands_on_winner() {
        for count in 1..=16 {
            for winner in 0..count {
                let delta = target_delta(winner, count, 6).unwrap();
                assert_eq!(segment_under_pointer(delta, count).unwrap(), winner);
            }
        }
    }

    #[test]
    fn test_single_item_wheel() {
        assert_eq!(segment_center(0, 1).unwrap(), 180.0);
        assert_eq!(target_delta(0, 1, 5).unwrap(), 5.0 * 360.0 + 90.0);
    }

    #[test]
    fn test_out_of_range_inputs_are_rejected() {
        assert!(matches!(
            segment_center(4, 4),
            Err(SpinnerError::InvalidGeometry { .. })
        ));
        assert!(segment_angle(0).is_err());
        assert!(rotation_with_revolutions(0.0, 0, 0, 5).is_err());
    }
}
