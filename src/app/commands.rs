use crate::adapters::observer::ConsoleObserver;
use crate::core::engine::SpinEngine;
use crate::core::layout::wheel_layout;
use crate::core::spinner::{IgnoredReason, SpinRequest};
use crate::core::{ConfigProvider, DietaryFilters, Roster};
use crate::utils::error::{Result, SpinnerError};
use std::io::Write;

pub const EMPTY_ROSTER_MESSAGE: &str = "No restaurants yet. Add some to get started!";

/// `list`: the roster (or its filtered view) with ratings and dietary tags.
pub fn list_command<W: Write>(
    roster: &Roster,
    filters: &DietaryFilters,
    out: &mut W,
) -> Result<()> {
    if roster.is_empty() {
        writeln!(out, "{}", EMPTY_ROSTER_MESSAGE)?;
        return Ok(());
    }

    let shown = roster.filtered(filters);
    writeln!(out, "Restaurants ({} of {})", shown.len(), roster.len())?;

    for restaurant in shown {
        let mut tags = Vec::new();
        if restaurant.is_vegetarian {
            tags.push("🌱 Veg");
        }
        if restaurant.is_halal {
            tags.push("🌙 Halal");
        }
        writeln!(
            out,
            "{:>14}  {:<22} {}  {}",
            restaurant.id,
            restaurant.name,
            restaurant.stars(),
            tags.join(" ")
        )?;
    }
    Ok(())
}

/// `spin`: spins the filtered wheel `times` times and announces each winner.
///
/// An empty filtered roster is refused with `EmptyInput` before anything is written.
pub async fn spin_command<C, W>(
    roster: &Roster,
    filters: &DietaryFilters,
    config: &C,
    seed: Option<u64>,
    times: u32,
    out: &mut W,
) -> Result<()>
where
    C: ConfigProvider,
    W: Write + Send,
{
    let items = roster.items(filters);
    if items.is_empty() {
        return Err(SpinnerError::EmptyInput);
    }

    writeln!(
        out,
        "{} restaurant{} in the wheel{}",
        items.len(),
        if items.len() == 1 { "" } else { "s" },
        if filters.is_active() { " (filtered)" } else { "" }
    )?;

    let observer = ConsoleObserver::new(&mut *out).with_roster(roster);
    let mut engine = SpinEngine::from_config(config, observer);
    if let Some(seed) = seed {
        engine = engine.with_seed(seed);
    }

    for _ in 0..times {
        if let SpinRequest::Ignored(IgnoredReason::EmptyCollection) = engine.spin(&items).await? {
            return Err(SpinnerError::EmptyInput);
        }
    }
    Ok(())
}

/// `wheel`: one line per segment with its render angles.
pub fn wheel_command<W: Write>(
    roster: &Roster,
    filters: &DietaryFilters,
    out: &mut W,
) -> Result<()> {
    let items = roster.items(filters);
    if items.is_empty() {
        return Err(SpinnerError::EmptyInput);
    }

    for segment in wheel_layout(&items)? {
        writeln!(
            out,
            "#{:<2} {:>7.2}° → {:>7.2}°  {}",
            segment.index, segment.start_angle, segment.end_angle, segment.label
        )?;
    }
    Ok(())
}
