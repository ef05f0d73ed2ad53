//! Segment layout a renderer needs to draw the wheel.
//!
//! Rendering angles start at the top of the wheel (-90° from the x axis) and
//! run clockwise. Segments are equal-sized regardless of weight.

use crate::core::geometry::segment_angle;
use crate::domain::model::Item;
use crate::utils::error::Result;

pub const MAX_LABEL_CHARS: usize = 12;
const RENDER_OFFSET: f64 = -90.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub item_id: String,
    pub label: String,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Rotation applied to the label so it reads outward from the center.
    pub label_rotation: f64,
    pub large_arc: bool,
}

impl Segment {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Point at `fraction` of `radius` along the segment's bisector.
    pub fn label_position(&self, center: (f64, f64), radius: f64, fraction: f64) -> (f64, f64) {
        let angle = self.mid_angle().to_radians();
        let r = radius * fraction;
        (center.0 + r * angle.cos(), center.1 + r * angle.sin())
    }
}

pub fn wheel_layout(items: &[Item]) -> Result<Vec<Segment>> {
    let segment = segment_angle(items.len())?;

    Ok(items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let start = index as f64 * segment;
            Segment {
                index,
                item_id: item.id.clone(),
                label: display_label(&item.name),
                start_angle: start + RENDER_OFFSET,
                end_angle: start + segment + RENDER_OFFSET,
                label_rotation: start + segment / 2.0,
                large_arc: segment > 180.0,
            }
        })
        .collect())
}

/// Truncates long names to fit a segment, marking the cut with an ellipsis.
pub fn display_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        let head: String = name.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{}…", head)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("Chipotle"), "Chipotle");
        assert_eq!(display_label("Twelve Chars"), "Twelve Chars");
        assert_eq!(display_label("Mediterranean Grill"), "Mediterrane…");
    }

    #[test]
    fn test_layout_starts_at_top() {
        let items = vec![
            Item::new("1", "A", 1),
            Item::new("2", "B", 5),
            Item::new("3", "C", 3),
            Item::new("4", "D", 2),
        ];
        let layout = wheel_layout(&items).unwrap();

        assert_eq!(layout.len(), 4);
        assert_eq!(layout[0].start_angle, -90.0);
        assert_eq!(layout[0].end_angle, 0.0);
        assert_eq!(layout[3].end_angle, 270.0);
        assert_eq!(layout[1].label_rotation, 135.0);
        assert!(layout.iter().all(|s| !s.large_arc));
    }

    #[test]
    fn test_single_segment_uses_large_arc() {
        let layout = wheel_layout(&[Item::new("1", "Solo", 2)]).unwrap();
        assert!(layout[0].large_arc);
    }

    #[test]
    fn test_label_position_on_bisector() {
        let layout = wheel_layout(&[Item::new("1", "A", 1), Item::new("2", "B", 1)]).unwrap();
        // 第一格的中線指向正右方
        let (x, y) = layout[0].label_position((200.0, 200.0), 150.0, 0.65);
        assert!((x - (200.0 + 97.5)).abs() < 1e-9);
        assert!((y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        assert!(wheel_layout(&[]).is_err());
    }
}
