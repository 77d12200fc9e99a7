use iced::Rectangle;
use rangeskin_core::{RangeValues, Thumb};

/// Horizontal geometry of a range slider's track.
///
/// The track is inset from the widget bounds by half a thumb on each side so
/// a thumb at either end still fits inside the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub left: f32,
    pub width: f32,
    pub center_y: f32,
}

impl Track {
    pub fn new(bounds: Rectangle, inset: f32) -> Self {
        Track {
            left: bounds.x + inset,
            width: (bounds.width - inset * 2.0).max(0.0),
            center_y: bounds.center_y(),
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn position(&self, value: f32, min: f32, max: f32) -> f32 {
        let ratio = if max - min <= f32::EPSILON {
            0.0
        } else {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        };
        self.left + ratio * self.width
    }

    pub fn value_at(&self, x: f32, min: f32, max: f32, divisions: Option<u16>) -> f32 {
        let ratio = if self.width <= f32::EPSILON {
            0.0
        } else {
            ((x - self.left) / self.width).clamp(0.0, 1.0)
        };
        match divisions.filter(|d| *d > 0) {
            // Whole steps times the span, divided last, keeps multiples exact
            Some(divisions) => {
                let divisions = f32::from(divisions);
                let steps = (ratio * divisions).round();
                min + steps * (max - min) / divisions
            }
            None => min + ratio * (max - min),
        }
    }

    /// The thumb a press at `x` should grab. Ties go to the start thumb when
    /// pressing left of it and to the end thumb otherwise.
    pub fn nearest_thumb(&self, x: f32, values: RangeValues, min: f32, max: f32) -> Thumb {
        let start = self.position(values.start, min, max);
        let end = self.position(values.end, min, max);
        let (to_start, to_end) = ((x - start).abs(), (x - end).abs());

        if to_start < to_end || (to_start == to_end && x < start) {
            Thumb::Start
        } else {
            Thumb::End
        }
    }

    /// What a press at `x` grabs. A press covering both thumbs is left
    /// undecided until the drag direction picks one.
    pub fn grab(&self, x: f32, values: RangeValues, min: f32, max: f32, radius: f32) -> Grab {
        let start = self.position(values.start, min, max);
        let end = self.position(values.end, min, max);

        if (x - start).abs() <= radius && (x - end).abs() <= radius {
            Grab::Undecided { origin: x }
        } else {
            Grab::Thumb(self.nearest_thumb(x, values, min, max))
        }
    }

    /// X coordinates of the tick marks, one per division boundary.
    pub fn ticks(&self, divisions: u16) -> impl Iterator<Item = f32> + '_ {
        (0..=divisions).map(move |i| self.left + self.width * f32::from(i) / f32::from(divisions))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grab {
    Thumb(Thumb),
    Undecided { origin: f32 },
}

impl Grab {
    pub fn thumb(self) -> Option<Thumb> {
        match self {
            Grab::Thumb(thumb) => Some(thumb),
            Grab::Undecided { .. } => None,
        }
    }

    /// Settles an undecided grab once the cursor has moved to `x`: leftwards
    /// takes the start thumb, rightwards the end thumb.
    pub fn settle(self, x: f32) -> Option<Thumb> {
        match self {
            Grab::Thumb(thumb) => Some(thumb),
            Grab::Undecided { origin } if x < origin => Some(Thumb::Start),
            Grab::Undecided { origin } if x > origin => Some(Thumb::End),
            Grab::Undecided { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Track {
        Track::new(Rectangle::new(iced::Point::new(10.0, 0.0), iced::Size::new(120.0, 40.0)), 10.0)
    }

    #[test]
    fn inset_keeps_thumbs_inside_bounds() {
        let track = track();
        assert_eq!(track.left, 20.0);
        assert_eq!(track.width, 100.0);
        assert_eq!(track.right(), 120.0);
        assert_eq!(track.center_y, 20.0);
    }

    #[test]
    fn positions_map_linearly() {
        let track = track();
        assert_eq!(track.position(0.0, 0.0, 20.0), 20.0);
        assert_eq!(track.position(10.0, 0.0, 20.0), 70.0);
        assert_eq!(track.position(20.0, 0.0, 20.0), 120.0);
        assert_eq!(track.position(50.0, 0.0, 20.0), 120.0);
    }

    #[test]
    fn empty_range_pins_to_left() {
        assert_eq!(track().position(5.0, 5.0, 5.0), 20.0);
    }

    #[test]
    fn continuous_values_are_not_snapped() {
        let track = track();
        assert_eq!(track.value_at(45.0, 0.0, 20.0, None), 5.0);
        assert_eq!(track.value_at(0.0, 0.0, 20.0, None), 0.0);
        assert_eq!(track.value_at(500.0, 0.0, 20.0, None), 20.0);
    }

    #[test]
    fn five_divisions_snap_to_multiples_of_twenty() {
        let track = track();
        assert_eq!(track.value_at(57.0, 0.0, 100.0, Some(5)), 40.0);
        assert_eq!(track.value_at(69.0, 0.0, 100.0, Some(5)), 40.0);
        assert_eq!(track.value_at(71.0, 0.0, 100.0, Some(5)), 60.0);
        assert_eq!(track.value_at(95.0, 0.0, 100.0, Some(5)), 80.0);
        assert_eq!(track.value_at(119.0, 0.0, 100.0, Some(5)), 100.0);
        assert_eq!(track.value_at(20.0, 0.0, 100.0, Some(5)), 0.0);
    }

    #[test]
    fn stacked_thumbs_leave_the_grab_undecided() {
        let track = track();
        let at_max = RangeValues::new(100.0, 100.0);
        assert_eq!(
            track.grab(120.0, at_max, 0.0, 100.0, 10.0),
            Grab::Undecided { origin: 120.0 }
        );
        assert_eq!(
            track.grab(117.0, RangeValues::new(0.0, 0.0), 0.0, 100.0, 10.0),
            Grab::Thumb(Thumb::End)
        );
        assert_eq!(
            track.grab(30.0, RangeValues::new(40.0, 80.0), 0.0, 100.0, 10.0),
            Grab::Thumb(Thumb::Start)
        );
    }

    #[test]
    fn drag_direction_settles_undecided_grab() {
        let grab = Grab::Undecided { origin: 50.0 };
        assert_eq!(grab.settle(30.0), Some(Thumb::Start));
        assert_eq!(grab.settle(70.0), Some(Thumb::End));
        assert_eq!(grab.settle(50.0), None);
        assert_eq!(Grab::Thumb(Thumb::End).settle(0.0), Some(Thumb::End));
    }

    #[test]
    fn press_grabs_nearest_thumb() {
        let track = track();
        let values = RangeValues::new(40.0, 80.0);
        assert_eq!(track.nearest_thumb(30.0, values, 0.0, 100.0), Thumb::Start);
        assert_eq!(track.nearest_thumb(110.0, values, 0.0, 100.0), Thumb::End);
        assert_eq!(track.nearest_thumb(75.0, values, 0.0, 100.0), Thumb::Start);
        assert_eq!(track.nearest_thumb(85.0, values, 0.0, 100.0), Thumb::End);
    }

    #[test]
    fn stacked_thumbs_split_by_side() {
        let track = track();
        let values = RangeValues::new(50.0, 50.0);
        assert_eq!(track.nearest_thumb(60.0, values, 0.0, 100.0), Thumb::Start);
        assert_eq!(track.nearest_thumb(80.0, values, 0.0, 100.0), Thumb::End);
    }

    #[test]
    fn ticks_cover_both_ends() {
        let ticks: Vec<f32> = track().ticks(5).collect();
        assert_eq!(ticks, vec![20.0, 40.0, 60.0, 80.0, 100.0, 120.0]);
    }
}
