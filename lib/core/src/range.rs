/// The selected interval of a range slider.
///
/// Callers own this value; the slider only reports proposed replacements.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeValues {
    pub start: f32,
    pub end: f32,
}

impl RangeValues {
    pub const fn new(start: f32, end: f32) -> Self {
        RangeValues { start, end }
    }

    pub fn get(&self, thumb: Thumb) -> f32 {
        match thumb {
            Thumb::Start => self.start,
            Thumb::End => self.end,
        }
    }

    /// Moves one end of the range, never letting it cross the other end.
    pub fn with(self, thumb: Thumb, value: f32) -> Self {
        match thumb {
            Thumb::Start => RangeValues {
                start: value.min(self.end),
                ..self
            },
            Thumb::End => RangeValues {
                end: value.max(self.start),
                ..self
            },
        }
    }
}

impl From<(f32, f32)> for RangeValues {
    fn from((start, end): (f32, f32)) -> Self {
        RangeValues { start, end }
    }
}

/// One of the two handles of a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    Start,
    End,
}

impl Thumb {
    pub const ALL: [Thumb; 2] = [Thumb::Start, Thumb::End];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_start_past_end_stops_at_end() {
        let values = RangeValues::new(20.0, 60.0).with(Thumb::Start, 80.0);
        assert_eq!(values, RangeValues::new(60.0, 60.0));
    }

    #[test]
    fn moving_end_below_start_stops_at_start() {
        let values = RangeValues::new(20.0, 60.0).with(Thumb::End, 0.0);
        assert_eq!(values, RangeValues::new(20.0, 20.0));
    }

    #[test]
    fn moving_within_range_keeps_other_end() {
        let values = RangeValues::new(20.0, 60.0).with(Thumb::End, 40.0);
        assert_eq!(values.get(Thumb::Start), 20.0);
        assert_eq!(values.get(Thumb::End), 40.0);
    }
}
