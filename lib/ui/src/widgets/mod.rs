pub mod range_slider;
pub mod theme;
pub mod themed_range_slider;

pub use range_slider::RangeSlider;
pub use themed_range_slider::{themed_range_slider, ThemedRangeSlider};
