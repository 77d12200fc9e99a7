//! Style resolution and thumb painting for the themed range slider.
//!
//! Nothing in here knows about widgets or input handling. [`style`] turns a
//! set of optional overrides into concrete colors and sizes for a given theme
//! snapshot, and [`thumb`] paints one thumb onto an abstract canvas.

pub mod range;
pub mod style;
pub mod thumb;

pub use range::{RangeValues, Thumb};
pub use style::{ResolvedStyle, StyleConfig, ThemeSnapshot, ValueIndicatorVisibility};
pub use thumb::{Circle, ShadowSpec, ShadowedCircleThumb, ThumbCanvas, ThumbPaint, ThumbShape};
