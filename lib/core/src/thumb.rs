use crate::style::ResolvedStyle;
use bon::Builder;
use iced::{Color, Point, Size, Vector};

/// A drop shadow cast by a thumb.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ShadowSpec {
    #[builder(default = Vector::ZERO)]
    pub offset: Vector,
    #[builder(default)]
    pub blur_radius: f32,
    #[builder(default)]
    pub spread_radius: f32,
    #[builder(default = Color::BLACK)]
    pub color: Color,
}

impl ShadowSpec {
    pub fn default_shadows() -> Vec<ShadowSpec> {
        vec![ShadowSpec {
            offset: Vector::new(0.0, 3.0),
            blur_radius: 8.0,
            spread_radius: 0.0,
            color: Color {
                a: 0.2,
                ..Color::BLACK
            },
        }]
    }
}

/// A filled circle, the only primitive a thumb needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
    pub blur_radius: f32,
}

/// Where thumbs get painted. The widget implements this on top of the iced
/// renderer; tests collect circles into a `Vec`.
pub trait ThumbCanvas {
    fn fill_circle(&mut self, circle: Circle);
}

impl ThumbCanvas for Vec<Circle> {
    fn fill_circle(&mut self, circle: Circle) {
        self.push(circle);
    }
}

/// Per-call paint state handed to a [`ThumbShape`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbPaint {
    /// Thumb center in the track's coordinate space.
    pub center: Point,
    pub enabled: bool,
    /// Enable animation progress, nominally in `[0, 1]`.
    pub progress: f32,
    pub fill: Color,
    pub disabled_fill: Color,
    pub text_scale: f32,
    /// Size of the track the thumb sits on.
    pub track: Size,
}

/// Hook the range slider calls back into to draw its thumbs.
pub trait ThumbShape {
    fn preferred_size(&self, enabled: bool) -> Size;

    fn paint(&self, canvas: &mut dyn ThumbCanvas, paint: &ThumbPaint);
}

/// A round thumb with one or more drop shadows underneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowedCircleThumb {
    /// Radius at zero progress (disabled).
    pub min_radius: f32,
    /// Radius at full progress (enabled).
    pub max_radius: f32,
    pub shadows: Vec<ShadowSpec>,
}

impl ShadowedCircleThumb {
    pub fn new(min_radius: f32, max_radius: f32) -> Self {
        ShadowedCircleThumb {
            min_radius,
            max_radius,
            shadows: ShadowSpec::default_shadows(),
        }
    }

    pub fn shadows(mut self, shadows: Vec<ShadowSpec>) -> Self {
        self.shadows = shadows;
        self
    }

    /// Linear, and deliberately unclamped so an overshooting animation
    /// overshoots the radius too.
    pub fn radius(&self, progress: f32) -> f32 {
        self.min_radius + progress * (self.max_radius - self.min_radius)
    }
}

impl Default for ShadowedCircleThumb {
    fn default() -> Self {
        let radius = crate::style::THUMB_RADIUS;
        ShadowedCircleThumb::new(radius, radius)
    }
}

impl From<&ResolvedStyle> for ShadowedCircleThumb {
    fn from(style: &ResolvedStyle) -> Self {
        ShadowedCircleThumb::new(style.disabled_thumb_radius, style.thumb_radius)
            .shadows(style.shadows.clone())
    }
}

impl ThumbShape for ShadowedCircleThumb {
    fn preferred_size(&self, _enabled: bool) -> Size {
        // Same footprint in both states so toggling doesn't relayout
        let radius = self.min_radius.max(self.max_radius);
        Size::new(radius * 2.0, radius * 2.0)
    }

    fn paint(&self, canvas: &mut dyn ThumbCanvas, paint: &ThumbPaint) {
        let radius = self.radius(paint.progress);

        for shadow in &self.shadows {
            canvas.fill_circle(Circle {
                center: paint.center + shadow.offset,
                radius: radius + shadow.spread_radius,
                color: shadow.color,
                blur_radius: shadow.blur_radius,
            });
        }

        canvas.fill_circle(Circle {
            center: paint.center,
            radius,
            color: if paint.enabled {
                paint.fill
            } else {
                paint.disabled_fill
            },
            blur_radius: 0.0,
        });
    }
}
