use crate::thumb::{ShadowSpec, ShadowedCircleThumb};
use bon::Builder;
use iced::{Color, Theme};

// Fallbacks for the overrides that don't come from the theme
pub const INACTIVE_TRACK: Color = Color::from_rgb(0.878, 0.878, 0.878); // #E0E0E0
pub const INACTIVE_TICK: Color = Color::from_rgb(0.620, 0.620, 0.620); // #9E9E9E
pub const THUMB_FILL: Color = Color::WHITE;
pub const TRACK_HEIGHT: f32 = 1.8;
pub const THUMB_RADIUS: f32 = 13.8;

/// When the value indicator bubble may appear above a dragged thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueIndicatorVisibility {
    Never,
    #[default]
    OnlyForDiscrete,
    OnlyForContinuous,
    Always,
}

impl ValueIndicatorVisibility {
    pub fn shows(self, discrete: bool) -> bool {
        match self {
            ValueIndicatorVisibility::Never => false,
            ValueIndicatorVisibility::OnlyForDiscrete => discrete,
            ValueIndicatorVisibility::OnlyForContinuous => !discrete,
            ValueIndicatorVisibility::Always => true,
        }
    }
}

/// The colors of the ambient theme that style resolution depends on.
///
/// Taken fresh from the [`Theme`] on every draw so a theme switch restyles
/// existing sliders without rebuilding them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSnapshot {
    pub primary: Color,
    pub on_primary: Color,
    pub disabled: Color,
}

impl From<&Theme> for ThemeSnapshot {
    fn from(theme: &Theme) -> Self {
        let palette = theme.extended_palette();
        ThemeSnapshot {
            primary: palette.primary.base.color,
            on_primary: palette.primary.base.text,
            disabled: palette.background.strong.color,
        }
    }
}

/// Caller supplied overrides. Every field is optional; see [`StyleConfig::resolve`]
/// for what an absent field falls back to.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct StyleConfig {
    pub active_color: Option<Color>,
    pub inactive_color: Option<Color>,
    pub active_tick_color: Option<Color>,
    pub inactive_tick_color: Option<Color>,
    pub value_indicator_color: Option<Color>,
    pub disabled_thumb_color: Option<Color>,
    pub track_height: Option<f32>,
    pub thumb_radius: Option<f32>,
    pub disabled_thumb_radius: Option<f32>,
    pub shadows: Option<Vec<ShadowSpec>>,
    /// Accepted for parity with the stock slider theme but never honored:
    /// resolution always yields [`ValueIndicatorVisibility::OnlyForDiscrete`].
    pub show_value_indicator: Option<ValueIndicatorVisibility>,
}

/// A [`StyleConfig`] with every field filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub active_track_color: Color,
    pub inactive_track_color: Color,
    pub active_tick_color: Color,
    pub inactive_tick_color: Color,
    pub value_indicator_color: Color,
    pub value_indicator_text_color: Color,
    pub thumb_color: Color,
    pub disabled_thumb_color: Color,
    pub overlay_color: Color,
    pub show_value_indicator: ValueIndicatorVisibility,
    pub track_height: f32,
    pub thumb_radius: f32,
    pub disabled_thumb_radius: f32,
    pub shadows: Vec<ShadowSpec>,
}

impl StyleConfig {
    /// Thumb geometry and shadows don't depend on the theme, so the shape can
    /// be built before any theme is known (layout needs its size).
    pub fn thumb_shape(&self) -> ShadowedCircleThumb {
        let thumb_radius = self.thumb_radius.unwrap_or(THUMB_RADIUS);
        ShadowedCircleThumb::new(
            self.disabled_thumb_radius.unwrap_or(thumb_radius),
            thumb_radius,
        )
        .shadows(
            self.shadows
                .clone()
                .unwrap_or_else(ShadowSpec::default_shadows),
        )
    }

    pub fn resolve(&self, theme: &ThemeSnapshot) -> ResolvedStyle {
        let thumb = self.thumb_shape();

        ResolvedStyle {
            active_track_color: self.active_color.unwrap_or(theme.primary),
            inactive_track_color: self.inactive_color.unwrap_or(INACTIVE_TRACK),
            active_tick_color: self.active_tick_color.unwrap_or(theme.on_primary),
            inactive_tick_color: self.inactive_tick_color.unwrap_or(INACTIVE_TICK),
            value_indicator_color: self
                .value_indicator_color
                .or(self.active_color)
                .unwrap_or(theme.primary),
            value_indicator_text_color: theme.on_primary,
            thumb_color: THUMB_FILL,
            disabled_thumb_color: self.disabled_thumb_color.unwrap_or(theme.disabled),
            overlay_color: Color::TRANSPARENT,
            show_value_indicator: ValueIndicatorVisibility::OnlyForDiscrete,
            track_height: self.track_height.unwrap_or(TRACK_HEIGHT),
            thumb_radius: thumb.max_radius,
            disabled_thumb_radius: thumb.min_radius,
            shadows: thumb.shadows,
        }
    }
}
