//! The re-skinned range slider.
//!
//! [`ThemedRangeSlider`] only collects overrides and forwards everything else
//! to [`RangeSlider`]. Overrides are resolved against the theme inside the
//! style function, so they are re-evaluated on every draw.
use super::range_slider::RangeSlider;
use iced::{advanced::text, Color, Element, Length, Theme};
use rangeskin_core::{RangeValues, ShadowSpec, StyleConfig, ThemeSnapshot, ValueIndicatorVisibility};
use std::ops::RangeInclusive;

type ValuesFn<'a, Message> = Box<dyn Fn(RangeValues) -> Message + 'a>;

pub struct ThemedRangeSlider<'a, Message> {
    values: RangeValues,
    range: RangeInclusive<f32>,
    divisions: Option<u16>,
    labels: Option<(String, String)>,
    on_change: Option<ValuesFn<'a, Message>>,
    on_change_start: Option<ValuesFn<'a, Message>>,
    on_change_end: Option<ValuesFn<'a, Message>>,
    semantic_formatter: Option<Box<dyn Fn(f32) -> String + 'a>>,
    width: Length,
    config: StyleConfig,
}

/// Shorthand for [`ThemedRangeSlider::new`].
pub fn themed_range_slider<'a, Message>(
    range: RangeInclusive<f32>,
    values: impl Into<RangeValues>,
) -> ThemedRangeSlider<'a, Message>
where
    Message: 'a,
{
    ThemedRangeSlider::new(range, values)
}

impl<'a, Message> ThemedRangeSlider<'a, Message>
where
    Message: 'a,
{
    pub fn new(range: RangeInclusive<f32>, values: impl Into<RangeValues>) -> Self {
        ThemedRangeSlider {
            values: values.into(),
            range,
            divisions: None,
            labels: None,
            on_change: None,
            on_change_start: None,
            on_change_end: None,
            semantic_formatter: None,
            width: Length::Fill,
            config: StyleConfig::default(),
        }
    }

    pub fn divisions(mut self, divisions: u16) -> Self {
        self.divisions = Some(divisions);
        self
    }

    pub fn labels(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.labels = Some((start.into(), end.into()));
        self
    }

    /// Without this the slider renders read-only.
    pub fn on_change(mut self, on_change: impl Fn(RangeValues) -> Message + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn on_change_start(mut self, on_start: impl Fn(RangeValues) -> Message + 'a) -> Self {
        self.on_change_start = Some(Box::new(on_start));
        self
    }

    pub fn on_change_end(mut self, on_end: impl Fn(RangeValues) -> Message + 'a) -> Self {
        self.on_change_end = Some(Box::new(on_end));
        self
    }

    pub fn semantic_formatter(mut self, formatter: impl Fn(f32) -> String + 'a) -> Self {
        self.semantic_formatter = Some(Box::new(formatter));
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Replaces all overrides at once.
    pub fn style_config(mut self, config: StyleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn active_color(mut self, color: Color) -> Self {
        self.config.active_color = Some(color);
        self
    }

    pub fn inactive_color(mut self, color: Color) -> Self {
        self.config.inactive_color = Some(color);
        self
    }

    pub fn active_tick_color(mut self, color: Color) -> Self {
        self.config.active_tick_color = Some(color);
        self
    }

    pub fn inactive_tick_color(mut self, color: Color) -> Self {
        self.config.inactive_tick_color = Some(color);
        self
    }

    pub fn value_indicator_color(mut self, color: Color) -> Self {
        self.config.value_indicator_color = Some(color);
        self
    }

    pub fn disabled_thumb_color(mut self, color: Color) -> Self {
        self.config.disabled_thumb_color = Some(color);
        self
    }

    pub fn track_height(mut self, height: f32) -> Self {
        self.config.track_height = Some(height);
        self
    }

    pub fn thumb_radius(mut self, radius: f32) -> Self {
        self.config.thumb_radius = Some(radius);
        self
    }

    pub fn disabled_thumb_radius(mut self, radius: f32) -> Self {
        self.config.disabled_thumb_radius = Some(radius);
        self
    }

    pub fn shadows(mut self, shadows: Vec<ShadowSpec>) -> Self {
        self.config.shadows = Some(shadows);
        self
    }

    // FIXME: confirm with design whether callers should be able to opt out of
    // the discrete-only indicator; the override is currently dropped on resolve.
    pub fn show_value_indicator(mut self, visibility: ValueIndicatorVisibility) -> Self {
        self.config.show_value_indicator = Some(visibility);
        self
    }

    pub fn into_range_slider<Renderer>(self) -> RangeSlider<'a, Message, Renderer> {
        let ThemedRangeSlider {
            values,
            range,
            divisions,
            labels,
            on_change,
            on_change_start,
            on_change_end,
            semantic_formatter,
            width,
            config,
        } = self;

        let mut slider = RangeSlider::new(range, values)
            .width(width)
            .thumb_shape(config.thumb_shape())
            .style(move |theme: &Theme| config.resolve(&ThemeSnapshot::from(theme)));

        if let Some(divisions) = divisions {
            slider = slider.divisions(divisions);
        }
        if let Some((start, end)) = labels {
            slider = slider.labels(start, end);
        }
        if let Some(on_change) = on_change {
            slider = slider.on_change(on_change);
        }
        if let Some(on_start) = on_change_start {
            slider = slider.on_change_start(on_start);
        }
        if let Some(on_end) = on_change_end {
            slider = slider.on_change_end(on_end);
        }
        if let Some(formatter) = semantic_formatter {
            slider = slider.semantic_formatter(formatter);
        }

        slider
    }
}

impl<'a, Message, Renderer> From<ThemedRangeSlider<'a, Message>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Renderer: text::Renderer + 'a,
{
    fn from(slider: ThemedRangeSlider<'a, Message>) -> Self {
        slider.into_range_slider::<Renderer>().into()
    }
}
