//! A two-thumb slider selecting a sub-range of `min..=max`.
//!
//! All input handling lives here: picking a thumb, mapping the cursor to a
//! value, snapping to divisions and keeping `start <= end`. Colors come from a
//! style function evaluated against the theme on every draw, and thumbs are
//! painted through a pluggable [`ThumbShape`].
use iced::{
    advanced::{
        layout, renderer,
        text::{self, LineHeight, Paragraph as _, Shaping, Text, Wrapping},
        widget::{tree, Tree},
        Clipboard, Layout, Shell, Widget,
    },
    alignment, event, mouse, touch, Border, Element, Event, Length, Pixels, Point, Rectangle,
    Size, Theme,
};
use rangeskin_common::RangeSliderError;
use rangeskin_core::{
    RangeValues, ResolvedStyle, ShadowedCircleThumb, StyleConfig, ThemeSnapshot, Thumb,
    ThumbPaint, ThumbShape,
};
use std::{marker::PhantomData, ops::RangeInclusive};

pub mod canvas;
pub mod track;

use canvas::RendererCanvas;
use track::{Grab, Track};

const VERTICAL_PADDING: f32 = 4.0;
const INDICATOR_HEIGHT: f32 = 24.0;
const INDICATOR_GAP: f32 = 6.0;
const INDICATOR_MIN_WIDTH: f32 = 28.0;
const INDICATOR_PADDING: f32 = 8.0;
const OVERLAY_MARGIN: f32 = 10.0;

pub type StyleFn<'a> = Box<dyn Fn(&Theme) -> ResolvedStyle + 'a>;
type ValuesFn<'a, Message> = Box<dyn Fn(RangeValues) -> Message + 'a>;

pub struct RangeSlider<'a, Message, Renderer = iced::Renderer> {
    values: RangeValues,
    min: f32,
    max: f32,
    divisions: Option<u16>,
    labels: Option<(String, String)>,
    on_change: Option<ValuesFn<'a, Message>>,
    on_change_start: Option<ValuesFn<'a, Message>>,
    on_change_end: Option<ValuesFn<'a, Message>>,
    semantic_formatter: Option<Box<dyn Fn(f32) -> String + 'a>>,
    width: Length,
    text_scale: f32,
    style: StyleFn<'a>,
    thumb_shape: Box<dyn ThumbShape + 'a>,
    _phantom: PhantomData<Renderer>,
}

#[derive(Debug, Clone, Copy, Default)]
struct State {
    dragging: Option<Grab>,
    last: RangeValues,
}

impl<'a, Message, Renderer> RangeSlider<'a, Message, Renderer> {
    /// Creates a read-only slider; it becomes interactive once
    /// [`on_change`](Self::on_change) is set.
    pub fn new(range: RangeInclusive<f32>, values: impl Into<RangeValues>) -> Self {
        RangeSlider {
            values: values.into(),
            min: *range.start(),
            max: *range.end(),
            divisions: None,
            labels: None,
            on_change: None,
            on_change_start: None,
            on_change_end: None,
            semantic_formatter: None,
            width: Length::Fill,
            text_scale: 1.0,
            style: Box::new(|theme: &Theme| {
                StyleConfig::default().resolve(&ThemeSnapshot::from(theme))
            }),
            thumb_shape: Box::new(ShadowedCircleThumb::default()),
            _phantom: Default::default(),
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

    pub fn width(self, width: impl Into<Length>) -> Self {
        RangeSlider {
            width: width.into(),
            ..self
        }
    }

    pub fn text_scale(self, text_scale: f32) -> Self {
        RangeSlider { text_scale, ..self }
    }

    pub fn style(mut self, style: impl Fn(&Theme) -> ResolvedStyle + 'a) -> Self {
        self.style = Box::new(style);
        self
    }

    pub fn thumb_shape(mut self, shape: impl ThumbShape + 'a) -> Self {
        self.thumb_shape = Box::new(shape);
        self
    }

    /// Checks the bounds and divisions the slider can work with.
    pub fn validate(&self) -> Result<(), RangeSliderError> {
        let (min, max) = (self.min, self.max);
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeSliderError::NonFiniteBounds { min, max });
        }
        if min > max {
            return Err(RangeSliderError::InvalidBounds { min, max });
        }
        if self.divisions == Some(0) {
            return Err(RangeSliderError::ZeroDivisions);
        }
        Ok(())
    }

    /// Interactive only with a change handler and a non-empty, valid range.
    pub fn is_enabled(&self) -> bool {
        self.on_change.is_some() && self.min < self.max && self.validate().is_ok()
    }

    pub fn is_discrete(&self) -> bool {
        self.divisions.is_some()
    }

    pub fn resolved_style(&self, theme: &Theme) -> ResolvedStyle {
        (self.style)(theme)
    }

    /// The label to show above `thumb` while it is dragged, if any.
    pub fn indicator_label(&self, thumb: Thumb, style: &ResolvedStyle) -> Option<&str> {
        if !style.show_value_indicator.shows(self.is_discrete()) {
            return None;
        }
        self.labels.as_ref().map(|(start, end)| match thumb {
            Thumb::Start => start.as_str(),
            Thumb::End => end.as_str(),
        })
    }

    /// Textual description of both thumbs, for logging and assistive output.
    pub fn semantic_values(&self) -> (String, String) {
        let describe = |value: f32| match &self.semantic_formatter {
            Some(formatter) => formatter(value),
            None => format!("{value}"),
        };
        (describe(self.values.start), describe(self.values.end))
    }

    fn thumb_radius(&self) -> f32 {
        self.thumb_shape.preferred_size(self.is_enabled()).width / 2.0
    }

    /// Radius of the press halo drawn behind a dragged thumb.
    pub fn overlay_radius(&self) -> f32 {
        self.thumb_radius() + OVERLAY_MARGIN
    }

    fn track(&self, bounds: Rectangle) -> Track {
        Track::new(bounds, self.thumb_radius())
    }

    fn drag_to(
        &self,
        state: &mut State,
        thumb: Thumb,
        x: f32,
        track: &Track,
        shell: &mut Shell<'_, Message>,
    ) {
        let value = track.value_at(x, self.min, self.max, self.divisions);
        let values = self.values.with(thumb, value);

        if values != state.last {
            state.last = values;
            if let Some(on_change) = &self.on_change {
                tracing::trace!("range slider {:?} moved to {:?}", thumb, values);
                shell.publish(on_change(values));
            }
        }
    }
}

impl<'a, Message, Renderer> Widget<Message, Theme, Renderer> for RangeSlider<'a, Message, Renderer>
where
    Renderer: text::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        let thumb = self.thumb_shape.preferred_size(self.is_enabled());
        Size {
            width: self.width,
            height: Length::Fixed(thumb.height + VERTICAL_PADDING * 2.0),
        }
    }

    fn layout(
        &self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = self.size();
        layout::atomic(limits, size.width, size.height)
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> event::Status {
        let state = tree.state.downcast_mut::<State>();

        if !self.is_enabled() {
            state.dragging = None;
            return event::Status::Ignored;
        }

        let bounds = layout.bounds();
        let track = self.track(bounds);

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if let Some(position) = cursor.position_over(bounds) {
                    let grab = track.grab(
                        position.x,
                        self.values,
                        self.min,
                        self.max,
                        self.thumb_radius(),
                    );
                    tracing::debug!(
                        "range slider drag start on {:?} at {:?}",
                        grab,
                        self.semantic_values()
                    );

                    state.dragging = Some(grab);
                    state.last = self.values;
                    if let Some(on_start) = &self.on_change_start {
                        shell.publish(on_start(self.values));
                    }
                    if let Grab::Thumb(thumb) = grab {
                        self.drag_to(state, thumb, position.x, &track, shell);
                    }

                    return event::Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                if let (Some(grab), Some(position)) = (state.dragging, cursor.position()) {
                    if let Some(thumb) = grab.settle(position.x) {
                        state.dragging = Some(Grab::Thumb(thumb));
                        self.drag_to(state, thumb, position.x, &track, shell);
                    }
                    return event::Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => {
                if let Some(grab) = state.dragging.take() {
                    tracing::debug!("range slider drag end on {:?} at {:?}", grab, state.last);
                    if let Some(on_end) = &self.on_change_end {
                        shell.publish(on_end(state.last));
                    }
                    return event::Status::Captured;
                }
            }
            _ => {}
        }

        event::Status::Ignored
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let style = (self.style)(theme);
        let bounds = layout.bounds();
        let track = self.track(bounds);
        let enabled = self.is_enabled();
        let dragging = state.dragging.and_then(Grab::thumb).filter(|_| enabled);

        let start_x = track.position(self.values.start, self.min, self.max);
        let end_x = track.position(self.values.end, self.min, self.max);
        let half_height = style.track_height / 2.0;
        let rail = |from: f32, to: f32| Rectangle {
            x: from,
            y: track.center_y - half_height,
            width: (to - from).max(0.0),
            height: style.track_height,
        };

        renderer.fill_quad(
            renderer::Quad {
                bounds: rail(track.left, track.right()),
                border: Border {
                    radius: half_height.into(),
                    ..Border::default()
                },
                ..renderer::Quad::default()
            },
            style.inactive_track_color,
        );
        renderer.fill_quad(
            renderer::Quad {
                bounds: rail(start_x, end_x),
                border: Border {
                    radius: half_height.into(),
                    ..Border::default()
                },
                ..renderer::Quad::default()
            },
            if enabled {
                style.active_track_color
            } else {
                style.disabled_thumb_color
            },
        );

        if let Some(divisions) = self.divisions.filter(|d| *d > 0) {
            for x in track.ticks(divisions) {
                let color = if (start_x..=end_x).contains(&x) {
                    style.active_tick_color
                } else {
                    style.inactive_tick_color
                };
                renderer.fill_quad(
                    renderer::Quad {
                        bounds: Rectangle {
                            x: x - half_height,
                            y: track.center_y - half_height,
                            width: style.track_height,
                            height: style.track_height,
                        },
                        border: Border {
                            radius: half_height.into(),
                            ..Border::default()
                        },
                        ..renderer::Quad::default()
                    },
                    color,
                );
            }
        }

        let center = |thumb: Thumb| {
            let x = match thumb {
                Thumb::Start => start_x,
                Thumb::End => end_x,
            };
            Point::new(x, track.center_y)
        };

        if let Some(thumb) = dragging.filter(|_| style.overlay_color.a > 0.0) {
            let radius = self.overlay_radius();
            let at = center(thumb);
            renderer.fill_quad(
                renderer::Quad {
                    bounds: Rectangle {
                        x: at.x - radius,
                        y: at.y - radius,
                        width: radius * 2.0,
                        height: radius * 2.0,
                    },
                    border: Border {
                        radius: radius.into(),
                        ..Border::default()
                    },
                    ..renderer::Quad::default()
                },
                style.overlay_color,
            );
        }

        // The thumb being dragged goes on top
        let order = match dragging {
            Some(Thumb::Start) => [Thumb::End, Thumb::Start],
            _ => Thumb::ALL,
        };
        let track_size = Size::new(track.width, style.track_height);
        for thumb in order {
            let paint = ThumbPaint {
                center: center(thumb),
                enabled,
                progress: if enabled { 1.0 } else { 0.0 },
                fill: style.thumb_color,
                disabled_fill: style.disabled_thumb_color,
                text_scale: self.text_scale,
                track: track_size,
            };
            self.thumb_shape
                .paint(&mut RendererCanvas::new(renderer), &paint);
        }

        if let Some(thumb) = dragging {
            if let Some(label) = self.indicator_label(thumb, &style) {
                self.draw_indicator(renderer, &style, center(thumb), label, viewport);
            }
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if !self.is_enabled() {
            mouse::Interaction::default()
        } else if state.dragging.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> RangeSlider<'a, Message, Renderer>
where
    Renderer: text::Renderer,
{
    /// Bubble above a thumb, sized from the measured label.
    pub fn indicator_bounds(
        &self,
        renderer: &Renderer,
        label: &str,
        thumb_center: Point,
    ) -> (Rectangle, Pixels) {
        let scale = self.text_scale;
        let text_size = Pixels(renderer.default_size().0 * scale);
        let measured = Renderer::Paragraph::with_text(Text {
            content: label,
            bounds: Size::INFINITY,
            size: text_size,
            line_height: LineHeight::default(),
            font: renderer.default_font(),
            horizontal_alignment: alignment::Horizontal::Left,
            vertical_alignment: alignment::Vertical::Top,
            shaping: Shaping::Basic,
            wrapping: Wrapping::None,
        })
        .min_bounds();

        let width = (measured.width + INDICATOR_PADDING * 2.0 * scale)
            .max(INDICATOR_MIN_WIDTH * scale);
        let height = (measured.height + INDICATOR_PADDING * scale).max(INDICATOR_HEIGHT * scale);
        let radius = self.thumb_shape.preferred_size(true).height / 2.0;
        let bounds = Rectangle {
            x: thumb_center.x - width / 2.0,
            y: thumb_center.y - radius - INDICATOR_GAP - height,
            width,
            height,
        };

        (bounds, text_size)
    }

    fn draw_indicator(
        &self,
        renderer: &mut Renderer,
        style: &ResolvedStyle,
        thumb_center: Point,
        label: &str,
        viewport: &Rectangle,
    ) {
        let (bounds, text_size) = self.indicator_bounds(renderer, label, thumb_center);
        let height = bounds.height;

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border {
                    radius: (height / 2.0).into(),
                    ..Border::default()
                },
                ..renderer::Quad::default()
            },
            style.value_indicator_color,
        );
        renderer.fill_text(
            Text {
                content: label.to_string(),
                bounds: bounds.size(),
                size: text_size,
                line_height: LineHeight::default(),
                font: renderer.default_font(),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Center,
                shaping: Shaping::Basic,
                wrapping: Wrapping::None,
            },
            bounds.center(),
            style.value_indicator_text_color,
            *viewport,
        );
    }
}

impl<'a, Message, Renderer> From<RangeSlider<'a, Message, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Renderer: text::Renderer + 'a,
{
    fn from(slider: RangeSlider<'a, Message, Renderer>) -> Self {
        if let Err(e) = slider.validate() {
            tracing::warn!("range slider rendered disabled: {}", e);
        }
        Element::new(slider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::clipboard;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Changed(RangeValues),
        Started(RangeValues),
        Ended(RangeValues),
    }

    enum Input {
        Press(f32),
        Move(f32),
        Release,
    }

    /// 220 wide with a radius 10 thumb: the track spans x = 10..=210, so a
    /// value `v` in `0..=100` sits at `x = 10 + 2v`.
    fn interactive(
        range: RangeInclusive<f32>,
        values: (f32, f32),
    ) -> RangeSlider<'static, Message, ()> {
        RangeSlider::new(range, values)
            .thumb_shape(ShadowedCircleThumb::new(10.0, 10.0))
            .on_change(Message::Changed)
            .on_change_start(Message::Started)
            .on_change_end(Message::Ended)
    }

    fn run(mut slider: RangeSlider<'static, Message, ()>, inputs: &[Input]) -> Vec<Message> {
        let node = layout::Node::new(Size::new(220.0, 40.0));
        let mut tree = Tree {
            tag: Widget::<Message, Theme, ()>::tag(&slider),
            state: Widget::<Message, Theme, ()>::state(&slider),
            children: Vec::new(),
        };
        let mut messages = Vec::new();
        let mut cursor = Point::ORIGIN;

        for input in inputs {
            let event = match *input {
                Input::Press(x) => {
                    cursor = Point::new(x, 20.0);
                    Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                }
                Input::Move(x) => {
                    cursor = Point::new(x, 20.0);
                    Event::Mouse(mouse::Event::CursorMoved { position: cursor })
                }
                Input::Release => Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            };
            let mut shell = Shell::new(&mut messages);
            let _ = Widget::<Message, Theme, ()>::on_event(
                &mut slider,
                &mut tree,
                event,
                Layout::new(&node),
                mouse::Cursor::Available(cursor),
                &(),
                &mut clipboard::Null,
                &mut shell,
                &Rectangle::with_size(Size::INFINITY),
            );
        }

        messages
    }

    fn discrete() -> RangeSlider<'static, Message> {
        RangeSlider::new(0.0..=100.0, (40.0, 80.0))
            .divisions(5)
            .labels("40", "80")
            .on_change(Message::Changed)
    }

    #[test]
    fn read_only_without_change_handler() {
        let slider: RangeSlider<'_, Message> = RangeSlider::new(0.0..=20.0, (0.0, 1.0));
        assert!(!slider.is_enabled());
        assert!(slider.on_change(Message::Changed).is_enabled());
    }

    #[test]
    fn equal_bounds_disable_the_slider() {
        let slider: RangeSlider<'_, Message> =
            RangeSlider::new(5.0..=5.0, (5.0, 5.0)).on_change(Message::Changed);
        assert!(slider.validate().is_ok());
        assert!(!slider.is_enabled());
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let inverted: RangeSlider<'_, Message> =
            RangeSlider::new(10.0..=0.0, (0.0, 1.0)).on_change(Message::Changed);
        assert_eq!(
            inverted.validate(),
            Err(RangeSliderError::InvalidBounds {
                min: 10.0,
                max: 0.0
            })
        );
        assert!(!inverted.is_enabled());

        let zero: RangeSlider<'_, Message> = RangeSlider::new(0.0..=1.0, (0.0, 1.0)).divisions(0);
        assert_eq!(zero.validate(), Err(RangeSliderError::ZeroDivisions));

        let infinite: RangeSlider<'_, Message> =
            RangeSlider::new(0.0..=f32::INFINITY, (0.0, 1.0));
        assert!(matches!(
            infinite.validate(),
            Err(RangeSliderError::NonFiniteBounds { .. })
        ));
    }

    #[test]
    fn discrete_slider_shows_labels_while_dragged() {
        let slider = discrete();
        let style = slider.resolved_style(&Theme::Light);

        assert!(slider.is_discrete());
        assert_eq!(slider.indicator_label(Thumb::Start, &style), Some("40"));
        assert_eq!(slider.indicator_label(Thumb::End, &style), Some("80"));
    }

    #[test]
    fn continuous_slider_never_shows_indicator() {
        let slider: RangeSlider<'_, Message> = RangeSlider::new(0.0..=20.0, (0.0, 1.0))
            .labels("0", "1")
            .on_change(Message::Changed);
        let style = slider.resolved_style(&Theme::Light);

        assert_eq!(slider.indicator_label(Thumb::Start, &style), None);
        assert_eq!(slider.indicator_label(Thumb::End, &style), None);
    }

    #[test]
    fn default_style_tracks_the_theme() {
        let slider = discrete();
        for theme in [Theme::Light, Theme::Dark, Theme::Nord] {
            let style = slider.resolved_style(&theme);
            assert_eq!(
                style.active_track_color,
                theme.extended_palette().primary.base.color
            );
        }
    }

    #[test]
    fn semantic_values_use_formatter() {
        let plain = discrete();
        assert_eq!(plain.semantic_values(), ("40".to_string(), "80".to_string()));

        let percent = discrete().semantic_formatter(|value| format!("{value:.0}%"));
        assert_eq!(
            percent.semantic_values(),
            ("40%".to_string(), "80%".to_string())
        );
    }

    #[test]
    fn drag_reports_start_change_and_end_once() {
        let slider = interactive(0.0..=100.0, (40.0, 80.0)).divisions(5);
        let messages = run(
            slider,
            &[Input::Press(170.0), Input::Move(210.0), Input::Release],
        );

        assert_eq!(
            messages,
            vec![
                Message::Started(RangeValues::new(40.0, 80.0)),
                Message::Changed(RangeValues::new(40.0, 100.0)),
                Message::Ended(RangeValues::new(40.0, 100.0)),
            ]
        );
    }

    #[test]
    fn start_thumb_stops_at_the_end_thumb() {
        let slider = interactive(0.0..=100.0, (40.0, 80.0));
        let messages = run(slider, &[Input::Press(90.0), Input::Move(200.0)]);

        assert_eq!(
            messages.last(),
            Some(&Message::Changed(RangeValues::new(80.0, 80.0)))
        );
        for message in &messages {
            if let Message::Changed(values) = message {
                assert!(values.start <= values.end);
            }
        }
    }

    #[test]
    fn thumbs_stacked_at_max_can_be_pulled_apart() {
        let slider = interactive(0.0..=100.0, (100.0, 100.0));
        let messages = run(slider, &[Input::Press(210.0), Input::Move(110.0)]);

        assert_eq!(
            messages,
            vec![
                Message::Started(RangeValues::new(100.0, 100.0)),
                Message::Changed(RangeValues::new(50.0, 100.0)),
            ]
        );
    }

    #[test]
    fn thumbs_stacked_at_min_can_be_pulled_apart() {
        let slider = interactive(0.0..=100.0, (0.0, 0.0));
        let messages = run(slider, &[Input::Press(7.0), Input::Move(110.0)]);

        assert_eq!(
            messages,
            vec![
                Message::Started(RangeValues::new(0.0, 0.0)),
                Message::Changed(RangeValues::new(0.0, 50.0)),
            ]
        );
    }

    #[test]
    fn equal_bounds_emit_nothing() {
        let slider = interactive(50.0..=50.0, (50.0, 50.0));
        let messages = run(
            slider,
            &[Input::Press(110.0), Input::Move(150.0), Input::Release],
        );

        assert!(messages.is_empty());
    }

    #[test]
    fn overlay_halo_extends_past_the_thumb_radius() {
        let slider = interactive(0.0..=100.0, (40.0, 80.0));
        assert_eq!(slider.overlay_radius(), 10.0 + OVERLAY_MARGIN);
    }

    #[test]
    fn indicator_never_shrinks_below_its_minimum() {
        let slider = interactive(0.0..=100.0, (40.0, 80.0)).text_scale(2.0);
        let (bounds, size) = slider.indicator_bounds(&(), "40", Point::new(90.0, 20.0));

        assert_eq!(bounds.width, INDICATOR_MIN_WIDTH * 2.0);
        assert_eq!(bounds.height, INDICATOR_HEIGHT * 2.0);
        assert_eq!(bounds.center_x(), 90.0);
        assert_eq!(size.0, text::Renderer::default_size(&()).0 * 2.0);
        assert!(bounds.y + bounds.height < 20.0 - 10.0);
    }

    #[test]
    fn layout_height_fits_the_thumb() {
        let slider = discrete();
        let size = Widget::<Message, Theme, iced::Renderer>::size(&slider);
        assert_eq!(size.height, Length::Fixed(13.8 * 2.0 + VERTICAL_PADDING * 2.0));
    }
}
