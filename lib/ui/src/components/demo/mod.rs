use crate::widgets::{
    theme::{amber_slider, card_container, reset_button, text_heading, text_muted, toggle_button},
    themed_range_slider::themed_range_slider,
};
use iced::{
    widget::{button, column, row, Column, Container, Text},
    Element, Length, Theme,
};
use rangeskin_core::RangeValues;

const DISCRETE_INITIAL: RangeValues = RangeValues::new(40.0, 80.0);
const CONTINUOUS_INITIAL: RangeValues = RangeValues::new(0.0, 1.0);
const AMBER_INITIAL: RangeValues = RangeValues::new(25.0, 75.0);

#[derive(Clone, Debug)]
pub enum Event {
    DiscreteChanged(RangeValues),
    ContinuousChanged(RangeValues),
    AmberChanged(RangeValues),
    DragStarted(RangeValues),
    DragEnded(RangeValues),
    Reset,
    ToggleTheme,
}

/// A page showing the themed slider in discrete, continuous, custom-styled
/// and disabled configurations.
pub struct RangeDemo {
    discrete: RangeValues,
    continuous: RangeValues,
    amber: RangeValues,
    dragging: bool,
    dark: bool,
}

impl Default for RangeDemo {
    fn default() -> Self {
        RangeDemo {
            discrete: DISCRETE_INITIAL,
            continuous: CONTINUOUS_INITIAL,
            amber: AMBER_INITIAL,
            dragging: false,
            dark: false,
        }
    }
}

impl RangeDemo {
    pub fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn discrete(&self) -> RangeValues {
        self.discrete
    }

    pub fn continuous(&self) -> RangeValues {
        self.continuous
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn update(&mut self, event: Event) {
        match event {
            Event::DiscreteChanged(values) => self.discrete = values,
            Event::ContinuousChanged(values) => self.continuous = values,
            Event::AmberChanged(values) => self.amber = values,
            Event::DragStarted(values) => {
                tracing::debug!("drag started at {:?}", values);
                self.dragging = true;
            }
            Event::DragEnded(values) => {
                tracing::debug!("drag ended at {:?}", values);
                self.dragging = false;
            }
            Event::Reset => {
                tracing::info!("resetting demo sliders");
                *self = RangeDemo {
                    dark: self.dark,
                    ..RangeDemo::default()
                };
            }
            Event::ToggleTheme => {
                self.dark = !self.dark;
            }
        }
    }

    pub fn view(&self) -> Element<Event> {
        let discrete = themed_range_slider(0.0..=100.0, self.discrete)
            .divisions(5)
            .labels(
                format!("{:.0}", self.discrete.start),
                format!("{:.0}", self.discrete.end),
            )
            .on_change(Event::DiscreteChanged)
            .on_change_start(Event::DragStarted)
            .on_change_end(Event::DragEnded);

        let continuous = themed_range_slider(0.0..=20.0, self.continuous)
            .on_change(Event::ContinuousChanged)
            .on_change_start(Event::DragStarted)
            .on_change_end(Event::DragEnded)
            .semantic_formatter(|value| format!("{value:.2}"));

        let amber = themed_range_slider(0.0..=100.0, self.amber)
            .style_config(amber_slider())
            .divisions(10)
            .labels(
                format!("{:.0}", self.amber.start),
                format!("{:.0}", self.amber.end),
            )
            .on_change(Event::AmberChanged);

        // Equal bounds: rendered, but never reports changes
        let disabled = themed_range_slider(50.0..=50.0, (50.0, 50.0))
            .on_change(Event::DiscreteChanged);

        let controls = row![
            button(Text::new("Reset"))
                .on_press(Event::Reset)
                .style(reset_button),
            button(Text::new(if self.dark { "Light theme" } else { "Dark theme" }))
                .on_press(Event::ToggleTheme)
                .style(toggle_button),
        ]
        .spacing(10);

        Container::new(
            Column::new()
                .spacing(20)
                .push(Text::new("Range sliders").size(24).style(text_heading))
                .push(section(
                    format!(
                        "Discrete: {:.0} - {:.0}",
                        self.discrete.start, self.discrete.end
                    ),
                    discrete.into(),
                ))
                .push(section(
                    format!(
                        "Continuous: {:.2} - {:.2}",
                        self.continuous.start, self.continuous.end
                    ),
                    continuous.into(),
                ))
                .push(section(
                    format!("Amber: {:.0} - {:.0}", self.amber.start, self.amber.end),
                    amber.into(),
                ))
                .push(section("Disabled".to_string(), disabled.into()))
                .push(controls),
        )
        .padding(20)
        .width(Length::Fill)
        .into()
    }
}

fn section(title: String, slider: Element<'_, Event>) -> Element<'_, Event> {
    Container::new(column![Text::new(title).style(text_muted), slider].spacing(8))
        .padding(12)
        .width(Length::Fill)
        .style(card_container)
        .into()
}
