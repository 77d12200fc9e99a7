use iced::widget::{button, container, text};
use iced::{Border, Color, Shadow, Theme};
use rangeskin_core::{style::INACTIVE_TRACK, ShadowSpec, StyleConfig};

// Accent used by the "brand" slider on the demo page
pub const ACCENT_AMBER: Color = Color::from_rgb(1.0, 0.7, 0.0);
const ACCENT_AMBER_DARK: Color = Color::from_rgb(0.8, 0.5, 0.0);
const CARD_RADIUS: f32 = 8.0;

pub fn text_muted(theme: &Theme) -> text::Style {
    let palette = theme.extended_palette();
    text::Style {
        color: Some(Color {
            a: 0.7,
            ..palette.background.base.text
        }),
    }
}

pub fn text_heading(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().primary.strong.color),
    }
}

/// The amber variant: every color overridden, heavier track and a softer,
/// wider shadow. Theme changes only affect the tick on-primary fallback.
pub fn amber_slider() -> StyleConfig {
    StyleConfig::builder()
        .active_color(ACCENT_AMBER)
        .inactive_color(INACTIVE_TRACK)
        .value_indicator_color(ACCENT_AMBER_DARK)
        .inactive_tick_color(ACCENT_AMBER_DARK)
        .track_height(4.0)
        .thumb_radius(11.0)
        .shadows(vec![ShadowSpec::builder()
            .offset(iced::Vector::new(0.0, 2.0))
            .blur_radius(12.0)
            .spread_radius(1.0)
            .color(Color {
                a: 0.25,
                ..ACCENT_AMBER_DARK
            })
            .build()])
        .build()
}

pub fn reset_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let base = button::Style {
        background: Some(palette.primary.base.color.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: 4.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color {
                a: 0.2,
                ..Color::BLACK
            },
            offset: iced::Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(palette.primary.strong.color.into()),
            shadow: Shadow {
                color: Color {
                    a: 0.3,
                    ..Color::BLACK
                },
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 3.0,
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.weak.color.into()),
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(
                Color {
                    a: 0.5,
                    ..palette.primary.base.color
                }
                .into(),
            ),
            text_color: Color {
                a: 0.5,
                ..palette.primary.base.text
            },
            shadow: Shadow::default(),
            ..base
        },
    }
}

pub fn toggle_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let border = Border {
        radius: 4.0.into(),
        width: 1.0,
        color: palette.primary.base.color,
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(
                Color {
                    a: 0.2,
                    ..palette.primary.base.color
                }
                .into(),
            ),
            text_color: palette.primary.base.color,
            border,
            shadow: Shadow::default(),
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: Some(palette.background.base.color.into()),
            text_color: palette.primary.base.color,
            border,
            shadow: Shadow::default(),
        },
    }
}

pub fn card_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        text_color: Some(palette.background.base.text),
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: CARD_RADIUS.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color {
                a: 0.15,
                ..Color::BLACK
            },
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 5.0,
        },
    }
}
