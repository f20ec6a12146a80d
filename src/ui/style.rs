//! Styling helpers shared by the section views.
//!
//! Everything is derived from the active theme's extended palette so the
//! page holds together in any built-in theme.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::content::model::MediaKind;

/// Cubic ease-out for the reveal and modal transitions.
pub fn ease_out(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Text alpha for a section mid fade-in: dimmed until revealed, then
/// ramping to full strength.
fn fade_alpha(progress: f32) -> f32 {
    0.25 + 0.75 * ease_out(progress)
}

/// Section container: transparent, with the default text color faded by
/// reveal progress (the container's text color cascades to its texts).
pub fn section(progress: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        text_color: Some(with_alpha(
            theme.extended_palette().background.base.text,
            fade_alpha(progress),
        )),
        ..container::Style::default()
    }
}

/// The nav bar strip at the top of the page.
pub fn nav(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..container::Style::default()
    }
}

/// The footer strip, slightly set off from the page background.
pub fn footer(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..container::Style::default()
    }
}

fn rounded(radius: f32) -> Border {
    Border {
        color: Color::TRANSPARENT,
        width: 0.0,
        radius: radius.into(),
    }
}

/// A category chip. Selected look is purely a function of the selection
/// flag; hover only affects unselected chips.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let palette = theme.extended_palette();

        let pair = if selected {
            palette.primary.weak
        } else if status == button::Status::Hovered {
            palette.background.strong
        } else {
            palette.background.weak
        };

        button::Style {
            background: Some(Background::Color(pair.color)),
            text_color: if selected {
                palette.primary.strong.color
            } else {
                pair.text
            },
            border: rounded(18.0),
            shadow: Shadow::default(),
        }
    }
}

/// Filled call-to-action button.
pub fn cta(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let pair = if status == button::Status::Hovered {
        palette.primary.strong
    } else {
        palette.primary.base
    };

    button::Style {
        background: Some(Background::Color(pair.color)),
        text_color: pair.text,
        border: rounded(22.0),
        shadow: Shadow::default(),
    }
}

/// Borderless text button for nav links and secondary actions.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: None,
        text_color: if status == button::Status::Hovered {
            palette.primary.base.color
        } else {
            palette.background.base.text
        },
        border: rounded(4.0),
        shadow: Shadow::default(),
    }
}

/// A demo card in the gallery grid.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: rounded(12.0),
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.3),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
    }
}

/// Dark frame behind thumbnails and the video panel.
pub fn media_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.07, 0.07, 0.09))),
        text_color: Some(Color::WHITE),
        border: rounded(8.0),
        ..container::Style::default()
    }
}

/// Round play control laid over a thumbnail.
pub fn play(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = if status == button::Status::Hovered {
        0.5
    } else {
        0.3
    };

    button::Style {
        background: Some(Background::Color(with_alpha(Color::WHITE, alpha))),
        text_color: Color::WHITE,
        border: rounded(32.0),
        shadow: Shadow::default(),
    }
}

/// Modal backdrop, fading with the open/close animation.
pub fn backdrop(progress: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(with_alpha(
            Color::BLACK,
            0.6 * ease_out(progress),
        ))),
        ..container::Style::default()
    }
}

/// The modal's content panel: compact themed card for audio, wide black
/// panel for video.
pub fn modal_panel(variant: MediaKind) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let palette = theme.extended_palette();
        let (background, text_color) = match variant {
            MediaKind::Audio => (palette.background.base.color, palette.background.base.text),
            MediaKind::Video => (Color::BLACK, Color::WHITE),
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text_color),
            border: rounded(12.0),
            shadow: Shadow {
                color: with_alpha(Color::BLACK, 0.5),
                offset: Vector::new(0.0, 8.0),
                blur_radius: 24.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_is_clamped() {
        assert_eq!(ease_out(-1.0), 0.0);
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert!(ease_out(0.5) > 0.5); // ease-out front-loads the motion
    }

    #[test]
    fn test_fade_alpha_spans_dim_to_full() {
        assert!((fade_alpha(0.0) - 0.25).abs() < f32::EPSILON);
        assert!((fade_alpha(1.0) - 1.0).abs() < f32::EPSILON);
    }
}
