//! The modal overlay hosting the embedded player.
//!
//! Layered over the page with `stack`. The backdrop closes the modal on
//! click; the content panel swallows its own clicks so they cannot fall
//! through to the backdrop — the desktop version of "backdrop closes,
//! panel does not".

use iced::widget::{button, column, container, horizontal_space, mouse_area, row, text};
use iced::{Alignment, Element, Length};

use crate::content::model::MediaKind;
use crate::state::modal::{MediaPlayer, ModalState};
use crate::ui::style;
use crate::Message;

const AUDIO_WIDTH: f32 = 420.0;
const VIDEO_WIDTH: f32 = 960.0;
const VIDEO_HEIGHT: f32 = 480.0;

pub fn view(modal: &ModalState) -> Element<'_, Message> {
    let eased = style::ease_out(modal.progress());
    // Scale ramp from 95% to full size while opening
    let scale = 0.95 + 0.05 * eased;

    let close = button(text("✕").size(18))
        .style(style::ghost)
        .padding([4.0, 10.0])
        .on_press(Message::CloseModal);

    let body: Element<Message> = match (modal.variant(), modal.player()) {
        (MediaKind::Audio, Some(player)) => audio_panel(player),
        (MediaKind::Video, Some(player)) => video_panel(player, scale),
        // Content container already emptied mid-close
        _ => text("").into(),
    };

    let max_width = match modal.variant() {
        MediaKind::Audio => AUDIO_WIDTH,
        MediaKind::Video => VIDEO_WIDTH,
    } * scale;

    let panel = container(column![row![horizontal_space(), close], body].spacing(8.0))
        .max_width(max_width)
        .width(Length::Fill)
        .padding(16.0)
        .style(style::modal_panel(modal.variant()));

    // Swallow panel clicks so only true backdrop clicks close
    let panel = mouse_area(panel).on_press(Message::ModalPanelPressed);

    let backdrop = container(panel)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(32.0)
        .style(style::backdrop(modal.progress()));

    mouse_area(backdrop)
        .on_press(Message::BackdropPressed)
        .into()
}

/// Compact centered card for audio embeds.
fn audio_panel(player: &MediaPlayer) -> Element<'_, Message> {
    let source = player.source().unwrap_or("");

    column![
        text("Now playing").size(13),
        text(source).size(15),
        row![
            transport_toggle(player),
            text(format_position(player.position())).size(14),
        ]
        .spacing(16.0)
        .align_y(Alignment::Center),
    ]
    .spacing(12.0)
    .padding(8.0)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// Wide video-aspect panel for everything that is not audio.
fn video_panel(player: &MediaPlayer, scale: f32) -> Element<'_, Message> {
    let source = player.source().unwrap_or("");

    let stage = column![
        transport_toggle(player),
        text(source).size(14),
        text(format_position(player.position())).size(13),
    ]
    .spacing(12.0)
    .align_x(Alignment::Center);

    container(stage)
        .center_x(Length::Fill)
        .center_y(VIDEO_HEIGHT * scale)
        .style(style::media_frame)
        .into()
}

fn transport_toggle(player: &MediaPlayer) -> Element<'_, Message> {
    let glyph = if player.is_playing() { "⏸" } else { "▶" };

    button(text(glyph).size(24))
        .style(style::play)
        .padding([10.0, 16.0])
        .on_press(Message::TogglePlayback)
        .into()
}

/// `m:ss` transport position.
fn format_position(seconds: f32) -> String {
    let whole = seconds.max(0.0) as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(0.0), "0:00");
        assert_eq!(format_position(9.7), "0:09");
        assert_eq!(format_position(65.0), "1:05");
        assert_eq!(format_position(600.0), "10:00");
        assert_eq!(format_position(-3.0), "0:00");
    }
}
