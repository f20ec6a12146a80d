//! The about section: portrait, description, and the feature list.

use iced::widget::{column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::content::model::AboutDoc;
use crate::state::reveal::Section;
use crate::ui::{section_placeholder, section_shell, style};
use crate::Message;

const PORTRAIT_SIZE: f32 = 300.0;

pub fn view<'a>(
    doc: Option<&'a AboutDoc>,
    portrait: Option<&'a image::Handle>,
    progress: f32,
) -> Element<'a, Message> {
    let Some(doc) = doc else {
        return section_placeholder(progress, Section::About);
    };

    let portrait: Element<Message> = match portrait {
        Some(handle) => image(handle.clone())
            .width(PORTRAIT_SIZE)
            .height(PORTRAIT_SIZE)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text(""))
            .center_x(PORTRAIT_SIZE)
            .center_y(PORTRAIT_SIZE)
            .style(style::media_frame)
            .into(),
    };

    let mut features = column![].spacing(12.0);
    for feature in &doc.features {
        features = features.push(
            row![
                text(feature_glyph(&feature.icon)).size(18),
                text(feature.text.as_str()).size(15),
            ]
            .spacing(12.0)
            .align_y(Alignment::Center),
        );
    }

    let copy = column![
        text(doc.title.as_str()).size(32),
        text(doc.description.as_str()).size(16),
        features,
    ]
    .spacing(20.0)
    .width(Length::FillPortion(3));

    let body = row![
        container(portrait).center_x(Length::FillPortion(2)),
        copy,
    ]
    .spacing(32.0)
    .align_y(Alignment::Center);

    section_shell(Section::About, progress, body.into())
}

/// The documents name icons symbolically (`music_note`, `mic`, ...);
/// map the known names to glyphs and fall back to a plain bullet.
fn feature_glyph(icon: &str) -> &'static str {
    match icon {
        "music_note" => "♪",
        "mic" | "mic_external_on" => "🎙",
        "graphic_eq" | "equalizer" => "〜",
        "headphones" => "🎧",
        "movie" | "videocam" => "🎬",
        "piano" => "🎹",
        "star" => "★",
        _ => "◆",
    }
}
