//! The demo gallery section: header, category chip strip, and the
//! filtered item grid. Rendering is a pure function of the gallery state;
//! selecting a chip re-derives the whole strip and grid on the next view
//! pass — full replacement, no diffing. The lists are small enough that
//! nothing needs preserving across filters.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, stack, text};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::content::model::{DemoItem, DemosDoc};
use crate::state::gallery::GalleryState;
use crate::state::reveal::Section;
use crate::ui::{section_placeholder, section_shell, style};
use crate::Message;

const CARD_WIDTH: f32 = 320.0;
const THUMB_HEIGHT: f32 = 170.0;

pub fn view<'a>(
    doc: Option<&'a DemosDoc>,
    gallery: Option<&'a GalleryState>,
    thumbnails: &'a HashMap<usize, image::Handle>,
    progress: f32,
) -> Element<'a, Message> {
    let (Some(doc), Some(gallery)) = (doc, gallery) else {
        return section_placeholder(progress, Section::Demos);
    };

    let chips = gallery.chips().into_iter().map(|chip| {
        let label = chip.label.clone();
        button(text(chip.label).size(14))
            .style(style::chip(chip.selected))
            .padding([8.0, 16.0])
            .on_press(Message::CategorySelected(label))
            .into()
    });

    let cards = gallery
        .visible_items()
        .into_iter()
        .map(|(index, item)| card(index, item, thumbnails.get(&index)));

    let body = column![
        text(doc.title.as_str()).size(32),
        text(doc.description.as_str()).size(16),
        Wrap::with_elements(chips.collect()).spacing(8.0).line_spacing(8.0),
        Wrap::with_elements(cards.collect()).spacing(20.0).line_spacing(20.0),
    ]
    .spacing(24.0)
    .width(Length::Fill);

    section_shell(Section::Demos, progress, body.into())
}

/// One demo card: thumbnail with an overlaid play control, then title and
/// description. The play control is disabled when the item has no embed
/// URL.
fn card<'a>(
    index: usize,
    item: &'a DemoItem,
    thumbnail: Option<&'a image::Handle>,
) -> Element<'a, Message> {
    let artwork: Element<Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(THUMB_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text(""))
            .width(Length::Fill)
            .height(THUMB_HEIGHT)
            .style(style::media_frame)
            .into(),
    };

    let mut play = button(text("▶").size(26))
        .style(style::play)
        .padding([12.0, 18.0]);
    if !item.embed_url.is_empty() {
        play = play.on_press(Message::PlayDemo(index));
    }

    let media = stack![
        artwork,
        container(play)
            .center_x(Length::Fill)
            .center_y(THUMB_HEIGHT)
    ];

    let content = column![
        media,
        text(item.title.as_str()).size(18),
        text(item.description.as_str()).size(14),
    ]
    .spacing(8.0)
    .padding(16.0);

    container(content)
        .width(CARD_WIDTH)
        .style(style::card)
        .into()
}
