//! The hero banner: headline, subtitle, two call-to-action buttons, and
//! the profile portrait.

use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::content::model::HeroDoc;
use crate::state::reveal::Section;
use crate::ui::{section_placeholder, section_shell, style};
use crate::Message;

const PORTRAIT_SIZE: f32 = 320.0;

pub fn view<'a>(
    doc: Option<&'a HeroDoc>,
    portrait: Option<&'a image::Handle>,
    progress: f32,
) -> Element<'a, Message> {
    let Some(doc) = doc else {
        return section_placeholder(progress, Section::Hero);
    };

    let mut ctas = row![].spacing(16.0);
    for (link, styling) in [(&doc.primary_cta, true), (&doc.secondary_cta, false)] {
        if link.label.is_empty() {
            continue;
        }
        let cta = button(text(link.label.as_str()).size(16))
            .padding([12.0, 24.0])
            .on_press(Message::LinkActivated(link.href.clone()));
        ctas = ctas.push(if styling {
            cta.style(style::cta)
        } else {
            cta.style(style::ghost)
        });
    }

    let copy = column![
        text(doc.title.as_str()).size(44),
        text(doc.subtitle.as_str()).size(18),
        ctas,
    ]
    .spacing(24.0)
    .width(Length::FillPortion(3));

    let portrait: Element<Message> = match portrait {
        Some(handle) => image(handle.clone())
            .width(PORTRAIT_SIZE)
            .height(PORTRAIT_SIZE)
            .content_fit(ContentFit::Cover)
            .into(),
        // Placeholder frame until the artwork arrives, with the alt
        // text standing in for the portrait
        None => container(text(doc.profile_alt.as_str()).size(14))
            .center_x(PORTRAIT_SIZE)
            .center_y(PORTRAIT_SIZE)
            .style(style::media_frame)
            .into(),
    };

    let banner = row![
        copy,
        container(portrait).center_x(Length::FillPortion(2))
    ]
    .spacing(32.0)
    .align_y(Alignment::Center);

    section_shell(Section::Hero, progress, banner.into())
}
