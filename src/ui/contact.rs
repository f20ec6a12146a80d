//! The contact section: a short pitch plus the contact channels. A
//! windowed app has no location bar, so activating a channel copies its
//! target to the clipboard (see the link handling in `main.rs`).

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::content::model::ContactDoc;
use crate::state::reveal::Section;
use crate::ui::{section_placeholder, section_shell, style};
use crate::Message;

pub fn view(doc: Option<&ContactDoc>, progress: f32) -> Element<'_, Message> {
    let Some(doc) = doc else {
        return section_placeholder(progress, Section::Contact);
    };

    let mut channels = row![].spacing(16.0).align_y(Alignment::Center);
    for (label, target) in [
        (doc.email.as_str(), doc.email.as_str()),
        ("Zalo", doc.zalo.as_str()),
        ("Facebook", doc.facebook.as_str()),
    ] {
        if target.is_empty() {
            continue;
        }
        channels = channels.push(
            button(text(label).size(15))
                .style(style::cta)
                .padding([10.0, 20.0])
                .on_press(Message::LinkActivated(target.to_string())),
        );
    }

    let body = column![
        text(doc.title.as_str()).size(32),
        text(doc.description.as_str()).size(16),
        channels,
        text(doc.location.as_str()).size(14),
    ]
    .spacing(20.0)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let centered = container(body).width(Length::Fill).center_x(Length::Fill);

    section_shell(Section::Contact, progress, centered.into())
}
