//! The nav bar: brand name, section links, and the highlighted
//! call-to-action, all from `common.json`.

use iced::widget::{button, container, horizontal_space, row, text, Row};
use iced::{Alignment, Element, Length};

use crate::content::model::CommonDoc;
use crate::state::reveal::NAV_HEIGHT;
use crate::ui::style;
use crate::Message;

pub fn view(common: Option<&CommonDoc>) -> Element<'_, Message> {
    let brand = common.map(|c| c.name.as_str()).unwrap_or("");

    let mut bar: Row<Message> = row![text(brand).size(20), horizontal_space()]
        .spacing(24.0)
        .align_y(Alignment::Center);

    if let Some(common) = common {
        for link in &common.nav {
            bar = bar.push(
                button(text(link.label.as_str()).size(14))
                    .style(style::ghost)
                    .padding([8.0, 12.0])
                    .on_press(Message::LinkActivated(link.href.clone())),
            );
        }

        if !common.cta.label.is_empty() {
            bar = bar.push(
                button(text(common.cta.label.as_str()).size(14))
                    .style(style::cta)
                    .padding([8.0, 18.0])
                    .on_press(Message::LinkActivated(common.cta.href.clone())),
            );
        }
    }

    container(bar)
        .width(Length::Fill)
        .center_y(NAV_HEIGHT)
        .padding([0.0, 32.0])
        .style(style::nav)
        .into()
}
