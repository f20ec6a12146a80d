/// UI module
///
/// One file per page section, each a pure function from loaded content
/// and widget state to an `Element`. Nothing in here mutates state; all
/// interaction flows back through `Message`.
pub mod about;
pub mod contact;
pub mod gallery;
pub mod hero;
pub mod modal;
pub mod nav;
pub mod style;

use iced::widget::{container, text};
use iced::{Element, Length};

use crate::state::reveal::Section;
use crate::Message;

/// Wrap a section's content in its identified, probe-able container with
/// the shared page gutter and the fade-in styling.
fn section_shell(
    section: Section,
    progress: f32,
    content: Element<'_, Message>,
) -> Element<'_, Message> {
    let centered = container(content).max_width(1080.0).width(Length::Fill);

    container(centered)
        .id(container::Id::new(section.id_str()))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([56.0, 32.0])
        .style(style::section(progress))
        .into()
}

/// Static fallback markup for a section whose document has not arrived
/// (or never will). The page never renders an error here.
fn section_placeholder(progress: f32, section: Section) -> Element<'static, Message> {
    let body = container(text("···").size(28))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(48.0);

    section_shell(section, progress, body.into())
}
