/// Top navigation bar: brand text plus one link per section, with the
/// active section highlighted. Only emits `Message::Navigate`.

use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::state::section::Section;
use crate::Message;

pub fn navbar(active: Section) -> Element<'static, Message> {
    let mut links = row![].spacing(8).align_y(Alignment::Center);

    for section in Section::ALL {
        let style: fn(&iced::Theme, button::Status) -> button::Style = if section == active {
            button::primary
        } else {
            button::text
        };

        links = links.push(
            button(text(section.label()))
                .style(style)
                .on_press(Message::Navigate(section)),
        );
    }

    let bar = row![
        text("Deepfake Detector").size(24),
        horizontal_space(),
        links,
    ]
    .align_y(Alignment::Center)
    .padding(12);

    container(bar).width(Length::Fill).into()
}
