/// Footer shown under every section.

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::Message;

pub fn footer() -> Element<'static, Message> {
    let lines = column![
        text("© 2025 Deepfake Detector. All Rights Reserved.").size(13),
        text("Powered by PyTorch, FastAPI, and Rust.").size(13),
    ]
    .spacing(2)
    .align_x(Alignment::Center);

    container(lines)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(12)
        .into()
}
