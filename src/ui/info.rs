/// Static informational sections (About, Technology). Pure copy; the only
/// interaction is through the navbar.

use iced::widget::{column, text, Column};
use iced::Element;

use crate::Message;

pub fn about() -> Element<'static, Message> {
    column![
        text("About Deepfake Detector").size(36),
        text(
            "The Deepfake Detector is an AI-powered tool designed to identify \
             synthetic or manipulated images with high accuracy. In an era of \
             sophisticated digital manipulation, it serves as a resource for \
             detecting deepfakes and ensuring the authenticity of visual content."
        )
        .size(16),
        text("Why It Matters").size(24),
        text(
            "Deepfakes pose significant challenges to media authenticity, security, \
             and trust. The detector helps individuals, organizations, and platforms \
             identify compromised images before they spread misinformation."
        )
        .size(16),
    ]
    .spacing(16)
    .max_width(720)
    .into()
}

pub fn technology() -> Element<'static, Message> {
    let entry = |name: &'static str, blurb: &'static str| -> Column<'static, Message> {
        column![text(name).size(20), text(blurb).size(16)].spacing(4)
    };

    column![
        text("Technology Stack").size(36),
        text(
            "Dataset note: the model was trained on a curated dataset of authentic \
             and synthetic images. While limited in scope, it provides a solid \
             foundation for deepfake detection; production use would benefit from \
             larger, more diverse training data."
        )
        .size(16),
        entry(
            "EfficientNet-B4",
            "Convolutional neural network architecture optimized for both accuracy \
             and computational efficiency, fine-tuned on authentic and synthetic \
             images.",
        ),
        entry(
            "PyTorch",
            "Deep learning framework used for model training and inference, with \
             GPU acceleration for production deployment.",
        ),
        entry(
            "FastAPI + Uvicorn",
            "The prediction service: a Python web framework and ASGI server exposing \
             the model behind a REST endpoint with JSON responses.",
        ),
        entry(
            "Rust + iced",
            "This client: a native, cross-platform desktop application built on the \
             iced GUI toolkit with async uploads over HTTP.",
        ),
    ]
    .spacing(16)
    .max_width(720)
    .into()
}
