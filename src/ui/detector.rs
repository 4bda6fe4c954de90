/// Home section: the upload card, the in-flight indicator, and the result
/// card. Reads the detector's render state and emits the analysis events;
/// all transitions happen in the update loop, never here.

use iced::widget::{button, column, container, image, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::analysis::RequestPhase;
use crate::state::detector::Detector;
use crate::Message;

pub fn home(detector: &Detector) -> Element<'_, Message> {
    let mut content: Column<Message> = column![text("Deepfake Image Detector").size(40)]
        .spacing(24)
        .align_x(Alignment::Center);

    content = match detector.result() {
        Some(prediction) => content.push(result_card(prediction)),
        None => content.push(upload_card(detector)),
    };

    if detector.phase() == RequestPhase::Submitting {
        content = content.push(text("Analyzing image...").size(16));
    }

    content = content.push(how_it_works());

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn upload_card(detector: &Detector) -> Element<'_, Message> {
    let mut card: Column<Message> = column![].spacing(16).align_x(Alignment::Center);

    match detector.preview() {
        Some(preview) => {
            // Clicking the preview picks a different image, like the
            // upload label it replaces
            card = card.push(
                button(image(preview.raster()).width(Length::Fixed(320.0)))
                    .style(button::text)
                    .padding(0)
                    .on_press_maybe(repick(detector.phase())),
            );
            if let Some(selected) = detector.image() {
                let (width, height) = selected.dimensions();
                card = card.push(
                    text(format!("{} ({}x{})", selected.name(), width, height)).size(14),
                );
            }
        }
        None => {
            card = card.push(
                button(text("Click to select an image"))
                    .style(button::secondary)
                    .padding(24)
                    .on_press(Message::PickImage),
            );
        }
    }

    if detector.image().is_some() {
        let submitting = detector.phase() == RequestPhase::Submitting;
        let label = if submitting { "Analyzing..." } else { "Analyze Image" };
        card = card.push(
            button(text(label))
                .padding(10)
                .on_press_maybe((!submitting).then_some(Message::Analyze)),
        );
    }

    if let Some(error) = detector.error() {
        card = card.push(text(error.to_string()).size(16).style(text::danger));
    }

    card.into()
}

fn result_card(prediction: &crate::api::Prediction) -> Element<'static, Message> {
    let verdict_style: fn(&iced::Theme) -> text::Style = if prediction.is_fake {
        text::danger
    } else {
        text::success
    };

    column![
        text("Analysis Result").size(28),
        text(prediction.verdict()).size(32).style(verdict_style),
        text(format!("Confidence: {}%", prediction.confidence_percent())).size(20),
        button(text("Analyze Another Image"))
            .padding(10)
            .on_press(Message::Reset),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

/// Re-picking stays available right up until a request is in flight.
fn repick(phase: RequestPhase) -> Option<Message> {
    (phase != RequestPhase::Submitting).then_some(Message::PickImage)
}

fn how_it_works() -> Element<'static, Message> {
    column![
        text("How It Works").size(24),
        text(
            "This tool leverages a deep learning model (EfficientNet-B4) trained on a \
             large dataset of real and synthetically generated images. When you upload \
             an image, it is analyzed for subtle artifacts and inconsistencies that are \
             often invisible to the human eye but are tell-tale signs of digital \
             manipulation. The service returns a confidence score indicating the \
             likelihood of the image being a deepfake."
        )
        .size(16),
    ]
    .spacing(12)
    .max_width(720)
    .into()
}
