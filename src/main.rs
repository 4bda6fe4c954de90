use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

mod api;
mod state;
mod ui;

use api::{ApiError, Prediction};
use state::detector::Detector;
use state::section::Section;
use state::selection::SelectedImage;

/// Image file extensions offered by the picker dialog
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "bmp", "gif"];

/// Main application state
struct DetectorApp {
    /// The client-side workspace: selection, analysis machine, navigation
    detector: Detector,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the image upload area
    PickImage,
    /// Background load of the picked file completed
    ImagePicked(Result<SelectedImage, String>),
    /// User clicked "Analyze Image"
    Analyze,
    /// The prediction request resolved; the token identifies which one
    AnalysisFinished {
        token: u64,
        outcome: Result<Prediction, ApiError>,
    },
    /// User clicked "Analyze Another Image"
    Reset,
    /// User clicked a navbar link
    Navigate(Section),
}

impl DetectorApp {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🕵️  Deepfake Detector client started (service at {})", api::api_base());

        (
            DetectorApp {
                detector: Detector::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Select an Image to Analyze")
                    .add_filter("Images", &IMAGE_EXTENSIONS)
                    .pick_file();

                // A cancelled dialog is a no-op, not an error
                if let Some(path) = picked {
                    return Task::perform(load_image(path), Message::ImagePicked);
                }

                Task::none()
            }
            Message::ImagePicked(Ok(image)) => {
                let (width, height) = image.dimensions();
                println!(
                    "🖼️  Selected {} ({}x{}, {} bytes, {})",
                    image.name(),
                    width,
                    height,
                    image.bytes().len(),
                    image.mime()
                );

                self.detector.pick(image);
                Task::none()
            }
            Message::ImagePicked(Err(reason)) => {
                eprintln!("⚠️  Could not load the selected file: {}", reason);
                self.detector.pick_failed(reason);
                Task::none()
            }
            Message::Analyze => {
                // The detector only hands back a request when one may
                // actually start: never with an empty selection, never
                // while another request is in flight.
                if let Some(request) = self.detector.submit() {
                    println!(
                        "🚀 Uploading {} for analysis (request #{})",
                        request.image.name(),
                        request.token
                    );

                    let token = request.token;
                    return Task::perform(
                        api::predict(api::api_base(), request.image),
                        move |outcome| Message::AnalysisFinished { token, outcome },
                    );
                }

                Task::none()
            }
            Message::AnalysisFinished { token, outcome } => {
                if self.detector.finish_analysis(token, outcome) {
                    match (self.detector.result(), self.detector.error()) {
                        (Some(prediction), _) => println!(
                            "✅ Verdict for request #{}: {} ({}% confidence)",
                            token,
                            prediction.verdict(),
                            prediction.confidence_percent()
                        ),
                        (_, Some(error)) => {
                            eprintln!("❌ Request #{} failed: {}", token, error)
                        }
                        (None, None) => {}
                    }
                } else {
                    // The user reset or navigated away while this request
                    // was outstanding
                    println!("🗑️  Discarded stale response for request #{}", token);
                }

                Task::none()
            }
            Message::Reset => {
                self.detector.reset();
                Task::none()
            }
            Message::Navigate(section) => {
                self.detector.navigate(section);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let body = match self.detector.section() {
            Section::Home => ui::detector::home(&self.detector),
            Section::About => ui::info::about(),
            Section::Technology => ui::info::technology(),
        };

        column![
            ui::navbar::navbar(self.detector.section()),
            scrollable(
                container(body)
                    .width(Length::Fill)
                    .center_x(Length::Fill)
                    .padding(30)
            )
            .height(Length::Fill),
            ui::footer::footer(),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Deepfake Detector", DetectorApp::update, DetectorApp::view)
        .theme(DetectorApp::theme)
        .centered()
        .run_with(DetectorApp::new)
}

/// Read and decode a picked file off the UI thread.
///
/// The dialog's extension filter is advisory, so the bytes are decoded
/// once here to make sure the service gets a real image; the dimensions
/// feed the preview caption.
async fn load_image(path: PathBuf) -> Result<SelectedImage, String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    let mime = mime_guess::from_path(&path).first_or_octet_stream().to_string();

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    // Spawn blocking because decoding is CPU-intensive
    let (bytes, width, height) = tokio::task::spawn_blocking(move || {
        image::load_from_memory(&bytes)
            .map(|decoded| {
                let (width, height) = (decoded.width(), decoded.height());
                (bytes, width, height)
            })
            .map_err(|e| format!("Not a supported image: {}", e))
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))??;

    Ok(SelectedImage::new(name, mime, bytes, width, height))
}
