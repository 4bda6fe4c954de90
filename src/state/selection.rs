/// Selection & preview management
///
/// Owns the image the user picked and the ephemeral preview derived from it.
/// The preview is a scoped resource: exactly one live handle per selected
/// image, released when the image is replaced or cleared. No network or
/// validation logic lives here.

use std::sync::Arc;

use iced::widget::image::Handle;

/// A user-picked image waiting to be analyzed.
///
/// The raw bytes are shared behind an `Arc` so cloning the selection for a
/// background upload does not copy the whole file.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    name: String,
    mime: String,
    bytes: Arc<Vec<u8>>,
    width: u32,
    height: u32,
}

impl SelectedImage {
    pub fn new(name: String, mime: String, bytes: Vec<u8>, width: u32, height: u32) -> Self {
        SelectedImage {
            name,
            mime,
            bytes: Arc::new(bytes),
            width,
            height,
        }
    }

    /// Original filename, e.g. "selfie.png"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type guessed from the file extension
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// The file contents
    pub fn bytes(&self) -> &Arc<Vec<u8>> {
        &self.bytes
    }

    /// Pixel dimensions reported by the decoder
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Ephemeral preview resource derived from a [`SelectedImage`].
///
/// Holds both the raster handle the view renders and a reference to the
/// source buffer, so the underlying bytes stay alive exactly as long as the
/// preview does. Dropping the handle releases the resource; there is no
/// separate revoke step to forget.
#[derive(Debug)]
pub struct PreviewHandle {
    raster: Handle,
    source: Arc<Vec<u8>>,
}

impl PreviewHandle {
    fn derive(image: &SelectedImage) -> Self {
        PreviewHandle {
            raster: Handle::from_bytes(image.bytes.as_ref().clone()),
            source: Arc::clone(&image.bytes),
        }
    }

    /// Handle for the iced image widget
    pub fn raster(&self) -> Handle {
        self.raster.clone()
    }

    /// True if this preview was derived from `image`'s buffer
    pub fn is_for(&self, image: &SelectedImage) -> bool {
        Arc::ptr_eq(&self.source, &image.bytes)
    }
}

/// The selection manager: at most one selected image, at most one live
/// preview, and the preview exists iff the image does.
#[derive(Debug, Default)]
pub struct Selection {
    image: Option<SelectedImage>,
    preview: Option<PreviewHandle>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected image, releasing the previous preview before
    /// the new one is derived.
    pub fn select(&mut self, image: SelectedImage) {
        self.preview = None;
        self.preview = Some(PreviewHandle::derive(&image));
        self.image = Some(image);
    }

    /// Drop the selected image and its preview.
    pub fn clear(&mut self) {
        self.preview = None;
        self.image = None;
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none()
    }
}
