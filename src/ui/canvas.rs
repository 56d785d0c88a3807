use std::fs;
use std::path::Path;

use iced::widget::image::{FilterMethod, Handle};
use iced::widget::{container, text, Image};
use iced::{ContentFit, Element, Length};

use crate::render::{DisplayError, RasterSink};
use crate::Message;

/// Image region of the main window.
///
/// Holds the decoded pixels of the last raster shown, so the temporary file
/// can go away as soon as `show` returns.
#[derive(Debug, Default)]
pub struct ArrayCanvas {
    handle: Option<Handle>,
}

impl ArrayCanvas {
    #[cfg(test)]
    pub fn has_image(&self) -> bool {
        self.handle.is_some()
    }

    pub fn view<'a>(&'a self, placeholder: &'a str) -> Element<'a, Message> {
        let content: Element<'a, Message> = match &self.handle {
            // Small arrays are blown up to the window; keep the cells crisp
            Some(handle) => Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .filter_method(FilterMethod::Nearest)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => text(placeholder).size(16).into(),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

impl RasterSink for ArrayCanvas {
    fn show(&mut self, raster: &Path) -> Result<(), DisplayError> {
        let bytes = fs::read(raster)?;
        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)?.into_rgba8();
        let (width, height) = decoded.dimensions();

        self.handle = Some(Handle::from_rgba(width, height, decoded.into_raw()));
        Ok(())
    }
}
