use iced::widget::{button, column, container, text, Column};
use iced::{Alignment, Element, Length, Size, Task, Theme};
use rfd::FileDialog;

mod array;
mod config;
mod logging;
mod render;
mod state;
mod ui;
mod viewer;

#[cfg(test)]
mod test_utils;

use config::ViewerConfig;
use ui::ArrayCanvas;
use viewer::{Viewer, IDLE_STATUS};

/// Main application state
struct NpyViewer {
    viewer: Viewer<ArrayCanvas>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Load Directory" button
    LoadDirectory,
    /// User clicked "Previous"
    Previous,
    /// User clicked "Next"
    Next,
}

impl NpyViewer {
    /// Create a new instance of the application
    fn new(config: ViewerConfig) -> (Self, Task<Message>) {
        let viewer = Viewer::new(config, ArrayCanvas::default());
        (NpyViewer { viewer }, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LoadDirectory => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Directory")
                    .pick_folder();

                self.viewer.select_directory(folder);
            }
            Message::Previous => self.viewer.show_previous(),
            Message::Next => self.viewer.show_next(),
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let controls: Column<Message> = column![
            button("Load Directory")
                .on_press(Message::LoadDirectory)
                .width(Length::Fill)
                .padding(10),
            button("Previous")
                .on_press(Message::Previous)
                .width(Length::Fill)
                .padding(10),
            button("Next")
                .on_press(Message::Next)
                .width(Length::Fill)
                .padding(10),
            text(self.viewer.status()).size(14),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let content = column![self.viewer.sink().view(IDLE_STATUS), controls]
            .spacing(12)
            .padding(12);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn title(&self) -> String {
        self.viewer.config().title.clone()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    if let Err(e) = logging::init() {
        eprintln!("⚠️  {}", e);
    }

    let config = ViewerConfig::default();
    let (width, height) = config.window_size;

    iced::application(NpyViewer::title, NpyViewer::update, NpyViewer::view)
        .theme(NpyViewer::theme)
        .window_size(Size::new(width, height))
        .centered()
        .run_with(move || NpyViewer::new(config))
}
