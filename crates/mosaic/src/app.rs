//! Host event loop
//!
//! Reads one command per line and applies it to the gallery before looking
//! at the next, so state changes land in input order.

use mosaic_config::GalleryConfig;
use mosaic_state::{GalleryController, GalleryError, ResizeHub};
use mosaic_types::GalleryItem;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::message::Message;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Gallery(#[from] GalleryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render frame: {0}")]
    Render(#[from] serde_json::Error),
}

pub struct App {
    hub: ResizeHub,
    gallery: GalleryController,
}

impl App {
    pub fn new(
        items: Vec<GalleryItem>,
        initial_width: u32,
        config: GalleryConfig,
    ) -> Result<Self, AppError> {
        let hub = ResizeHub::new();
        let gallery = GalleryController::mount(items, initial_width, config, &hub)?;
        Ok(Self { hub, gallery })
    }

    pub fn gallery(&self) -> &GalleryController {
        &self.gallery
    }

    /// Applies a message. Returns false once the loop should stop.
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::Gallery(message) => {
                self.gallery.update(message);
            }
            Message::WindowResized { width } => {
                self.hub.notify(width);
                if let Some(columns) = self.gallery.pump_resize() {
                    debug!(columns, "Relayout");
                }
            }
            Message::Show => {}
            Message::Quit => {
                self.gallery.unmount();
                return false;
            }
        }
        true
    }

    pub fn render(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(&self.gallery.frame())?)
    }

    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.write_frame(&mut output).await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let message = match line.parse::<Message>() {
                Ok(message) => message,
                Err(err) => {
                    warn!("Skipping command: {err}");
                    continue;
                }
            };

            if !self.update(message) {
                break;
            }

            if message.renders() {
                self.write_frame(&mut output).await?;
            }
        }

        self.gallery.unmount();
        info!("Input closed");
        Ok(())
    }

    async fn write_frame<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<(), AppError> {
        let mut frame = self.render()?;
        frame.push('\n');
        output.write_all(frame.as_bytes()).await?;
        output.flush().await?;
        Ok(())
    }
}
