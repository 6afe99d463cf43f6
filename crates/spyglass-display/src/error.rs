//! Error types for the frame renderer.

use std::path::PathBuf;

/// Errors produced while rendering, presenting, or persisting a frame.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// The user asked to quit: window closed, escape pressed, or ctrl+C.
    ///
    /// This is fatal by design -- the hosting bot propagates it and exits.
    /// It is never retried or recovered.
    #[error("quit requested via display window")]
    Quit,

    /// A rendered frame could not be encoded or written to disk.
    ///
    /// The `stats` directory must exist before the first frame is saved;
    /// the renderer does not create it.
    #[error("failed to save frame to {path:?}")]
    Save {
        /// Destination the frame was being written to.
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The display window could not be created or updated.
    #[cfg(feature = "window")]
    #[error("display window error: {0}")]
    Window(String),
}
