use thiserror::Error;

/// Startup problems the game cannot recover from
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("create render surface: {0}")]
    Surface(#[from] pixels::Error),
}
