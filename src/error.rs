// Every failure in this program comes from the backend and is fatal.
// Each variant states *where* things went wrong.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Setting up presentation on the window failed
    #[error("Renderer init error: {0}")]
    RendererInit(String),

    /// Allocating the streaming texture failed
    #[error("Texture init error: {0}")]
    TextureInit(String),

    /// The texture could not be locked, or the locked region is unusable
    #[error("Texture lock error: {0}")]
    Lock(String),

    /// A pixel view is too small for the surface it claims to cover
    #[error("Pixel view of {len} pixels cannot hold {width}x{height} at pitch {pitch}")]
    Geometry {
        width: usize,
        height: usize,
        pitch: usize,
        len: usize,
    },

    /// Clearing the presentation target failed
    #[error("Renderer clear error: {0}")]
    Clear(String),

    /// Copying the texture onto the presentation target failed
    #[error("Renderer copy error: {0}")]
    Copy(String),

    /// Presenting the frame failed
    #[error("Present error: {0}")]
    Present(String),
}
