// The boundary between the frame loop and whatever owns the window.
// The loop only ever talks to this trait; `window.rs` implements it over minifb.

use crate::error::Error;
use crate::types::InputEvent;
use std::ptr::NonNull;

/// Raw texture memory handed out by [`Backend::lock`].
#[derive(Clone, Copy, Debug)]
pub struct RawRegion {
    pub data: NonNull<u8>,
    /// Distance in bytes between the starts of consecutive rows.
    pub pitch_bytes: usize,
    /// Total number of addressable bytes starting at `data`.
    pub len_bytes: usize,
}

/// A window with one streaming texture and an event queue.
///
/// # Safety
///
/// A `RawRegion` returned by `lock` must point at `len_bytes` writable bytes that
/// stay valid, and that the implementor does not read or write, until the matching
/// `unlock` call.
pub unsafe trait Backend {
    /// Texture size in pixels as (width, height).
    fn size(&self) -> (usize, usize);

    /// Lock the whole texture for writing.
    fn lock(&mut self) -> Result<RawRegion, Error>;

    /// End the bracket opened by `lock`.
    fn unlock(&mut self);

    /// Next queued event, without blocking.
    fn poll_event(&mut self) -> Option<InputEvent>;

    fn clear(&mut self) -> Result<(), Error>;

    /// Copy the texture onto the presentation target.
    fn copy(&mut self) -> Result<(), Error>;

    /// Show the frame. May block until the next refresh interval.
    fn present(&mut self) -> Result<(), Error>;
}
