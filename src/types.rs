// Core value types shared by the backend, the compositor and the frame loop.

use bytemuck::{Pod, Zeroable};

/// One 32-bit packed pixel in ARGB order (0xAARRGGBB).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Pixel(pub u32);

impl Pixel {
    pub const WHITE: Pixel = Pixel(0xFF_FF_FF_FF);
    pub const BLACK: Pixel = Pixel(0xFF_00_00_00);
}

/// Events the backend hands to the frame loop, one per `poll_event` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was closed.
    Quit,
    /// The pointer moved. Coordinates are window pixels and may lie outside the window.
    PointerMotion { x: i32, y: i32 },
    /// Any key came up.
    KeyUp,
}
