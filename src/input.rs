// Last known pointer position.
// Stored exactly as reported; the compositor clips it to the frame it draws.

use crate::types::InputEvent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub x: i32,
    pub y: i32,
}

impl InputState {
    /// Record pointer motion. Other events leave the state alone.
    pub fn update(&mut self, event: &InputEvent) {
        if let InputEvent::PointerMotion { x, y } = *event {
            self.x = x;
            self.y = y;
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
