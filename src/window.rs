// minifb-backed window with a streaming texture.
// Visual expectation: a fixed-size window opens; whatever the frame loop writes
// into the texture shows up after the next present.

use crate::backend::{Backend, RawRegion};
use crate::config::Config;
use crate::error::Error;
use crate::types::{InputEvent, Pixel};
use minifb::{MouseMode, Window, WindowOptions};
use std::collections::VecDeque;
use std::ptr::NonNull;

/// Texture rows start on this byte boundary, so pitch is usually wider than the window.
const ROW_ALIGN_BYTES: usize = 64;

pub struct MinifbBackend {
    window: Window, // the on-screen window you see
    width: usize,
    height: usize,
    // Streaming texture, `pitch` pixels per row.
    texture: Vec<Pixel>,
    pitch: usize,
    // Presentation target: exactly width * height, what minifb displays.
    screen: Vec<Pixel>,
    locked: bool,
    pending: VecDeque<InputEvent>,
    last_mouse: Option<(i32, i32)>,
}

impl MinifbBackend {
    /// Open the window, cap its refresh rate and allocate the texture.
    pub fn new(config: &Config) -> Result<Self, Error> {
        // 1) Window
        let mut window = Window::new(
            config.title,
            config.width,
            config.height,
            WindowOptions::default(),
        )
        .map_err(|e| Error::WindowInit(e.to_string()))?;

        // 2) "Renderer": minifb presents from a plain buffer; cap the rate so
        //    present paces the loop like vsync would.
        if config.target_fps == 0 {
            return Err(Error::RendererInit("target fps must be positive".into()));
        }
        window.set_target_fps(config.target_fps);

        // 3) Texture sized to what the window actually got.
        let (width, height) = window.get_size();
        let pitch = padded_pitch(width)
            .ok_or_else(|| Error::TextureInit(format!("row of {width} pixels is too wide")))?;
        let len = pitch
            .checked_mul(height)
            .ok_or_else(|| Error::TextureInit(format!("{width}x{height} is too large")))?;
        let screen_len = width * height;

        log::info!(
            "opened \"{}\" at {}x{} (texture pitch {} pixels)",
            config.title,
            width,
            height,
            pitch
        );

        let mut backend = Self {
            window,
            width,
            height,
            texture: vec![Pixel::BLACK; len],
            pitch,
            screen: vec![Pixel::BLACK; screen_len],
            locked: false,
            pending: VecDeque::new(),
            last_mouse: None,
        };
        backend.window.update();
        backend.collect_events();
        Ok(backend)
    }

    /// Turn the window state minifb saw during its last update into events.
    fn collect_events(&mut self) {
        if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Pass) {
            let pos = (mx as i32, my as i32);
            if self.last_mouse != Some(pos) {
                self.last_mouse = Some(pos);
                self.pending
                    .push_back(InputEvent::PointerMotion { x: pos.0, y: pos.1 });
            }
        }
        for _ in self.window.get_keys_released() {
            self.pending.push_back(InputEvent::KeyUp);
        }
        if !self.window.is_open() {
            self.pending.push_back(InputEvent::Quit);
        }
    }
}

/// Row stride in pixels for a texture `width` pixels wide.
fn padded_pitch(width: usize) -> Option<usize> {
    let px = size_of::<Pixel>();
    let bytes = width.checked_mul(px)?.checked_next_multiple_of(ROW_ALIGN_BYTES)?;
    Some(bytes / px)
}

/// Copy the visible `width` pixels of each `pitch`-wide row of `src` into the
/// tightly packed rows of `dst`.
fn strip_padding(dst: &mut [Pixel], src: &[Pixel], width: usize, pitch: usize) {
    if width == 0 || pitch < width {
        return;
    }
    for (dst_row, src_row) in dst.chunks_exact_mut(width).zip(src.chunks(pitch)) {
        if let Some(visible) = src_row.get(..width) {
            dst_row.copy_from_slice(visible);
        }
    }
}

// SAFETY: `lock` hands out the texture's heap buffer. The texture is never
// resized, and `clear`/`copy` refuse to run while it is locked, so nothing else
// touches that memory until `unlock`.
unsafe impl Backend for MinifbBackend {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn lock(&mut self) -> Result<RawRegion, Error> {
        if self.locked {
            return Err(Error::Lock("texture is already locked".into()));
        }
        let data = NonNull::new(self.texture.as_mut_ptr().cast::<u8>())
            .ok_or_else(|| Error::Lock("texture has no memory".into()))?;
        self.locked = true;
        Ok(RawRegion {
            data,
            pitch_bytes: self.pitch * size_of::<Pixel>(),
            len_bytes: self.texture.len() * size_of::<Pixel>(),
        })
    }

    fn unlock(&mut self) {
        self.locked = false;
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    fn clear(&mut self) -> Result<(), Error> {
        if self.locked {
            return Err(Error::Clear("texture is still locked".into()));
        }
        self.screen.fill(Pixel::BLACK);
        Ok(())
    }

    fn copy(&mut self) -> Result<(), Error> {
        if self.locked {
            return Err(Error::Copy("texture is still locked".into()));
        }
        strip_padding(&mut self.screen, &self.texture, self.width, self.pitch);
        Ok(())
    }

    fn present(&mut self) -> Result<(), Error> {
        // minifb wants 0RGB u32s; the alpha byte is ignored.
        self.window
            .update_with_buffer(bytemuck::cast_slice(&self.screen), self.width, self.height)
            .map_err(|e| Error::Present(e.to_string()))?;
        self.collect_events();
        Ok(())
    }
}
