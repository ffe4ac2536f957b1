// Bounded access to locked texture memory.
// A view only exists between lock and unlock: it borrows the `LockedTexture`
// guard, and the guard unlocks when released or dropped.

use crate::backend::{Backend, RawRegion};
use crate::error::Error;
use crate::types::Pixel;

/// A width x height window into a pixel slice whose rows are `pitch` pixels apart.
pub struct PixelBufferView<'a> {
    pixels: &'a mut [Pixel],
    width: usize,
    height: usize,
    pitch: usize,
}

impl<'a> PixelBufferView<'a> {
    /// Wrap `pixels`, checking that every (x, y) inside width x height lands in bounds.
    pub fn new(
        pixels: &'a mut [Pixel],
        width: usize,
        height: usize,
        pitch: usize,
    ) -> Result<Self, Error> {
        let needed = match height {
            0 => Some(0),
            h => (h - 1).checked_mul(pitch).and_then(|n| n.checked_add(width)),
        };
        let fits = needed.is_some_and(|n| n <= pixels.len());
        if pitch < width || !fits {
            return Err(Error::Geometry {
                width,
                height,
                pitch,
                len: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            pitch,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row stride in pixels.
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.pitch + x).copied()
    }

    /// Returns false (and writes nothing) when (x, y) is outside the view.
    #[cfg(test)]
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        match self.pixels.get_mut(y * self.pitch + x) {
            Some(p) => {
                *p = pixel;
                true
            }
            None => false,
        }
    }

    /// The visible part of row `y` (padding excluded).
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [Pixel]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.pitch;
        self.pixels.get_mut(start..start + self.width)
    }
}

/// Lock guard for a backend texture. Unlocks on `release` or drop.
pub struct LockedTexture<'a, B: Backend + ?Sized> {
    backend: &'a mut B,
    region: RawRegion,
    width: usize,
    height: usize,
    pitch: usize,
}

/// Lock the backend's texture and validate the region for a width x height surface.
///
/// The backend reports pitch in bytes; it is converted to pixels here.
pub fn acquire<B: Backend + ?Sized>(
    backend: &mut B,
    width: usize,
    height: usize,
) -> Result<LockedTexture<'_, B>, Error> {
    let region = backend.lock()?;
    log::trace!(
        "locked texture: {} bytes, pitch {} bytes",
        region.len_bytes,
        region.pitch_bytes
    );

    // From here on, dropping the guard on an early return unlocks the texture.
    let mut guard = LockedTexture {
        backend,
        region,
        width,
        height,
        pitch: 0,
    };

    let px = size_of::<Pixel>();
    if region.pitch_bytes % px != 0 {
        return Err(Error::Lock(format!(
            "pitch of {} bytes is not a whole number of pixels",
            region.pitch_bytes
        )));
    }
    if region.data.as_ptr().align_offset(align_of::<Pixel>()) != 0 {
        return Err(Error::Lock("texture memory is not pixel aligned".into()));
    }
    guard.pitch = region.pitch_bytes / px;

    // Run the bounds check once up front so `view` cannot fail.
    guard.try_view()?;
    Ok(guard)
}

impl<B: Backend + ?Sized> LockedTexture<'_, B> {
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// The whole locked region as pixels, padding included.
    fn raw_pixels(&mut self) -> &mut [Pixel] {
        let len = self.region.len_bytes / size_of::<Pixel>();
        // SAFETY: `Backend::lock` guarantees `len_bytes` writable bytes at `data`,
        // untouched by the backend until `unlock`, which only runs once this guard
        // goes away. Alignment was checked in `acquire`, and the slice borrows
        // `self` mutably so no second slice can coexist with it.
        unsafe { std::slice::from_raw_parts_mut(self.region.data.as_ptr().cast::<Pixel>(), len) }
    }

    fn try_view(&mut self) -> Result<PixelBufferView<'_>, Error> {
        let (width, height, pitch) = (self.width, self.height, self.pitch);
        PixelBufferView::new(self.raw_pixels(), width, height, pitch)
    }

    /// The locked pixels. Valid until this guard is released.
    pub fn view(&mut self) -> PixelBufferView<'_> {
        let (width, height, pitch) = (self.width, self.height, self.pitch);
        // `acquire` already checked the geometry.
        PixelBufferView {
            pixels: self.raw_pixels(),
            width,
            height,
            pitch,
        }
    }

    /// Unlock the texture.
    pub fn release(self) {
        drop(self);
    }
}

impl<B: Backend + ?Sized> Drop for LockedTexture<'_, B> {
    fn drop(&mut self) {
        self.backend.unlock();
        log::trace!("unlocked texture");
    }
}
