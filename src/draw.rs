// Software compositing: repaint the whole locked texture with a cross-hair.
// What you see: a black window with one white row and one white column
// crossing at the pointer.

use crate::churn::AllocationPressure;
use crate::surface::PixelBufferView;
use crate::types::Pixel;

/// Clamp `x` into the half-open range `[a, b)`.
///
/// Values at or past `b` map to `b - 1`, the last valid index. An empty range
/// (`b <= a`) yields `a`.
#[inline]
pub fn clip(x: i32, a: i32, b: i32) -> i32 {
    if x < a || b <= a {
        return a;
    }
    if x >= b {
        return b - 1;
    }
    x
}

/// Paint every visible pixel: white on row `y0` and column `x0`, opaque black elsewhere.
///
/// `x0`/`y0` are clipped to the view first, so any pointer position is fine.
/// `churn` runs once per row and never touches the pixels.
pub fn draw_cross(
    view: &mut PixelBufferView<'_>,
    x0: i32,
    y0: i32,
    churn: &mut AllocationPressure,
) {
    let (width, height) = (view.width(), view.height());
    if width == 0 || height == 0 {
        return;
    }
    let x0 = clip(x0, 0, to_i32(width)) as usize;
    let y0 = clip(y0, 0, to_i32(height)) as usize;

    for y in 0..height {
        churn.generate();
        let Some(row) = view.row_mut(y) else {
            break;
        };
        if y == y0 {
            row.fill(Pixel::WHITE);
            continue;
        }
        row.fill(Pixel::BLACK);
        row[x0] = Pixel::WHITE;
    }
}

#[inline]
fn to_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn expected(x: usize, y: usize, x0: usize, y0: usize) -> Pixel {
        if x == x0 || y == y0 { Pixel::WHITE } else { Pixel::BLACK }
    }

    #[test]
    fn clip_maps_into_half_open_range() {
        assert_eq!(clip(-5, 0, 800), 0);
        assert_eq!(clip(0, 0, 800), 0);
        assert_eq!(clip(799, 0, 800), 799);
        assert_eq!(clip(800, 0, 800), 799);
        assert_eq!(clip(i32::MAX, 0, 800), 799);
        assert_eq!(clip(3, 0, 0), 0);
    }

    #[test]
    fn full_window_cross_at_center() {
        let (w, h) = (800, 600);
        let mut buf = vec![Pixel(0); w * h];
        let mut churn = AllocationPressure::new();
        let mut view = PixelBufferView::new(&mut buf, w, h, w).unwrap();
        draw_cross(&mut view, 400, 300, &mut churn);

        for y in 0..h {
            assert_eq!(view.get(400, y), Some(Pixel::WHITE));
        }
        for x in 0..w {
            assert_eq!(view.get(x, 300), Some(Pixel::WHITE));
        }
        let black = buf.iter().filter(|p| **p == Pixel::BLACK).count();
        assert_eq!(black, w * h - (w + h - 1));
        assert!(buf.iter().all(|p| *p == Pixel::BLACK || *p == Pixel::WHITE));
    }

    #[test]
    fn out_of_range_pointer_clips_to_edges() {
        let (w, h) = (16, 9);
        let mut buf = vec![Pixel(0); w * h];
        let mut churn = AllocationPressure::new();
        let mut view = PixelBufferView::new(&mut buf, w, h, w).unwrap();

        draw_cross(&mut view, -5, 100, &mut churn);
        assert_eq!(view.get(0, 0), Some(Pixel::WHITE));
        assert_eq!(view.get(1, 0), Some(Pixel::BLACK));
        assert_eq!(view.get(5, h - 1), Some(Pixel::WHITE));

        draw_cross(&mut view, w as i32, -1, &mut churn);
        assert_eq!(view.get(w - 1, 5), Some(Pixel::WHITE));
        assert_eq!(view.get(w - 2, 5), Some(Pixel::BLACK));
        assert_eq!(view.get(3, 0), Some(Pixel::WHITE));
    }

    #[test]
    fn padding_between_rows_is_left_alone() {
        let (w, h, pitch) = (5, 4, 8);
        let sentinel = Pixel(0xDEAD_BEEF);
        let mut buf = vec![sentinel; pitch * h];
        let mut churn = AllocationPressure::new();
        {
            let mut view = PixelBufferView::new(&mut buf, w, h, pitch).unwrap();
            draw_cross(&mut view, 2, 1, &mut churn);
        }
        for y in 0..h {
            for x in 0..pitch {
                let p = buf[y * pitch + x];
                if x < w {
                    assert_eq!(p, expected(x, y, 2, 1), "pixel ({x}, {y})");
                } else {
                    assert_eq!(p, sentinel, "padding ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn drawing_twice_gives_the_same_buffer() {
        let (w, h) = (31, 17);
        let mut buf = vec![Pixel(7); w * h];
        let mut churn = AllocationPressure::new();
        {
            let mut view = PixelBufferView::new(&mut buf, w, h, w).unwrap();
            draw_cross(&mut view, 11, 4, &mut churn);
        }
        let first = buf.clone();
        {
            let mut view = PixelBufferView::new(&mut buf, w, h, w).unwrap();
            draw_cross(&mut view, 11, 4, &mut churn);
        }
        assert_eq!(first, buf);
    }

    #[test]
    fn churn_runs_once_per_row_and_does_not_affect_pixels() {
        let (w, h) = (20, 12);
        let mut fresh = vec![Pixel(0); w * h];
        let mut busy = vec![Pixel(0); w * h];

        let mut churn = AllocationPressure::new();
        {
            let mut view = PixelBufferView::new(&mut fresh, w, h, w).unwrap();
            draw_cross(&mut view, 3, 8, &mut churn);
        }
        assert_eq!(churn.invocations(), h as u64);

        let mut worn = AllocationPressure::new();
        for _ in 0..50_000 {
            worn.generate();
        }
        {
            let mut view = PixelBufferView::new(&mut busy, w, h, w).unwrap();
            draw_cross(&mut view, 3, 8, &mut worn);
        }
        assert_eq!(fresh, busy);
    }

    #[test]
    fn empty_surface_draws_nothing() {
        let mut buf: Vec<Pixel> = Vec::new();
        let mut churn = AllocationPressure::new();
        let mut view = PixelBufferView::new(&mut buf, 0, 0, 0).unwrap();
        draw_cross(&mut view, 0, 0, &mut churn);
        assert_eq!(churn.invocations(), 0);
    }

    proptest! {
        #[test]
        fn prop_cross_lines_are_white_everything_else_black(
            w in 1usize..48,
            h in 1usize..48,
            pad in 0usize..5,
            fx in 0.0f64..1.0,
            fy in 0.0f64..1.0,
        ) {
            let x0 = ((w as f64) * fx) as usize;
            let y0 = ((h as f64) * fy) as usize;
            let pitch = w + pad;
            let mut buf = vec![Pixel(0); pitch * h];
            let mut churn = AllocationPressure::new();
            let mut view = PixelBufferView::new(&mut buf, w, h, pitch).unwrap();
            draw_cross(&mut view, x0 as i32, y0 as i32, &mut churn);

            for y in 0..h {
                for x in 0..w {
                    prop_assert_eq!(view.get(x, y), Some(expected(x, y, x0, y0)));
                }
            }
        }
    }
}
