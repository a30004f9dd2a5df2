//! Stack-based flood fill over premultiplied pixels.

use tiny_skia::PremultipliedColorU8;

fn within(a: PremultipliedColorU8, b: PremultipliedColorU8, tolerance: u8) -> bool {
    let close = |x: u8, y: u8| x.abs_diff(y) <= tolerance;
    close(a.red(), b.red())
        && close(a.green(), b.green())
        && close(a.blue(), b.blue())
        && close(a.alpha(), b.alpha())
}

/// Replace the 4-connected region around `(x, y)` whose pixels are within
/// `tolerance` of the seed color. Returns how many pixels changed.
pub fn flood_fill(
    pixels: &mut [PremultipliedColorU8],
    width: u32,
    height: u32,
    (x, y): (u32, u32),
    fill: PremultipliedColorU8,
    tolerance: u8,
) -> usize {
    if x >= width || y >= height {
        return 0;
    }
    let (w, h) = (width as usize, height as usize);
    if pixels.len() < w * h {
        return 0;
    }

    let target = pixels[y as usize * w + x as usize];
    if target == fill {
        return 0;
    }

    let mut visited = vec![false; w * h];
    let mut stack = vec![(x as usize, y as usize)];
    let mut changed = 0;

    while let Some((x, y)) = stack.pop() {
        let idx = y * w + x;
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        if !within(pixels[idx], target, tolerance) {
            continue;
        }

        if pixels[idx] != fill {
            pixels[idx] = fill;
            changed += 1;
        }

        if x > 0 {
            stack.push((x - 1, y));
        }
        if x + 1 < w {
            stack.push((x + 1, y));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
        if y + 1 < h {
            stack.push((x, y + 1));
        }
    }
    changed
}
