use kest_common::colors::{self, Color};
use kest_math::rect::Recti;
use kest_math::vector::{Vec2i, Vec2u};

/// Headless backend: surfaces are plain RGBA pixel buffers and textures only
/// retain their dimensions. Text "rendering" uses fixed glyph metrics
/// (advance = size / 2 per char, line height = size) so that layout code
/// behaves deterministically without a rasterizer.
#[derive(Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

#[derive(Debug)]
pub struct Texture {
    width: u32,
    height: u32,
}

pub fn new_blank_surface(width: u32, height: u32) -> Surface {
    Surface {
        width,
        height,
        pixels: vec![colors::TRANSPARENT; (width * height) as usize],
    }
}

pub fn new_surface_with_data(width: u32, height: u32, pixels: Vec<Color>) -> Surface {
    debug_assert_eq!(pixels.len(), (width * height) as usize);
    Surface {
        width,
        height,
        pixels,
    }
}

pub fn surface_size(surface: &Surface) -> Vec2u {
    v2!(surface.width, surface.height)
}

pub fn get_surface_pixel(surface: &Surface, x: u32, y: u32) -> Color {
    debug_assert!(x < surface.width && y < surface.height);
    surface.pixels[(y * surface.width + x) as usize]
}

pub fn set_surface_pixel(surface: &mut Surface, x: u32, y: u32, color: Color) {
    debug_assert!(x < surface.width && y < surface.height);
    surface.pixels[(y * surface.width + x) as usize] = color;
}

/// Copies `src_rect` of `src` onto `dst` at `dst_pos`, clipping against both
/// surfaces. No scaling.
pub fn blit_surface(src: &Surface, src_rect: Recti, dst: &mut Surface, dst_pos: Vec2i) {
    for row in 0..src_rect.height.max(0) {
        let sy = src_rect.y + row;
        let dy = dst_pos.y + row;
        if sy < 0 || sy >= src.height as i32 || dy < 0 || dy >= dst.height as i32 {
            continue;
        }
        for col in 0..src_rect.width.max(0) {
            let sx = src_rect.x + col;
            let dx = dst_pos.x + col;
            if sx < 0 || sx >= src.width as i32 || dx < 0 || dx >= dst.width as i32 {
                continue;
            }
            dst.pixels[(dy as u32 * dst.width + dx as u32) as usize] =
                src.pixels[(sy as u32 * src.width + sx as u32) as usize];
        }
    }
}

pub fn render_text_surface(
    font_path: &str,
    size: u16,
    text: &str,
    color: Color,
) -> Result<Surface, String> {
    // The built-in "font" only covers ASCII; anything else is a missing
    // glyph, which is the same failure the native renderer reports.
    if let Some(missing) = text.chars().find(|c| !c.is_ascii()) {
        return Err(format!("no glyph for '{}' in {}", missing, font_path));
    }
    let advance = u32::from((size / 2).max(1));
    let width = text.chars().count() as u32 * advance;
    let height = u32::from(size);
    Ok(Surface {
        width,
        height,
        pixels: vec![color; (width * height) as usize],
    })
}

pub fn new_texture_from_surface(surface: &Surface) -> Texture {
    Texture {
        width: surface.width,
        height: surface.height,
    }
}

pub fn texture_size(texture: &Texture) -> Vec2u {
    v2!(texture.width, texture.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kest_common::colors::{rgb, TRANSPARENT};
    use kest_math::rect::Rect;

    #[test]
    fn blank_surface_is_transparent() {
        let surface = new_blank_surface(4, 3);
        assert_eq!(surface_size(&surface), v2!(4, 3));
        assert_eq!(get_surface_pixel(&surface, 3, 2), TRANSPARENT);
    }

    #[test]
    fn blit_copies_pixels() {
        let mut src = new_blank_surface(2, 2);
        set_surface_pixel(&mut src, 0, 0, rgb(1, 2, 3));
        set_surface_pixel(&mut src, 1, 1, rgb(4, 5, 6));

        let mut dst = new_blank_surface(4, 4);
        blit_surface(&src, Rect::new(0, 0, 2, 2), &mut dst, v2!(1, 1));

        assert_eq!(get_surface_pixel(&dst, 1, 1), rgb(1, 2, 3));
        assert_eq!(get_surface_pixel(&dst, 2, 2), rgb(4, 5, 6));
        assert_eq!(get_surface_pixel(&dst, 0, 0), TRANSPARENT);
    }

    #[test]
    fn blit_clips_outside_destination() {
        let mut src = new_blank_surface(2, 2);
        set_surface_pixel(&mut src, 0, 0, rgb(9, 9, 9));
        set_surface_pixel(&mut src, 1, 0, rgb(8, 8, 8));

        let mut dst = new_blank_surface(2, 2);
        // Only the leftmost source column lands inside dst.
        blit_surface(&src, Rect::new(0, 0, 2, 2), &mut dst, v2!(1, 0));
        assert_eq!(get_surface_pixel(&dst, 1, 0), rgb(9, 9, 9));

        // Fully outside: no panic, no change.
        blit_surface(&src, Rect::new(0, 0, 2, 2), &mut dst, v2!(5, 5));
        assert_eq!(get_surface_pixel(&dst, 0, 0), TRANSPARENT);
    }

    #[test]
    fn text_surface_metrics() {
        let surface = render_text_surface("fonts/any.ttf", 32, "hi ", rgb(1, 1, 1)).unwrap();
        assert_eq!(surface_size(&surface), v2!(3 * 16, 32));
        assert_eq!(get_surface_pixel(&surface, 0, 0), rgb(1, 1, 1));

        let empty = render_text_surface("fonts/any.ttf", 32, "", rgb(1, 1, 1)).unwrap();
        assert_eq!(surface_size(&empty), v2!(0, 32));
    }

    #[test]
    fn text_surface_missing_glyph() {
        let err = render_text_surface("fonts/any.ttf", 32, "caf\u{e9}", rgb(1, 1, 1)).unwrap_err();
        assert!(err.contains("fonts/any.ttf"));
    }

    #[test]
    fn texture_keeps_surface_size() {
        let surface = new_blank_surface(7, 5);
        let texture = new_texture_from_surface(&surface);
        assert_eq!(texture_size(&texture), v2!(7, 5));
    }
}
