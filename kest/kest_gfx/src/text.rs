mod layout;

use kest_common::colors::{self, Color};
use kest_gfx_backend::render::{self, Surface, Texture};
use kest_math::rect::{Rect, Recti};
use kest_math::vector::Vec2u;
use smallvec::SmallVec;
use thiserror::Error;

/// How the rendered text relates to the target rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Text_Fill_Type {
    /// Only the rect position matters: the resulting rect gets the natural
    /// rendered size.
    No_Fit,
    /// Word-wraps into the rect, growing the canvas until the lines fit.
    /// Slow: every rejected attempt re-packs from scratch.
    Best_Fit,
    /// Keeps the natural texture; stretching into the rect happens at draw
    /// time.
    Scaled_Fit,
    /// Like Scaled_Fit but preserves the aspect ratio, possibly underfilling
    /// one axis; the resulting rect gets the scaled size.
    Keep_Aspect_Scaled_Fit,
}

#[derive(Copy, Clone, Debug)]
pub struct Text_Params {
    pub size: u16,
    pub color: Color,
    pub fill: Text_Fill_Type,
    pub rect: Recti,
}

impl Default for Text_Params {
    fn default() -> Self {
        Text_Params {
            size: 32,
            color: colors::BLACK,
            fill: Text_Fill_Type::No_Fit,
            rect: Rect::new(0, 0, 320, 36),
        }
    }
}

/// Result of laying out a string: the texture and the rect it should be
/// drawn into. The caller owns the texture; nothing here is cached, so
/// redrawing the same string redoes the full layout.
#[derive(Debug)]
pub struct Text_Layout {
    pub texture: Texture,
    pub rect: Recti,
}

#[derive(Debug, Clone, Error)]
pub enum Text_Error {
    #[error("failed to render text with font '{font}': {reason}")]
    Glyph_Render { font: String, reason: String },
    #[error("text cannot be packed into {width}x{height} within the {max_scale}x growth limit")]
    Layout_Overflow {
        width: i32,
        height: i32,
        max_scale: f32,
    },
}

/// Renders `text` with the font at `font_path` into a fresh texture, laid
/// out according to `params.fill`.
pub fn create_text_texture(
    text: &str,
    font_path: &str,
    params: &Text_Params,
) -> Result<Text_Layout, Text_Error> {
    match params.fill {
        Text_Fill_Type::No_Fit => {
            let (texture, natural) = render_whole_string(text, font_path, params)?;
            Ok(Text_Layout {
                texture,
                rect: Rect::new(
                    params.rect.x,
                    params.rect.y,
                    natural.x as i32,
                    natural.y as i32,
                ),
            })
        }

        Text_Fill_Type::Scaled_Fit => {
            let (texture, _) = render_whole_string(text, font_path, params)?;
            Ok(Text_Layout {
                texture,
                rect: params.rect,
            })
        }

        Text_Fill_Type::Keep_Aspect_Scaled_Fit => {
            let (texture, natural) = render_whole_string(text, font_path, params)?;
            let wvar = params.rect.width as f32 / natural.x as f32;
            let hvar = params.rect.height as f32 / natural.y as f32;
            let ratio = if wvar < hvar { wvar } else { hvar };
            Ok(Text_Layout {
                texture,
                rect: Rect::new(
                    params.rect.x,
                    params.rect.y,
                    (natural.x as f32 * ratio) as i32,
                    (natural.y as f32 * ratio) as i32,
                ),
            })
        }

        Text_Fill_Type::Best_Fit => create_text_texture_best_fit(text, font_path, params),
    }
}

fn render_string_surface(
    text: &str,
    font_path: &str,
    params: &Text_Params,
) -> Result<Surface, Text_Error> {
    render::render_text_surface(font_path, params.size, text, params.color).map_err(|reason| {
        Text_Error::Glyph_Render {
            font: String::from(font_path),
            reason,
        }
    })
}

fn render_whole_string(
    text: &str,
    font_path: &str,
    params: &Text_Params,
) -> Result<(Texture, Vec2u), Text_Error> {
    let surface = render_string_surface(text, font_path, params)?;
    let natural = render::surface_size(&surface);
    Ok((render::new_texture_from_surface(&surface), natural))
}

fn create_text_texture_best_fit(
    text: &str,
    font_path: &str,
    params: &Text_Params,
) -> Result<Text_Layout, Text_Error> {
    // Every word gets its own surface with one trailing space, rendered up
    // front at full size. Splitting on single spaces keeps empty pieces, so
    // runs of spaces survive as space-only words.
    let mut word_surfaces: SmallVec<[Surface; 8]> = SmallVec::new();
    for word in text.split(' ') {
        let padded = format!("{} ", word);
        word_surfaces.push(render_string_surface(&padded, font_path, params)?);
    }

    let word_sizes: SmallVec<[Vec2u; 8]> = word_surfaces
        .iter()
        .map(|s| render::surface_size(s))
        .collect();
    let target = v2!(
        params.rect.width.max(0) as u32,
        params.rect.height.max(0) as u32
    );

    let packing =
        layout::pack_words(&word_sizes, target).map_err(|_| Text_Error::Layout_Overflow {
            width: params.rect.width,
            height: params.rect.height,
            max_scale: layout::MAX_BEST_FIT_SCALE,
        })?;
    if packing.scale > 1.0 {
        ldebug!("text packed at {:.1}x the target rect size", packing.scale);
    }

    let mut candidate =
        render::new_blank_surface(packing.candidate_size.x, packing.candidate_size.y);
    for (surface, pos) in word_surfaces.iter().zip(packing.placements.iter()) {
        let size = render::surface_size(surface);
        render::blit_surface(
            surface,
            Rect::new(0, 0, size.x as i32, size.y as i32),
            &mut candidate,
            *pos,
        );
    }

    Ok(Text_Layout {
        texture: render::new_texture_from_surface(&candidate),
        rect: params.rect,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // The null backend renders chars as size/2 x size blocks, so a string's
    // natural size is exactly computable.
    const FONT: &str = "fonts/test.ttf";

    fn params(fill: Text_Fill_Type, rect: Recti) -> Text_Params {
        Text_Params {
            fill,
            rect,
            ..Text_Params::default()
        }
    }

    #[test]
    fn no_fit_reports_the_natural_size() {
        let params = params(Text_Fill_Type::No_Fit, Rect::new(5, 7, 1000, 1000));
        let layout = create_text_texture("hi", FONT, &params).unwrap();
        // "hi" at size 32 -> 2 * 16 wide, 32 tall; input width/height ignored.
        assert_eq!(layout.rect, Rect::new(5, 7, 32, 32));
        let tex_size = render::texture_size(&layout.texture);
        assert_eq!((tex_size.x, tex_size.y), (32, 32));
    }

    #[test]
    fn scaled_fit_keeps_the_target_rect() {
        let params = params(Text_Fill_Type::Scaled_Fit, Rect::new(9, 9, 50, 60));
        let layout = create_text_texture("hi", FONT, &params).unwrap();
        assert_eq!(layout.rect, Rect::new(9, 9, 50, 60));
        // Texture still has the natural size; stretching is the drawer's job.
        let tex_size = render::texture_size(&layout.texture);
        assert_eq!((tex_size.x, tex_size.y), (32, 32));
    }

    #[test]
    fn keep_aspect_picks_the_smaller_ratio() {
        // Natural 32x32 into 64x128: width ratio 2 wins over height ratio 4.
        let tall = params(
            Text_Fill_Type::Keep_Aspect_Scaled_Fit,
            Rect::new(1, 2, 64, 128),
        );
        let layout = create_text_texture("hi", FONT, &tall).unwrap();
        assert_eq!(layout.rect, Rect::new(1, 2, 64, 64));

        // And the other way around.
        let wide = params(
            Text_Fill_Type::Keep_Aspect_Scaled_Fit,
            Rect::new(0, 0, 128, 16),
        );
        let layout = create_text_texture("hi", FONT, &wide).unwrap();
        assert_eq!(layout.rect, Rect::new(0, 0, 16, 16));
    }

    #[test]
    fn best_fit_that_already_fits_keeps_the_target_size() {
        // "ab " and "cd " are 48x32 each: one line in 200x100.
        let params = params(Text_Fill_Type::Best_Fit, Rect::new(0, 0, 200, 100));
        let layout = create_text_texture("ab cd", FONT, &params).unwrap();
        assert_eq!(layout.rect, Rect::new(0, 0, 200, 100));
        let tex_size = render::texture_size(&layout.texture);
        assert_eq!((tex_size.x, tex_size.y), (200, 100));
    }

    #[test]
    fn best_fit_grows_the_canvas_when_needed() {
        // Three 48x32 words in 100x33: needs 1.5x growth (see layout tests).
        let params = params(Text_Fill_Type::Best_Fit, Rect::new(0, 0, 100, 33));
        let layout = create_text_texture("ab cd ef", FONT, &params).unwrap();
        assert_eq!(layout.rect, Rect::new(0, 0, 100, 33));
        let tex_size = render::texture_size(&layout.texture);
        assert_eq!((tex_size.x, tex_size.y), (150, 49));
    }

    #[test]
    fn best_fit_gives_up_on_unfittable_text() {
        let params = params(Text_Fill_Type::Best_Fit, Rect::new(0, 0, 20, 4));
        let err = create_text_texture("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", FONT, &params)
            .unwrap_err();
        match err {
            Text_Error::Layout_Overflow { width, height, .. } => {
                assert_eq!((width, height), (20, 4));
            }
            other => panic!("expected Layout_Overflow, got {:?}", other),
        }
    }

    #[test]
    fn failed_glyph_render_aborts_best_fit() {
        // The null backend has no glyphs outside ASCII, so the third word
        // fails after the first two have already been rendered; the error
        // comes out of the layout and the finished word surfaces are dropped.
        let params = params(Text_Fill_Type::Best_Fit, Rect::new(0, 0, 200, 100));
        let err = create_text_texture("ab cd \u{e9}f", FONT, &params).unwrap_err();
        match err {
            Text_Error::Glyph_Render { font, .. } => assert_eq!(font, FONT),
            other => panic!("expected Glyph_Render, got {:?}", other),
        }
    }

    #[test]
    fn empty_string_still_renders() {
        let params = params(Text_Fill_Type::No_Fit, Rect::new(0, 0, 10, 10));
        let layout = create_text_texture("", FONT, &params).unwrap();
        assert_eq!(layout.rect, Rect::new(0, 0, 0, 32));
    }
}
