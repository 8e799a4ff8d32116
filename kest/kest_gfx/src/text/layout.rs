use kest_math::vector::{Vec2i, Vec2u};
use smallvec::SmallVec;

/// Growth ceiling for the best-fit candidate surface. Past this the packing
/// gives up instead of looping on input that can never fit (e.g. a target
/// rect with a degenerate dimension).
pub(crate) const MAX_BEST_FIT_SCALE: f32 = 10.0;

const SCALE_STEP: f32 = 0.1;

pub(crate) struct Packing {
    pub scale: f32,
    pub candidate_size: Vec2u,
    pub line_height: u32,
    /// Top-left corner for each word, in candidate-surface coordinates,
    /// in word order.
    pub placements: SmallVec<[Vec2i; 8]>,
}

#[derive(Debug)]
pub(crate) struct Packing_Overflow;

/// Greedy line packing with iterative candidate growth: words go
/// left-to-right, wrapping when the running width would exceed the candidate
/// width; if the stacked lines end up taller than the candidate, the whole
/// attempt is redone on a candidate grown by another 10% of the target size.
/// The line height is fixed to the tallest word.
///
/// A word wider than the candidate itself still gets placed (on a fresh
/// line, overflowing to the right); the blit clips it.
pub(crate) fn pack_words(word_sizes: &[Vec2u], target: Vec2u) -> Result<Packing, Packing_Overflow> {
    let line_height = word_sizes.iter().map(|s| s.y).max().unwrap_or(0);

    let mut scale = 1.0f32;
    while scale <= MAX_BEST_FIT_SCALE {
        let candidate_size = v2!(
            (target.x as f32 * scale) as u32,
            (target.y as f32 * scale) as u32
        );

        let mut placements: SmallVec<[Vec2i; 8]> = SmallVec::with_capacity(word_sizes.len());
        let mut acc_width = 0u32;
        let mut line = 0u32;
        for size in word_sizes {
            if acc_width + size.x > candidate_size.x {
                line += 1;
                acc_width = 0;
            }
            placements.push(v2!(acc_width as i32, (line * line_height) as i32));
            acc_width += size.x;
        }

        if line * line_height + line_height <= candidate_size.y {
            return Ok(Packing {
                scale,
                candidate_size,
                line_height,
                placements,
            });
        }

        scale += SCALE_STEP;
    }

    Err(Packing_Overflow)
}
