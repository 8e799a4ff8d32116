include!("colors_def.rs");

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color { r, g, b, a }
}

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color { r, g, b, a: 255 }
}

pub const fn color_to_hex(c: Color) -> u32 {
    let mut h = 0u32;
    h |= c.a as u32;
    h |= (c.b as u32) << 8;
    h |= (c.g as u32) << 16;
    h |= (c.r as u32) << 24;
    h
}

pub const fn color_from_hex(hex: u32) -> Color {
    let a = (hex & 0x00_00_00_FF) as u8;
    let b = ((hex & 0x00_00_FF_00) >> 8) as u8;
    let g = ((hex & 0x00_FF_00_00) >> 16) as u8;
    let r = ((hex & 0xFF_00_00_00) >> 24) as u8;
    rgba(r, g, b, a)
}

pub const fn color_from_hex_no_alpha(hex: u32) -> Color {
    let b = (hex & 0x00_00_FF) as u8;
    let g = ((hex & 0x00_FF_00) >> 8) as u8;
    let r = ((hex & 0xFF_00_00) >> 16) as u8;
    rgba(r, g, b, 255)
}

pub fn lerp_col(a: Color, b: Color, t: f32) -> Color {
    let omt = 1. - t;
    rgba(
        (f32::from(a.r) * omt + f32::from(b.r) * t) as u8,
        (f32::from(a.g) * omt + f32::from(b.g) * t) as u8,
        (f32::from(a.b) * omt + f32::from(b.b) * t) as u8,
        (f32::from(a.a) * omt + f32::from(b.a) * t) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_roundtrip() {
        let c = rgba(10, 20, 30, 40);
        assert_eq!(color_from_hex(color_to_hex(c)), c);
        assert_eq!(color_to_hex(RED), 0xFF_00_00_FF);
        assert_eq!(color_from_hex_no_alpha(0xFF_A5_00), ORANGE);
    }

    #[test]
    fn color_lerp() {
        assert_eq!(lerp_col(BLACK, WHITE, 0.), BLACK);
        assert_eq!(lerp_col(BLACK, WHITE, 1.), WHITE);
        assert_eq!(lerp_col(BLACK, WHITE, 0.5), rgb(127, 127, 127));
    }
}
