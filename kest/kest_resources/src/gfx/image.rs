use kest_common::colors::{rgb, rgba, Color};
use kest_gfx_backend::render::{self, Surface, Texture};
use std::fs::File;

// @Incomplete: png is the only decoder for now; the format zoo is the native
// library's job in a windowed backend.
pub fn load_surface_from_file(fname: &str) -> Result<Surface, String> {
    let decoder = png::Decoder::new(File::open(fname).map_err(|err| err.to_string())?);
    let (info, mut reader) = decoder.read_info().map_err(|err| err.to_string())?;

    let mut buf = vec![0; info.buffer_size()];
    reader.next_frame(&mut buf).map_err(|err| err.to_string())?;

    let pixels = pixels_from_png(info.color_type, info.bit_depth, &buf)?;
    ldebug!("loaded {}x{} image from {}", info.width, info.height, fname);

    Ok(render::new_surface_with_data(info.width, info.height, pixels))
}

pub fn load_texture_from_file(fname: &str) -> Result<Texture, String> {
    // The intermediate surface only lives long enough to upload.
    let surface = load_surface_from_file(fname)?;
    Ok(render::new_texture_from_surface(&surface))
}

fn pixels_from_png(
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    buf: &[u8],
) -> Result<Vec<Color>, String> {
    if bit_depth != png::BitDepth::Eight {
        return Err(format!("unsupported png bit depth {:?}", bit_depth));
    }
    match color_type {
        png::ColorType::RGBA => Ok(buf
            .chunks_exact(4)
            .map(|c| rgba(c[0], c[1], c[2], c[3]))
            .collect()),
        png::ColorType::RGB => Ok(buf.chunks_exact(3).map(|c| rgb(c[0], c[1], c[2])).collect()),
        png::ColorType::GrayscaleAlpha => Ok(buf
            .chunks_exact(2)
            .map(|c| rgba(c[0], c[0], c[0], c[1]))
            .collect()),
        png::ColorType::Grayscale => Ok(buf.iter().map(|&g| rgb(g, g, g)).collect()),
        png::ColorType::Indexed => Err(String::from("indexed-color pngs are not supported")),
    }
}
