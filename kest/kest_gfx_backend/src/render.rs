#[cfg(feature = "gfx-null")]
pub mod null;

#[cfg(feature = "gfx-null")]
pub use self::null as backend;

pub type Surface = backend::Surface;
pub type Texture = backend::Texture;

pub use backend::blit_surface;
pub use backend::get_surface_pixel;
pub use backend::new_blank_surface;
pub use backend::new_surface_with_data;
pub use backend::new_texture_from_surface;
pub use backend::render_text_surface;
pub use backend::set_surface_pixel;
pub use backend::surface_size;
pub use backend::texture_size;
