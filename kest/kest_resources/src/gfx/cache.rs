use crate::loaders;
use kest_gfx_backend::render::Texture;

define_file_loader!(
    Texture,
    Texture_Loader,
    Texture_Cache,
    super::image::load_texture_from_file
);
