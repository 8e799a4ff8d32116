mod cache;
mod image;

use crate::loaders::{Res_Handle, Resource_Load_Error};
use kest_gfx_backend::render::Texture;

pub type Texture_Handle = Res_Handle;

/// Use-counted graphics resources, owned by the render thread.
pub struct Gfx_Resources<'l> {
    textures: cache::Texture_Cache<'l>,
}

impl<'l> Gfx_Resources<'l> {
    pub fn new() -> Self {
        Gfx_Resources {
            textures: cache::Texture_Cache::new(),
        }
    }

    pub fn load_texture(&mut self, fname: &str) -> Result<Texture_Handle, Resource_Load_Error> {
        self.textures.load(fname)
    }

    pub fn unload_texture(&mut self, fname: &str) {
        self.textures.unload(fname)
    }

    pub fn get_texture(&self, handle: Texture_Handle) -> &Texture {
        self.textures.must_get(handle)
    }

    pub fn get_texture_mut(&mut self, handle: Texture_Handle) -> &mut Texture {
        self.textures.must_get_mut(handle)
    }

    pub fn texture_uses(&self, handle: Texture_Handle) -> Option<u32> {
        self.textures.uses(handle)
    }

    pub fn n_loaded_textures(&self) -> usize {
        self.textures.n_loaded()
    }
}
