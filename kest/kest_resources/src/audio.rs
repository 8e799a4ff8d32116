mod cache;
mod clip;

use crate::loaders::{Res_Handle, Resource_Load_Error};
use kest_audio_backend::sound::{Music_Source, Sound_Buffer};

pub type Sound_Handle = Res_Handle;
pub type Music_Handle = Res_Handle;

/// Use-counted audio resources: fully-loaded sound clips and streamed music
/// tracks, cached independently.
pub struct Audio_Resources<'l> {
    sounds: cache::Sound_Cache<'l>,
    music: cache::Music_Cache<'l>,
}

impl<'l> Audio_Resources<'l> {
    pub fn new() -> Self {
        Audio_Resources {
            sounds: cache::Sound_Cache::new(),
            music: cache::Music_Cache::new(),
        }
    }

    pub fn load_sound(&mut self, fname: &str) -> Result<Sound_Handle, Resource_Load_Error> {
        self.sounds.load(fname)
    }

    pub fn unload_sound(&mut self, fname: &str) {
        self.sounds.unload(fname)
    }

    pub fn get_sound_buffer(&self, handle: Sound_Handle) -> &Sound_Buffer {
        self.sounds.must_get(handle)
    }

    pub fn sound_uses(&self, handle: Sound_Handle) -> Option<u32> {
        self.sounds.uses(handle)
    }

    pub fn n_loaded_sounds(&self) -> usize {
        self.sounds.n_loaded()
    }

    pub fn load_music(&mut self, fname: &str) -> Result<Music_Handle, Resource_Load_Error> {
        self.music.load(fname)
    }

    pub fn unload_music(&mut self, fname: &str) {
        self.music.unload(fname)
    }

    pub fn get_music(&self, handle: Music_Handle) -> &Music_Source {
        self.music.must_get(handle)
    }

    pub fn music_uses(&self, handle: Music_Handle) -> Option<u32> {
        self.music.uses(handle)
    }

    pub fn n_loaded_music(&self) -> usize {
        self.music.n_loaded()
    }
}
