use kest_audio_backend::sound::{self, Music_Source, Sound_Buffer};

pub fn load_sound_buffer_from_file(fname: &str) -> Result<Sound_Buffer, String> {
    sound::load_sound_buffer(fname)
}

pub fn load_music_source_from_file(fname: &str) -> Result<Music_Source, String> {
    sound::load_music_source(fname)
}
