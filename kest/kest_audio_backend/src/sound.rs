#[cfg(feature = "audio-null")]
pub mod null;

#[cfg(feature = "audio-null")]
pub use self::null as backend;

pub type Sound_Buffer = backend::Sound_Buffer;
pub type Music_Source = backend::Music_Source;

pub use backend::load_music_source;
pub use backend::load_sound_buffer;
pub use backend::music_len_bytes;
pub use backend::music_path;
pub use backend::sound_buffer_len_bytes;
