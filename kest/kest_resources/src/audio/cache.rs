use crate::loaders;
use kest_audio_backend::sound::{Music_Source, Sound_Buffer};

define_file_loader!(
    Sound_Buffer,
    Sound_Loader,
    Sound_Cache,
    super::clip::load_sound_buffer_from_file
);
define_file_loader!(
    Music_Source,
    Music_Loader,
    Music_Cache,
    super::clip::load_music_source_from_file
);
