use std::fs;

/// Headless backend: no device is opened and no decoding happens, but files
/// are still validated on disk so load failures behave like the real thing.
pub struct Sound_Buffer {
    len_bytes: u64,
}

/// A streamed track keeps its path around rather than loading the data.
pub struct Music_Source {
    path: String,
    len_bytes: u64,
}

pub fn load_sound_buffer(fname: &str) -> Result<Sound_Buffer, String> {
    let meta = fs::metadata(fname).map_err(|err| err.to_string())?;
    Ok(Sound_Buffer {
        len_bytes: meta.len(),
    })
}

pub fn sound_buffer_len_bytes(buf: &Sound_Buffer) -> u64 {
    buf.len_bytes
}

pub fn load_music_source(fname: &str) -> Result<Music_Source, String> {
    let meta = fs::metadata(fname).map_err(|err| err.to_string())?;
    Ok(Music_Source {
        path: String::from(fname),
        len_bytes: meta.len(),
    })
}

pub fn music_len_bytes(music: &Music_Source) -> u64 {
    music.len_bytes
}

pub fn music_path(music: &Music_Source) -> &str {
    &music.path
}
