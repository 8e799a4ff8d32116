#![warn(clippy::all)]
#![allow(non_camel_case_types)]

pub use kest_audio_backend as audio_backend;
pub use kest_common as common;
pub use kest_diagnostics as diagnostics;
pub use kest_gfx as gfx;
pub use kest_gfx_backend as gfx_backend;
pub use kest_math as math;
pub use kest_resources as resources;
