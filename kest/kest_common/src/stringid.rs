use std::convert::From;

#[cfg(debug_assertions)]
use {std::collections::hash_map::Entry, std::collections::HashMap, std::sync::RwLock};

/// Interned string identifier. Paths-as-keys hash to this; two ids made from
/// the same string always compare equal.
#[derive(PartialEq, Hash, Copy, Clone, PartialOrd, Eq, Ord)]
pub struct String_Id(u32);

#[cfg(debug_assertions)]
lazy_static! {
    static ref STRING_ID_MAP: RwLock<HashMap<String_Id, String>> = RwLock::new(HashMap::new());
}

impl String_Id {
    pub const fn from_u32(x: u32) -> String_Id {
        String_Id(x)
    }

    pub const fn val(self) -> u32 {
        self.0
    }
}

impl From<&str> for String_Id {
    fn from(s: &str) -> String_Id {
        sid_from_str(s)
    }
}

#[cfg(debug_assertions)]
pub fn sid_from_str(s: &str) -> String_Id {
    let this = String_Id(fnv1a(s.as_bytes()));
    match STRING_ID_MAP
        .write()
        .expect("[ ERROR ] Failed to lock STRING_ID_MAP")
        .entry(this)
    {
        Entry::Occupied(o) => {
            let old = o.get().as_str();
            assert_eq!(
                old, s,
                "Two strings map to the same SID: {} and {}!",
                old, s
            );
        }
        Entry::Vacant(v) => {
            v.insert(String::from(s));
        }
    }
    this
}

#[cfg(not(debug_assertions))]
pub const fn sid_from_str(s: &str) -> String_Id {
    String_Id(fnv1a(s.as_bytes()))
}

#[macro_export]
macro_rules! sid {
    ($str: expr) => {
        $crate::stringid::sid_from_str($str)
    };
}

impl std::fmt::Display for String_Id {
    #[cfg(not(debug_assertions))]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }

    #[cfg(debug_assertions)]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            STRING_ID_MAP
                .read()
                .expect("[ ERROR ] Failed to lock STRING_ID_MAP")
                .get(self) // this may fail if the String_Id was created from a raw integer
                .unwrap_or(&format!("{}", self.0))
        )
    }
}

impl std::fmt::Debug for String_Id {
    #[cfg(not(debug_assertions))]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "String_Id({})", self.0)
    }

    #[cfg(debug_assertions)]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "String_Id({}, \"{}\")",
            self.0,
            STRING_ID_MAP
                .read()
                .expect("[ ERROR ] Failed to lock STRING_ID_MAP")
                .get(self)
                .map_or("??", String::as_str)
        )
    }
}

pub const FNV1A_PRIME32: u32 = 16_777_619;
pub const FNV1A_START32: u32 = 2_166_136_261;

const fn fnv1a(bytes: &[u8]) -> u32 {
    let mut result = FNV1A_START32;
    let mut i = 0;
    while i < bytes.len() {
        result ^= bytes[i] as u32;
        result = result.wrapping_mul(FNV1A_PRIME32);
        i += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_known_values() {
        assert_eq!(fnv1a(b"textures/birds.png"), 0xa06e_295f);
        assert_eq!(fnv1a(b"sounds/chirp.ogg"), 0x814d_166b);
    }

    #[test]
    fn stringid_from_str() {
        assert_eq!(sid!("textures/birds.png"), String_Id(2_691_574_111));
        assert_eq!(sid!("textures/birds.png"), sid!("textures/birds.png"));
        assert_ne!(sid!("textures/birds.png"), sid!("sounds/chirp.ogg"));
    }

    #[test]
    fn stringid_to_str() {
        assert_eq!(
            sid!("a test string").to_string(),
            String::from("a test string")
        );
    }
}
