use kest_common::stringid::String_Id;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use thiserror::Error;

/// A native load failed (file missing, decode error, ...). The cache is left
/// untouched when this is returned.
#[derive(Debug, Clone, Error)]
#[error("failed to load resource from '{path}': {reason}")]
pub struct Resource_Load_Error {
    pub path: String,
    pub reason: String,
}

pub trait Resource_Loader<R> {
    type Args: ?Sized;

    fn load(&self, data: &Self::Args) -> Result<R, Resource_Load_Error>;
}

pub type Res_Handle = String_Id;

struct Stored_Resource<R> {
    resource: R,
    // Outstanding load() calls not yet matched by an unload(). Always >= 1
    // while the entry exists; the entry is removed on the decrement to 0.
    uses: u32,
}

/// Use-counted resource cache keyed by file path. At most one underlying load
/// per distinct path; repeated loads of the same path share the entry and bump
/// its use count. Dropping the stored resource is what releases the native
/// handle, and that happens exactly once, when the count hits zero.
///
/// Not internally synchronized: meant to live on the thread that owns the
/// rendering context. A thread-safe variant would need a mutex around the map
/// and locked use-count updates.
pub struct Cache<'l, Res, Loader>
where
    Loader: 'l + Resource_Loader<Res, Args = str>,
{
    loader: &'l Loader,
    cache: HashMap<String_Id, Stored_Resource<Res>>,
}

impl<'l, Res, Loader> Cache<'l, Res, Loader>
where
    Loader: 'l + Resource_Loader<Res, Args = str>,
{
    pub fn new_with_loader(loader: &'l Loader) -> Self {
        Cache {
            cache: HashMap::new(),
            loader,
        }
    }

    /// Returns the handle for `fname`, loading it on first request. A cached
    /// entry is reused as-is even if the file changed on disk since.
    pub fn load(&mut self, fname: &str) -> Result<Res_Handle, Resource_Load_Error> {
        let id = sid!(fname);
        match self.cache.entry(id) {
            Entry::Occupied(mut o) => {
                o.get_mut().uses += 1;
                Ok(id)
            }
            Entry::Vacant(v) => {
                let resource = self.loader.load(fname)?;
                v.insert(Stored_Resource { resource, uses: 1 });
                lok!("Loaded resource {}", fname);
                Ok(id)
            }
        }
    }

    /// Gives back one use of `fname`. On the last use the entry is removed
    /// and the resource dropped. Unloading a path that is not cached (or was
    /// already fully unloaded) is a no-op.
    pub fn unload(&mut self, fname: &str) {
        let id = sid!(fname);
        if let Some(sr) = self.cache.get_mut(&id) {
            sr.uses -= 1;
            if sr.uses == 0 {
                self.cache.remove(&id);
            }
        }
    }

    pub fn must_get(&self, handle: Res_Handle) -> &Res {
        &self.cache[&handle].resource
    }

    pub fn must_get_mut(&mut self, handle: Res_Handle) -> &mut Res {
        &mut self.cache.get_mut(&handle).unwrap().resource
    }

    pub fn uses(&self, handle: Res_Handle) -> Option<u32> {
        self.cache.get(&handle).map(|sr| sr.uses)
    }

    pub fn n_loaded(&self) -> usize {
        self.cache.len()
    }
}

#[macro_export]
macro_rules! define_file_loader {
    ($loaded_res: ty, $loader_name: ident, $cache_name: ident, $load_fn: path) => {
        pub(super) struct $loader_name;

        impl loaders::Resource_Loader<$loaded_res> for $loader_name {
            type Args = str;

            fn load(&self, fname: &str) -> Result<$loaded_res, loaders::Resource_Load_Error> {
                $load_fn(fname).map_err(|reason| loaders::Resource_Load_Error {
                    path: String::from(fname),
                    reason,
                })
            }
        }

        pub(super) type $cache_name<'l> = loaders::Cache<'l, $loaded_res, $loader_name>;

        impl $cache_name<'_> {
            pub fn new() -> Self {
                Self::new_with_loader(&$loader_name {})
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counting_Loader {
        loads: Cell<u32>,
        drops: Rc<Cell<u32>>,
    }

    struct Counted_Res {
        drops: Rc<Cell<u32>>,
    }

    impl Drop for Counted_Res {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    impl Resource_Loader<Counted_Res> for Counting_Loader {
        type Args = str;

        fn load(&self, fname: &str) -> Result<Counted_Res, Resource_Load_Error> {
            if fname.ends_with(".bad") {
                return Err(Resource_Load_Error {
                    path: String::from(fname),
                    reason: String::from("corrupt file"),
                });
            }
            self.loads.set(self.loads.get() + 1);
            Ok(Counted_Res {
                drops: Rc::clone(&self.drops),
            })
        }
    }

    fn counting_loader() -> Counting_Loader {
        Counting_Loader {
            loads: Cell::new(0),
            drops: Rc::new(Cell::new(0)),
        }
    }

    #[test]
    fn repeated_loads_share_one_resource() {
        let loader = counting_loader();
        let mut cache = Cache::new_with_loader(&loader);

        let first = cache.load("a.png").unwrap();
        let second = cache.load("a.png").unwrap();
        assert_eq!(first, second);
        assert_eq!(loader.loads.get(), 1);
        assert_eq!(cache.uses(first), Some(2));
        assert_eq!(cache.n_loaded(), 1);
    }

    #[test]
    fn distinct_paths_load_separately() {
        let loader = counting_loader();
        let mut cache = Cache::new_with_loader(&loader);

        let a = cache.load("a.png").unwrap();
        let b = cache.load("b.png").unwrap();
        assert_ne!(a, b);
        assert_eq!(loader.loads.get(), 2);
        assert_eq!(cache.n_loaded(), 2);
    }

    #[test]
    fn unload_decrements_then_releases_once() {
        let loader = counting_loader();
        let mut cache = Cache::new_with_loader(&loader);

        let handle = cache.load("a.png").unwrap();
        cache.load("a.png").unwrap();
        cache.load("a.png").unwrap();
        assert_eq!(cache.uses(handle), Some(3));

        cache.unload("a.png");
        assert_eq!(cache.uses(handle), Some(2));
        assert_eq!(loader.drops.get(), 0);

        cache.unload("a.png");
        cache.unload("a.png");
        assert_eq!(cache.uses(handle), None);
        assert_eq!(cache.n_loaded(), 0);
        assert_eq!(loader.drops.get(), 1);
    }

    #[test]
    fn unload_unknown_path_is_a_noop() {
        let loader = counting_loader();
        let mut cache: Cache<Counted_Res, _> = Cache::new_with_loader(&loader);

        cache.unload("never/loaded.png");
        assert_eq!(cache.n_loaded(), 0);
        assert_eq!(loader.drops.get(), 0);
    }

    #[test]
    fn over_unload_hits_the_noop_path() {
        let loader = counting_loader();
        let mut cache = Cache::new_with_loader(&loader);

        cache.load("a.png").unwrap();
        cache.unload("a.png");
        cache.unload("a.png");
        cache.unload("a.png");
        assert_eq!(cache.n_loaded(), 0);
        assert_eq!(loader.drops.get(), 1);
    }

    #[test]
    fn failed_load_leaves_cache_unmodified() {
        let loader = counting_loader();
        let mut cache: Cache<Counted_Res, _> = Cache::new_with_loader(&loader);

        let err = cache.load("a.bad").unwrap_err();
        assert_eq!(err.path, "a.bad");
        assert!(err.to_string().contains("corrupt file"));
        assert_eq!(cache.n_loaded(), 0);
        assert_eq!(loader.loads.get(), 0);

        // A later load of a good path still works.
        cache.load("a.png").unwrap();
        assert_eq!(cache.n_loaded(), 1);
    }
}
