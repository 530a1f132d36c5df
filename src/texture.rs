//! Texture cache
//!
//! Path-keyed, load-on-miss store of renderer-bound textures. The cache is
//! the sole loader: at most one load attempt per distinct path succeeds,
//! and repeated requests return the same handle with no I/O. Failures are
//! logged and NOT cached, so a retry after fixing the file can succeed.
//! There is no eviction; the demo asset sets are small and static.
//!
//! Loading is split the same way the renderer sees it: decode the file to
//! RGBA pixels (the `image` crate), then upload to the GPU
//! (`Texture2D::from_rgba8`). The loader seam exists so the cache logic is
//! exercisable without a GPU context.

use std::collections::HashMap;

use macroquad::prelude::{FilterMode, Texture2D};

/// Errors from loading a texture file.
#[derive(Debug)]
pub enum TextureError {
    Io(std::io::Error),
    Decode(image::ImageError),
}

impl From<std::io::Error> for TextureError {
    fn from(e: std::io::Error) -> Self {
        TextureError::Io(e)
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::Decode(e)
    }
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::Io(e) => write!(f, "IO error: {}", e),
            TextureError::Decode(e) => write!(f, "Decode error: {}", e),
        }
    }
}

/// Loads a texture on cache miss.
pub trait TextureLoader {
    /// Handle type; cloning must be cheap (a reference-counted handle).
    type Texture: Clone;

    fn load(&mut self, path: &str) -> Result<Self::Texture, TextureError>;
}

/// Path-keyed texture cache, load-on-miss, no eviction.
pub struct TextureCache<L: TextureLoader> {
    loader: L,
    textures: HashMap<String, L::Texture>,
}

impl<L: TextureLoader> TextureCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            textures: HashMap::new(),
        }
    }

    /// Cached handle on hit; load-and-cache on miss; `None` on failure
    /// (logged with the path, not cached).
    pub fn get(&mut self, path: &str) -> Option<L::Texture> {
        if let Some(texture) = self.textures.get(path) {
            return Some(texture.clone());
        }
        match self.loader.load(path) {
            Ok(texture) => {
                self.textures.insert(path.to_string(), texture.clone());
                Some(texture)
            }
            Err(e) => {
                eprintln!("Failed to load texture {}: {}", path, e);
                None
            }
        }
    }

    /// Number of cached textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// Decode an image file to RGBA8 pixels.
pub fn decode_rgba(path: &str) -> Result<image::RgbaImage, TextureError> {
    let bytes = std::fs::read(path)?;
    let decoded = image::load_from_memory(&bytes)?;
    Ok(decoded.to_rgba8())
}

/// Production loader: file → `image` decode → GPU upload, nearest-neighbor
/// filtering for crisp pixel art.
pub struct GpuTextureLoader;

impl TextureLoader for GpuTextureLoader {
    type Texture = Texture2D;

    fn load(&mut self, path: &str) -> Result<Texture2D, TextureError> {
        let pixels = decode_rgba(path)?;
        let texture = Texture2D::from_rgba8(pixels.width() as u16, pixels.height() as u16, &pixels);
        texture.set_filter(FilterMode::Nearest);
        Ok(texture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Write;
    use std::rc::Rc;

    /// Counts load attempts; fails for paths containing "missing".
    struct CountingLoader {
        loads: Rc<Cell<u32>>,
    }

    impl TextureLoader for CountingLoader {
        type Texture = u32;

        fn load(&mut self, path: &str) -> Result<u32, TextureError> {
            self.loads.set(self.loads.get() + 1);
            if path.contains("missing") {
                return Err(TextureError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    path.to_string(),
                )));
            }
            Ok(self.loads.get())
        }
    }

    fn counting_cache() -> (TextureCache<CountingLoader>, Rc<Cell<u32>>) {
        let loads = Rc::new(Cell::new(0));
        let cache = TextureCache::new(CountingLoader {
            loads: Rc::clone(&loads),
        });
        (cache, loads)
    }

    #[test]
    fn test_repeat_get_loads_once_and_returns_same_handle() {
        let (mut cache, loads) = counting_cache();

        let first = cache.get("assets/ship.png").unwrap();
        let second = cache.get("assets/ship.png").unwrap();
        assert_eq!(first, second);
        assert_eq!(loads.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failure_not_cached_so_retry_reloads() {
        let (mut cache, loads) = counting_cache();

        assert!(cache.get("assets/missing.png").is_none());
        assert!(cache.get("assets/missing.png").is_none());
        // Both calls hit the loader; nothing was cached.
        assert_eq!(loads.get(), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_distinct_paths_load_separately() {
        let (mut cache, loads) = counting_cache();

        cache.get("a.png");
        cache.get("b.png");
        cache.get("a.png");
        assert_eq!(loads.get(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_decode_rgba_roundtrips_a_real_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([255, 0, 0, 255]));
        img.save(&path).unwrap();

        let decoded = decode_rgba(path.to_str().unwrap()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2, 3));
        assert_eq!(decoded.get_pixel(0, 0), &image::Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_decode_rgba_missing_file_is_io_error() {
        let err = decode_rgba("no/such/file.png").unwrap_err();
        assert!(matches!(err, TextureError::Io(_)));
    }

    #[test]
    fn test_decode_rgba_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not a png at all").unwrap();

        let err = decode_rgba(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, TextureError::Decode(_)));
    }
}
