//! Hero artwork list: a lazily-loaded, invalidatable read-through cache.
//!
//! The list itself comes from a [`ListSource`]; a manifest file
//! (`{"images": [...]}`) and a directory scan are provided. When loading
//! fails the cache serves a small built-in list instead.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::quiz_engine::{
    error::Result,
    random::{pick, RandomSource},
};

/// URL prefix every image name is joined to.
pub const IMAGE_BASE: &str = "/assets/images/ultraman/";

/// Served when the real list cannot be loaded.
pub const FALLBACK_IMAGES: &[&str] = &[
    "ultraman_0.jpg",
    "ultraman_102.jpg",
    "ultraman_640.jpg",
    "ultraman_640.png",
];

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

pub trait ListSource {
    fn load(&self) -> Result<Vec<String>>;
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    images: Vec<String>,
}

/// Reads the `images` array of a JSON manifest.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ManifestSource { path: path.into() }
    }
}

impl ListSource for ManifestSource {
    fn load(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path)?;
        let manifest: Manifest = serde_json::from_str(&text)?;
        Ok(manifest.images)
    }
}

/// Lists image files in a directory, sorted by name.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySource { dir: dir.into() }
    }
}

fn draw_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    ((rng.next_f64() * len as f64) as usize).min(len - 1)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.iter().any(|x| x.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

impl ListSource for DirectorySource {
    fn load(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !is_image(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Read-through cache over a [`ListSource`].
pub struct ListCache<S: ListSource> {
    source: S,
    cached: Option<Vec<String>>,
}

impl<S: ListSource> ListCache<S> {
    pub fn new(source: S) -> Self {
        ListCache { source, cached: None }
    }

    /// Load on first use; later calls return the cached list.
    pub fn ensure_loaded(&mut self) -> &[String] {
        if self.cached.is_none() {
            let list = match self.source.load() {
                Ok(list) => {
                    debug!(count = list.len(), "asset list loaded");
                    list
                }
                Err(e) => {
                    warn!(error = %e, "asset list unavailable, using fallback");
                    FALLBACK_IMAGES.iter().map(|s| s.to_string()).collect()
                }
            };
            self.cached = Some(list);
        }
        self.cached.as_deref().unwrap_or(&[])
    }

    /// The cached list, without triggering a load.
    pub fn get(&self) -> Option<&[String]> {
        self.cached.as_deref()
    }

    /// Forget the cached list; the next access reloads from the source.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.is_some()
    }
}

/// Turns cached image names into URLs.
pub struct ImageGallery<S: ListSource> {
    cache: ListCache<S>,
}

impl<S: ListSource> ImageGallery<S> {
    pub fn new(source: S) -> Self {
        ImageGallery { cache: ListCache::new(source) }
    }

    pub fn cache_mut(&mut self) -> &mut ListCache<S> {
        &mut self.cache
    }

    fn url(name: &str) -> String {
        format!("{IMAGE_BASE}{name}")
    }

    fn default_url() -> String {
        Self::url(FALLBACK_IMAGES[0])
    }

    pub fn random_image<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> String {
        match pick(rng, self.cache.ensure_loaded()) {
            Some(name) => Self::url(name),
            None => Self::default_url(),
        }
    }

    /// Up to `count` URLs, distinct while the list lasts, then repeating.
    /// Never returns more than twice the list length.
    pub fn random_images<R: RandomSource + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<String> {
        let images = self.cache.ensure_loaded();
        if images.is_empty() {
            return vec![Self::default_url()];
        }

        let len = images.len();
        let mut used = HashSet::new();
        let mut selected = Vec::new();
        for _ in 0..count.min(len * 2) {
            let mut idx = draw_index(rng, len);
            // Redraw on collision until every image has been shown once.
            while used.len() < len && used.contains(&idx) {
                idx = draw_index(rng, len);
            }
            used.insert(idx);
            selected.push(Self::url(&images[idx]));
        }
        selected
    }

    /// Image at `index`, wrapping around the list.
    pub fn image_at(&mut self, index: usize) -> String {
        let images = self.cache.ensure_loaded();
        if images.is_empty() {
            return Self::default_url();
        }
        Self::url(&images[index % images.len()])
    }

    pub fn all_images(&mut self) -> Vec<String> {
        self.cache.ensure_loaded().iter().map(|n| Self::url(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::error::QuizError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;

    struct Counting {
        calls: Cell<usize>,
        names: Vec<String>,
    }

    impl ListSource for Counting {
        fn load(&self) -> Result<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.names.clone())
        }
    }

    struct Broken;

    impl ListSource for Broken {
        fn load(&self) -> Result<Vec<String>> {
            Err(QuizError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")))
        }
    }

    fn counting(names: &[&str]) -> Counting {
        Counting { calls: Cell::new(0), names: names.iter().map(|s| s.to_string()).collect() }
    }

    #[test]
    fn loads_once_until_invalidated() {
        let mut cache = ListCache::new(counting(&["a.png", "b.png"]));
        assert!(cache.get().is_none());
        assert_eq!(cache.ensure_loaded().len(), 2);
        cache.ensure_loaded();
        assert_eq!(cache.source.calls.get(), 1);

        cache.invalidate();
        assert!(!cache.is_loaded());
        cache.ensure_loaded();
        assert_eq!(cache.source.calls.get(), 2);
    }

    #[test]
    fn failed_load_serves_fallback() {
        let mut cache = ListCache::new(Broken);
        let list = cache.ensure_loaded().to_vec();
        assert_eq!(list, FALLBACK_IMAGES.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn manifest_and_directory_sources_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.PNG", "a.jpg", "notes.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        let listed = DirectorySource::new(dir.path()).load().unwrap();
        assert_eq!(listed, vec!["a.jpg".to_string(), "b.PNG".to_string()]);

        let manifest = dir.path().join("list.json");
        fs::write(&manifest, r#"{"count": 2, "images": ["x.jpg", "y.webp"]}"#).unwrap();
        assert_eq!(ManifestSource::new(&manifest).load().unwrap(), vec!["x.jpg", "y.webp"]);

        fs::write(&manifest, "{oops").unwrap();
        assert!(matches!(ManifestSource::new(&manifest).load(), Err(QuizError::Json(_))));
    }

    #[test]
    fn gallery_builds_urls() {
        let mut gallery = ImageGallery::new(counting(&["a.png", "b.png", "c.png"]));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(gallery.random_image(&mut rng).starts_with(IMAGE_BASE));
        assert_eq!(gallery.image_at(4), format!("{IMAGE_BASE}b.png"));
        assert_eq!(gallery.all_images().len(), 3);
    }

    #[test]
    fn random_images_are_distinct_while_possible() {
        let mut gallery = ImageGallery::new(counting(&["a.png", "b.png", "c.png"]));
        let mut rng = StdRng::seed_from_u64(2);
        let three = gallery.random_images(3, &mut rng);
        let unique: HashSet<&String> = three.iter().collect();
        assert_eq!(unique.len(), 3);
        assert_eq!(gallery.random_images(10, &mut rng).len(), 6);
    }

    struct Scripted(Vec<f64>);

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            self.0.remove(0)
        }
    }

    #[test]
    fn collisions_are_redrawn_not_shifted() {
        let mut gallery = ImageGallery::new(counting(&["a.png", "b.png", "c.png", "d.png"]));
        // Second draw repeats index 0; the third lands on index 2.
        let mut rng = Scripted(vec![0.0, 0.1, 0.6]);
        let picks = gallery.random_images(2, &mut rng);
        assert_eq!(
            picks,
            vec![format!("{IMAGE_BASE}a.png"), format!("{IMAGE_BASE}c.png")]
        );
        assert!(rng.0.is_empty());
    }

    #[test]
    fn empty_list_yields_default_image() {
        let mut gallery = ImageGallery::new(counting(&[]));
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(gallery.random_image(&mut rng), format!("{IMAGE_BASE}ultraman_0.jpg"));
        assert_eq!(gallery.random_images(4, &mut rng).len(), 1);
    }
}
