//! Page image lookup.
//!
//! Pages are opaque image assets named `page01.jpg`, `page02.jpg`, ... in a
//! single directory. The core never opens these files; the paths are handed
//! to the image widget and a broken asset is purely a rendering concern.

use std::path::{Path, PathBuf};

/// Path of the image for a 1-based page index.
pub fn page_image_path(dir: &Path, page: usize, extension: &str) -> PathBuf {
    dir.join(format!("page{page:02}{extension}"))
}

/// Human-readable label for a page face.
pub fn page_label(page: usize) -> String {
    format!("Page {page}")
}
