use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Static bundle with single-page-app fallback: any path that is not a
/// file in `dist_dir` gets `index.html`.
pub fn service(dist_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")))
}
