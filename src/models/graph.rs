use std::path::{Path, PathBuf};
use std::sync::Arc;

/// In-memory handle to a graph image fetched from the analytics service.
///
/// Cloning is cheap: the bytes are shared. The image is released when the
/// last handle (and every message holding one) is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphImage {
    graph_id: String,
    content_type: Option<String>,
    data: Arc<[u8]>,
}

impl GraphImage {
    pub fn new(graph_id: impl Into<String>, content_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            graph_id: graph_id.into(),
            content_type,
            data: Arc::from(data),
        }
    }

    pub fn graph_id(&self) -> &str {
        &self.graph_id
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// File extension derived from the content type; the service serves PNG.
    pub fn file_extension(&self) -> &'static str {
        match self.content_type() {
            Some(ct) if ct.starts_with("image/jpeg") => "jpg",
            Some(ct) if ct.starts_with("image/svg") => "svg",
            Some(ct) if ct.starts_with("image/gif") => "gif",
            Some(ct) if ct.starts_with("image/webp") => "webp",
            _ => "png",
        }
    }

    /// Write the image into `dir` as `<graph id>.<ext>`.
    ///
    /// Path separators in the graph id are replaced so the file always lands
    /// directly inside `dir`.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let stem: String = self
            .graph_id
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        let path = dir.join(format!("{}.{}", stem, self.file_extension()));
        std::fs::write(&path, self.bytes())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clone_shares_bytes() {
        let image = GraphImage::new("g1", None, vec![1, 2, 3]);
        let copy = image.clone();
        assert_eq!(copy.bytes(), &[1, 2, 3]);
        assert_eq!(image.len(), 3);
        assert!(!image.is_empty());
    }

    #[test]
    fn test_file_extension_from_content_type() {
        let png = GraphImage::new("g", Some("image/png".to_string()), vec![]);
        let jpeg = GraphImage::new("g", Some("image/jpeg".to_string()), vec![]);
        let unknown = GraphImage::new("g", None, vec![]);
        assert_eq!(png.file_extension(), "png");
        assert_eq!(jpeg.file_extension(), "jpg");
        assert_eq!(unknown.file_extension(), "png");
    }

    #[test]
    fn test_write_to_sanitizes_graph_id() {
        let dir = TempDir::new().unwrap();
        let image = GraphImage::new("../weird/id", Some("image/png".to_string()), vec![7, 8]);
        let path = image.write_to(dir.path()).unwrap();
        assert_eq!(path.parent().unwrap(), dir.path());
        assert_eq!(std::fs::read(&path).unwrap(), vec![7, 8]);
    }
}
