//! Reading image bytes for embedding.

use std::io;
use std::path::Path;

/// Source of image bytes.
///
/// The writer calls [`read`](Self::read) once per image element. Any
/// `Fn(&Path) -> io::Result<Vec<u8>>` closure works as a reader, which is
/// handy for tests and for images that live in memory.
pub trait ImageReader {
    /// Read the complete image file at `path`
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads images from the file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageReader;

impl ImageReader for FileImageReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

impl<F> ImageReader for F
where
    F: Fn(&Path) -> io::Result<Vec<u8>>,
{
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_reader() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG").unwrap();
        let bytes = FileImageReader.read(file.path()).unwrap();
        assert_eq!(bytes, b"\x89PNG");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileImageReader.read(&dir.path().join("missing.png")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_closure_reader() {
        let reader = |path: &Path| -> io::Result<Vec<u8>> {
            Ok(path.to_string_lossy().into_owned().into_bytes())
        };
        assert_eq!(reader.read(Path::new("x.png")).unwrap(), b"x.png");
    }
}
