//! Read-only tape data and its derived size.

use std::path::Path;

use crate::error::{Result, TapeError};
use crate::geometry::TapeGeometry;

/// Raw tape bytes, one byte per column, plus the geometry they are laid out with.
///
/// Width and height are computed once in `load` and never change.
#[derive(Debug, Clone)]
pub struct TapeModel {
    bytes: Vec<u8>,
    geometry: TapeGeometry,
    tape_width: i64,
    tape_height: i64,
}

impl TapeModel {
    /// Builds a model over an in-memory buffer.
    ///
    /// # Errors
    /// Returns `InvalidInput` for an empty buffer or an unusable geometry.
    pub fn load(bytes: Vec<u8>, geometry: TapeGeometry) -> Result<Self> {
        geometry.validate()?;
        if bytes.is_empty() {
            return Err(TapeError::InvalidInput("tape data is empty".to_string()));
        }

        let tape_width = geometry.tape_width(bytes.len());
        let tape_height = geometry.tape_height();
        tracing::debug!(
            bytes = bytes.len(),
            tape_width,
            tape_height,
            "tape model loaded"
        );

        Ok(Self {
            bytes,
            geometry,
            tape_width,
            tape_height,
        })
    }

    /// Reads the whole file in one go and builds a model from it.
    ///
    /// # Errors
    /// `FileNotFound`/`FileUnreadable` for I/O failures, `InvalidInput` for
    /// an empty file.
    pub fn open(path: &Path, geometry: TapeGeometry) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| TapeError::from_io(path, e))?;
        Self::load(bytes, geometry)
    }

    /// Returns the byte at column `index`.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` past the end of the tape.
    pub fn byte_at(&self, index: usize) -> Result<u8> {
        self.bytes
            .get(index)
            .copied()
            .ok_or(TapeError::IndexOutOfRange {
                index,
                len: self.bytes.len(),
            })
    }

    pub fn byte_count(&self) -> usize {
        self.bytes.len()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn geometry(&self) -> &TapeGeometry {
        &self.geometry
    }

    pub fn tape_width(&self) -> i64 {
        self.tape_width
    }

    pub fn tape_height(&self) -> i64 {
        self.tape_height
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_computes_size_once() {
        let model = TapeModel::load(vec![1, 2, 3], TapeGeometry::default()).unwrap();
        assert_eq!(model.byte_count(), 3);
        assert_eq!(model.tape_width(), 3 * 15 + 100);
        assert_eq!(model.tape_height(), 170);
    }

    #[test]
    fn test_tape_height_ignores_byte_count() {
        let short = TapeModel::load(vec![0; 1], TapeGeometry::default()).unwrap();
        let long = TapeModel::load(vec![0; 5000], TapeGeometry::default()).unwrap();
        assert_eq!(short.tape_height(), long.tape_height());
        assert_eq!(long.tape_width(), 5000 * 15 + 100);
    }

    #[test]
    fn test_empty_buffer_is_invalid() {
        let err = TapeModel::load(Vec::new(), TapeGeometry::default()).unwrap_err();
        assert!(matches!(err, TapeError::InvalidInput(_)));
    }

    #[test]
    fn test_byte_at_bounds() {
        let model = TapeModel::load(vec![0xAA, 0x55], TapeGeometry::default()).unwrap();
        assert_eq!(model.byte_at(0).unwrap(), 0xAA);
        assert_eq!(model.byte_at(1).unwrap(), 0x55);
        assert!(matches!(
            model.byte_at(2),
            Err(TapeError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TapeModel::open(&dir.path().join("nope.bin"), TapeGeometry::default())
            .unwrap_err();
        assert!(matches!(err, TapeError::FileNotFound { .. }));
    }

    #[test]
    fn test_open_reads_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0x00, 0x80, 0x01]).unwrap();
        let model = TapeModel::open(file.path(), TapeGeometry::default()).unwrap();
        assert_eq!(model.bytes(), &[0xFF, 0x00, 0x80, 0x01]);
    }

    #[test]
    fn test_open_empty_file_is_invalid() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = TapeModel::open(file.path(), TapeGeometry::default()).unwrap_err();
        assert!(matches!(err, TapeError::InvalidInput(_)));
    }
}
