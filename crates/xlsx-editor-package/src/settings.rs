//! Document open/save settings

use zip::CompressionMethod;

/// ZIP compression used for every entry when a document is saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartCompression {
    /// No compression
    Stored,
    /// Deflate (what spreadsheet applications write)
    #[default]
    Deflated,
}

impl PartCompression {
    pub(crate) fn method(self) -> CompressionMethod {
        match self {
            PartCompression::Stored => CompressionMethod::Stored,
            PartCompression::Deflated => CompressionMethod::Deflated,
        }
    }
}

/// Settings applied when opening a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentSettings {
    /// Allow mutable access and saving
    pub editable: bool,
    /// Compression used on save
    pub compression: PartCompression,
}

impl DocumentSettings {
    /// Settings for a read-only document
    pub fn read_only() -> Self {
        Self::default()
    }

    /// Settings for an editable document
    pub fn editable() -> Self {
        Self {
            editable: true,
            ..Self::default()
        }
    }

    /// Builder-style setter for the save compression
    pub fn with_compression(mut self, compression: PartCompression) -> Self {
        self.compression = compression;
        self
    }
}

impl From<bool> for DocumentSettings {
    fn from(editable: bool) -> Self {
        Self {
            editable,
            ..Self::default()
        }
    }
}
