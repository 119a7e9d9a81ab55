//! Ingestion configuration

/// Options controlling how delimited text is read.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Single-byte field delimiter.
    pub delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
