//! Output destination for the command-line tool

use crate::error::Result;
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Output writer that handles file vs stdout
pub struct OutputWriter {
    file: Option<PathBuf>,
}

impl OutputWriter {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    /// Open the configured destination for writing
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match &self.file {
            Some(path) => {
                debug!("writing output to {}", path.display());
                Ok(Box::new(BufWriter::new(File::create(path)?)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }

    /// Write content to configured output
    pub fn write(&self, content: &str) -> Result<()> {
        let mut out = self.open()?;
        out.write_all(content.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
