//! Report file output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Write `content` to `path`, creating or truncating the file.
///
/// The file handle is closed when this returns, whether or not the write
/// succeeded.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
