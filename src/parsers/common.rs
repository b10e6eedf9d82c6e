use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::LoadError;

/// Reads a corpus file into memory with a buffer sized to the file.
pub fn read_source(path: &Path) -> Result<String, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let file_size = file.metadata().map_err(io_err)?.len() as usize;

    let mut reader = BufReader::with_capacity(file_size.clamp(1, 8192), file);
    let mut content = String::with_capacity(file_size);
    reader.read_to_string(&mut content).map_err(io_err)?;
    Ok(content)
}

/// Strips a UTF-8 byte order mark, which some exporters prepend.
pub fn strip_bom(source: &str) -> &str {
    source.strip_prefix('\u{feff}').unwrap_or(source)
}
