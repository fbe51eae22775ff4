use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::error::AppError;

/// Reads a file as lines. Line endings (`\n` or `\r\n`) are dropped and a missing
/// final newline is accepted, so an empty file yields no lines at all.
pub fn read_lines(path: &Path) -> Result<Vec<String>, AppError> {
    let bytes = fs::read(path)?;
    let content =
        String::from_utf8(bytes).map_err(|_| AppError::InvalidFileContent(path.to_path_buf()))?;

    Ok(content.lines().map(str::to_owned).collect())
}

/// Truncates `path` and writes every line followed by `\n`. Not atomic, a failed
/// write leaves whatever was written so far.
pub fn write_lines<'a>(path: &Path, lines: impl IntoIterator<Item = &'a str>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()
}
