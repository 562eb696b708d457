use memmap2::Mmap;
use std::{fs::File, io, path::Path};

pub fn open_memory_mapped_file(file_path: &Path) -> Result<Mmap, io::Error> {
    let file = File::open(file_path)?;
    unsafe { Mmap::map(&file) }
}

/// Maps `file_path` and hands its contents to `parse` as text. Bytes that
/// are not valid UTF-8 are replaced rather than rejected, since movie
/// databases in the wild are often Latin-1.
pub fn read_mapped_text<T>(file_path: &Path, parse: impl FnOnce(&str) -> T) -> io::Result<T> {
    if std::fs::metadata(file_path)?.len() == 0 {
        return Ok(parse(""));
    }

    let mapped = open_memory_mapped_file(file_path)?;
    let text = String::from_utf8_lossy(&mapped);
    Ok(parse(&text))
}
