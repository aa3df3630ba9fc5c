use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use crate::error::ScanError;

use self::scope::ScopeCall;

mod scope;

/// An open input stream. The underlying handle is released when the `Source`
/// is dropped, whichever way the caller leaves its scope.
pub struct Source<R> {
    reader: R,
    path: PathBuf,
    // dropped after `reader`, so it fires once the handle is already closed
    _release: ScopeCall<Box<dyn FnOnce()>>,
}

impl<R: BufRead> Source<R> {
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self {
            reader,
            path,
            _release: ScopeCall::new(Box::new(move || log::debug!("released {}", label))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Opens `path` for buffered reading.
pub fn open(path: impl AsRef<Path>) -> Result<Source<BufReader<File>>, ScanError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("opened {}", path.display());
    Ok(Source::new(BufReader::new(file), path))
}

impl<R: BufRead> Read for Source<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl<R: BufRead> BufRead for Source<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.reader.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn open_missing_file_should_fail() {
        let path = std::env::temp_dir().join("namescan-definitely-missing.txt");
        match open(&path) {
            Err(ScanError::Open { path: p, source }) => {
                assert_eq!(path, p);
                assert_eq!(io::ErrorKind::NotFound, source.kind());
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("expected open to fail"),
        }
    }

    #[test]
    fn source_reads_through() {
        let mut source = Source::new(Cursor::new("Alice Smith\n"), "names.txt");
        let mut line = String::new();
        source.read_line(&mut line).unwrap();
        assert_eq!("Alice Smith\n", line);
        assert_eq!(Path::new("names.txt"), source.path());
    }
}
