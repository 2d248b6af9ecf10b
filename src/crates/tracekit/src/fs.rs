//! File descriptor wrapper with a uniform interface across platforms.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};

use tracing::debug;

use crate::{traced, Result, TraceContext, UtilsError};

/// How a [`FileDescriptor`] was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// `'r'`
    Read,
    /// `'w'`, creates or truncates the file
    Write,
}

impl TryFrom<char> for OpenMode {
    type Error = UtilsError;

    fn try_from(mode: char) -> Result<Self> {
        match mode {
            'r' => Ok(OpenMode::Read),
            'w' => Ok(OpenMode::Write),
            other => Err(traced!(
                UtilsError,
                "Invalid open mode: [{}], supported modes: ['r', 'w']",
                other
            )),
        }
    }
}

impl From<OpenMode> for char {
    fn from(mode: OpenMode) -> char {
        match mode {
            OpenMode::Read => 'r',
            OpenMode::Write => 'w',
        }
    }
}

/// Origin for [`FileDescriptor::seek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Whence {
    /// `'b'`
    #[default]
    Begin,
    /// `'e'`
    End,
    /// `'c'`
    Current,
}

impl TryFrom<char> for Whence {
    type Error = UtilsError;

    fn try_from(whence: char) -> Result<Self> {
        match whence {
            'b' => Ok(Whence::Begin),
            'e' => Ok(Whence::End),
            'c' => Ok(Whence::Current),
            other => Err(traced!(
                UtilsError,
                "Invalid seek whence: [{}], supported: ['b', 'e', 'c']",
                other
            )),
        }
    }
}

/// Owned handle to an open file.
///
/// Closed on drop. Movable but not clonable, so exactly one owner can
/// read, write or close it.
#[derive(Debug)]
pub struct FileDescriptor {
    file: Option<File>,
    file_path: String,
    mode: OpenMode,
}

impl FileDescriptor {
    /// Open `file_path` for reading (`'r'`) or writing (`'w'`).
    ///
    /// ```rust,ignore
    /// use tracekit::fs::{FileDescriptor, OpenMode};
    ///
    /// let mut fd = FileDescriptor::open("out.txt", OpenMode::try_from('w')?)?;
    /// fd.write(b"foo")?;
    /// ```
    pub fn open(file_path: impl Into<String>, mode: OpenMode) -> Result<Self> {
        let file_path = file_path.into();
        let opened = match mode {
            OpenMode::Read => OpenOptions::new().read(true).open(&file_path),
            OpenMode::Write => OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&file_path),
        };
        let file = opened.map_err(|e| {
            traced!(
                UtilsError,
                "Error opening file descriptor: [{}], for path: [{}], mode: [{}]",
                e,
                file_path,
                char::from(mode)
            )
        })?;
        debug!(path = %file_path, ?mode, "File descriptor opened");
        Ok(Self {
            file: Some(file),
            file_path,
            mode,
        })
    }

    /// Read up to `buf.len()` bytes; `Ok(0)` means end of file.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let path = &self.file_path;
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| closed_error(path))
            .trace_as::<UtilsError>(crate::call_site!())?;
        file.read(buf).map_err(|e| {
            traced!(
                UtilsError,
                "Error reading from file: [{}], error: [{}]",
                path,
                e
            )
        })
    }

    /// Write the whole of `buf`, returning the number of bytes written.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let path = &self.file_path;
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| closed_error(path))
            .trace_as::<UtilsError>(crate::call_site!())?;
        file.write_all(buf).map_err(|e| {
            traced!(
                UtilsError,
                "Error writing to file: [{}], error: [{}]",
                path,
                e
            )
        })?;
        Ok(buf.len())
    }

    /// Move the cursor and return the new offset from the start of the file.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<u64> {
        let path = &self.file_path;
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| closed_error(path))
            .trace_as::<UtilsError>(crate::call_site!())?;
        let pos = match whence {
            Whence::Begin => {
                let start = u64::try_from(offset).map_err(|_| {
                    traced!(
                        UtilsError,
                        "Negative offset: [{}] from file start, file: [{}]",
                        offset,
                        path
                    )
                })?;
                SeekFrom::Start(start)
            }
            Whence::End => SeekFrom::End(offset),
            Whence::Current => SeekFrom::Current(offset),
        };
        file.seek(pos).map_err(|e| {
            traced!(
                UtilsError,
                "Error seeking in file: [{}], offset: [{}], whence: [{:?}], error: [{}]",
                path,
                offset,
                whence,
                e
            )
        })
    }

    /// Writes are unbuffered, so this only checks that the descriptor is
    /// still open.
    pub fn flush(&mut self) -> Result<()> {
        self.file
            .as_ref()
            .map(|_| ())
            .ok_or_else(|| closed_error(&self.file_path))
            .trace_as::<UtilsError>(crate::call_site!())
    }

    /// Size of the file in bytes.
    pub fn size(&self) -> Result<u64> {
        let file = self
            .file
            .as_ref()
            .ok_or_else(|| closed_error(&self.file_path))
            .trace_as::<UtilsError>(crate::call_site!())?;
        let meta = file.metadata().map_err(|e| {
            traced!(
                UtilsError,
                "Error getting size of file: [{}], error: [{}]",
                self.file_path,
                e
            )
        })?;
        Ok(meta.len())
    }

    /// Close the underlying handle. Calling it again is a no-op.
    pub fn close(&mut self) {
        if self.file.take().is_some() {
            debug!(path = %self.file_path, "File descriptor closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }
}

fn closed_error(path: &str) -> UtilsError {
    traced!(UtilsError, "Attempt to use closed file: [{}]", path)
}

fn into_io(err: UtilsError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err)
}

impl Read for FileDescriptor {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        FileDescriptor::read(self, buf).map_err(into_io)
    }
}

impl Write for FileDescriptor {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        FileDescriptor::write(self, buf).map_err(into_io)
    }

    fn flush(&mut self) -> io::Result<()> {
        FileDescriptor::flush(self).map_err(into_io)
    }
}

impl Seek for FileDescriptor {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (offset, whence) = match pos {
            SeekFrom::Start(n) => (
                i64::try_from(n).map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidInput, "seek offset overflows i64")
                })?,
                Whence::Begin,
            ),
            SeekFrom::End(n) => (n, Whence::End),
            SeekFrom::Current(n) => (n, Whence::Current),
        };
        FileDescriptor::seek(self, offset, whence).map_err(into_io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_path(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_mode_from_char() {
        assert_eq!(OpenMode::try_from('r').unwrap(), OpenMode::Read);
        assert_eq!(OpenMode::try_from('w').unwrap(), OpenMode::Write);
        let err = OpenMode::try_from('x').unwrap_err();
        assert!(err.what().starts_with("Invalid open mode: [x]"));
    }

    #[test]
    fn test_whence_from_char() {
        assert_eq!(Whence::try_from('b').unwrap(), Whence::Begin);
        assert_eq!(Whence::try_from('e').unwrap(), Whence::End);
        assert_eq!(Whence::try_from('c').unwrap(), Whence::Current);
        assert!(Whence::try_from('z').is_err());
        assert_eq!(Whence::default(), Whence::Begin);
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "fd_test.txt");

        let mut out = FileDescriptor::open(path.clone(), OpenMode::Write).unwrap();
        assert_eq!(out.write(b"foobar").unwrap(), 6);
        out.flush().unwrap();
        assert_eq!(out.size().unwrap(), 6);
        assert_eq!(out.mode(), OpenMode::Write);
        out.close();

        let mut input = FileDescriptor::open(path.clone(), OpenMode::Read).unwrap();
        assert_eq!(input.file_path(), path);
        assert_eq!(input.seek(3, Whence::Begin).unwrap(), 3);

        let mut buf = [0u8; 16];
        let read = input.read(&mut buf).unwrap();
        assert_eq!(&buf[..read], b"bar");
        assert_eq!(input.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_seek_from_end_and_current() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "seek.txt");
        std::fs::write(&path, b"0123456789").unwrap();

        let mut fd = FileDescriptor::open(path, OpenMode::Read).unwrap();
        assert_eq!(fd.seek(-2, Whence::End).unwrap(), 8);
        assert_eq!(fd.seek(-3, Whence::Current).unwrap(), 5);
        assert!(fd.seek(-1, Whence::Begin).is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "missing.txt");
        let err = FileDescriptor::open(path.clone(), OpenMode::Read).unwrap_err();
        let lines: Vec<&str> = err.what().lines().collect();
        assert!(lines[0].contains(&format!("for path: [{}], mode: [r]", path)));
        assert!(lines[1].starts_with("    at tracekit::fs::FileDescriptor::open(fs.rs:"));
    }

    #[test]
    fn test_closed_descriptor_is_traced() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "closed.txt");
        let mut fd = FileDescriptor::open(path, OpenMode::Write).unwrap();
        fd.close();
        fd.close();
        assert!(!fd.is_open());

        let err = fd.write(b"x").unwrap_err();
        let lines: Vec<&str> = err.what().lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Attempt to use closed file"));
        assert!(lines[1].starts_with("    at tracekit::fs::closed_error(fs.rs:"));
        assert!(lines[2].starts_with("    at tracekit::fs::FileDescriptor::write(fs.rs:"));

        let err = fd.flush().unwrap_err();
        let lines: Vec<&str> = err.what().lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Attempt to use closed file"));
        assert!(lines[2].starts_with("    at tracekit::fs::FileDescriptor::flush(fs.rs:"));

        assert!(fd.size().is_err());
        assert!(fd.seek(0, Whence::Begin).is_err());
    }

    #[test]
    fn test_io_traits() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "io.txt");

        let mut out = FileDescriptor::open(path.clone(), OpenMode::Write).unwrap();
        writeln!(out, "hello").unwrap();
        drop(out);

        let mut input = FileDescriptor::open(path, OpenMode::Read).unwrap();
        let mut text = String::new();
        input.read_to_string(&mut text).unwrap();
        assert_eq!(text, "hello\n");
        assert_eq!(Seek::seek(&mut input, SeekFrom::Start(1)).unwrap(), 1);
    }

    #[test]
    fn test_descriptor_moves_between_threads() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "moved.txt");
        let mut fd = FileDescriptor::open(path.clone(), OpenMode::Write).unwrap();

        let handle = std::thread::spawn(move || {
            fd.write(b"abc").unwrap();
            fd.size().unwrap()
        });
        assert_eq!(handle.join().unwrap(), 3);
        assert_eq!(std::fs::read(path).unwrap(), b"abc");
    }
}
