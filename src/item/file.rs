use std::{
    cell::RefCell,
    fs::{self, File},
    io::{Read, Write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    core::item::{TextSink, TextSource},
    error::MapperError,
};

/// Reads the whole content of a file.
pub struct FileTextSource {
    path: PathBuf,
}

impl FileTextSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TextSource for FileTextSource {
    fn read_text(&self) -> Result<String, MapperError> {
        debug!("Reading {}", self.path.display());
        fs::read_to_string(&self.path)
            .map_err(|error| MapperError::Io(format!("{}: {}", self.path.display(), error)))
    }
}

/// Writes text to a file, creating it or truncating an existing one.
pub struct FileTextSink {
    path: PathBuf,
}

impl FileTextSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TextSink for FileTextSink {
    fn write_text(&self, text: &str) -> Result<(), MapperError> {
        debug!("Writing {} bytes to {}", text.len(), self.path.display());
        let mut file = File::create(&self.path)
            .map_err(|error| MapperError::Io(format!("{}: {}", self.path.display(), error)))?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

/// Reads the whole content of any [`Read`] implementation.
///
/// The stream is consumed by the first call; later calls return the
/// remaining (usually empty) text.
pub struct StreamTextSource<R: Read> {
    stream: RefCell<R>,
}

impl<R: Read> StreamTextSource<R> {
    pub fn new(stream: R) -> Self {
        Self {
            stream: RefCell::new(stream),
        }
    }
}

impl<R: Read> TextSource for StreamTextSource<R> {
    fn read_text(&self) -> Result<String, MapperError> {
        let mut text = String::new();
        self.stream.borrow_mut().read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Writes text to any [`Write`] implementation.
pub struct StreamTextSink<W: Write> {
    stream: RefCell<W>,
}

impl<W: Write> StreamTextSink<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream: RefCell::new(stream),
        }
    }

    pub fn into_inner(self) -> W {
        self.stream.into_inner()
    }
}

impl<W: Write> TextSink for StreamTextSink<W> {
    fn write_text(&self, text: &str) -> Result<(), MapperError> {
        self.stream.borrow_mut().write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), MapperError> {
        self.stream.borrow_mut().flush()?;
        Ok(())
    }
}
