//! Output destinations for generated code.
//!
//! A [`CodeSink`] creates append-only [`OutputStream`]s keyed by package and
//! file name. Generators hold a stream through an [`OutputUnit`], which makes
//! sure the stream is closed on every exit path.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use fungen_core::{GeneratedFile, package_path};

/// Creates output streams.
pub trait CodeSink {
    /// Open a new stream for `<package>.<file_name>`.
    fn open(&mut self, package: &str, file_name: &str) -> Result<Box<dyn OutputStream + '_>>;
}

/// Append-only UTF-8 text destination.
pub trait OutputStream {
    fn append(&mut self, text: &str) -> Result<()>;

    /// Finalize the stream. No text may be appended afterwards.
    fn close(self: Box<Self>) -> Result<()>;
}

/// Scoped ownership of one open stream.
///
/// [`close`](Self::close) finalizes the stream and reports failures. A unit
/// that is dropped without being closed (for example on an early `?` return)
/// closes its stream on drop and discards the close error.
pub struct OutputUnit<'a> {
    stream: Option<Box<dyn OutputStream + 'a>>,
}

impl<'a> OutputUnit<'a> {
    pub fn open(sink: &'a mut dyn CodeSink, package: &str, file_name: &str) -> Result<Self> {
        let stream = sink.open(package, file_name)?;
        Ok(Self {
            stream: Some(stream),
        })
    }

    pub fn append(&mut self, text: &str) -> Result<()> {
        match self.stream.as_mut() {
            Some(stream) => stream.append(text),
            None => Err(eyre!("output unit is already closed")),
        }
    }

    pub fn close(mut self) -> Result<()> {
        match self.stream.take() {
            Some(stream) => stream.close(),
            None => Ok(()),
        }
    }
}

impl Drop for OutputUnit<'_> {
    fn drop(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = stream.close();
        }
    }
}

/// A file collected by [`MemorySink`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFile {
    pub package: String,
    pub file_name: String,
    pub content: String,
    pub closed: bool,
}

/// Sink that keeps every opened file in memory.
///
/// Used for previews and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Vec<MemoryFile>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files in the order they were opened.
    pub fn files(&self) -> &[MemoryFile] {
        &self.files
    }

    pub fn into_files(self) -> Vec<MemoryFile> {
        self.files
    }

    /// Content of the file opened for `package` and `file_name`.
    pub fn content(&self, package: &str, file_name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.package == package && f.file_name == file_name)
            .map(|f| f.content.as_str())
    }
}

impl CodeSink for MemorySink {
    fn open(&mut self, package: &str, file_name: &str) -> Result<Box<dyn OutputStream + '_>> {
        self.files.push(MemoryFile {
            package: package.to_string(),
            file_name: file_name.to_string(),
            ..MemoryFile::default()
        });
        let file = self
            .files
            .last_mut()
            .ok_or_else(|| eyre!("memory sink lost the file it just opened"))?;
        Ok(Box::new(MemoryStream { file }))
    }
}

struct MemoryStream<'a> {
    file: &'a mut MemoryFile,
}

impl OutputStream for MemoryStream<'_> {
    fn append(&mut self, text: &str) -> Result<()> {
        self.file.content.push_str(text);
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<()> {
        let MemoryStream { file } = *self;
        file.closed = true;
        Ok(())
    }
}

/// A Kotlin source file under a source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KotlinSource {
    pub package: String,
    pub file_name: String,
    pub content: String,
}

impl GeneratedFile for KotlinSource {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(package_path(&self.package))
            .join(format!("{}.kt", self.file_name))
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Sink that writes `<root>/<package path>/<file_name>.kt` when a stream is closed.
#[derive(Debug)]
pub struct FileSink {
    root: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths written so far, in close order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl CodeSink for FileSink {
    fn open(&mut self, package: &str, file_name: &str) -> Result<Box<dyn OutputStream + '_>> {
        Ok(Box::new(FileStream {
            root: &self.root,
            written: &mut self.written,
            source: KotlinSource {
                package: package.to_string(),
                file_name: file_name.to_string(),
                content: String::new(),
            },
        }))
    }
}

struct FileStream<'a> {
    root: &'a Path,
    written: &'a mut Vec<PathBuf>,
    source: KotlinSource,
}

impl OutputStream for FileStream<'_> {
    fn append(&mut self, text: &str) -> Result<()> {
        self.source.content.push_str(text);
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<()> {
        let FileStream {
            root,
            written,
            source,
        } = *self;
        let path = source.write(root)?;
        written.push(path);
        Ok(())
    }
}
