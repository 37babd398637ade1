//! Contains the code related to the source code input.
//!
//! Source code is treated as a sequence of 8-bit characters. No encoding is assumed, so loading
//! a file never fails on its content, only on I/O.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    fs::File,
    ops::Range,
    path::PathBuf,
    sync::Arc,
};

use getset::{CopyGetters, Getters};
use memmap::{Mmap, MmapOptions};
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Represents a source file input for the lexer.
#[derive(Getters)]
pub struct SourceFile {
    source: MappedSource,

    /// Gets the full path to the source file.
    #[get = "pub"]
    full_path: PathBuf,

    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("lines", &self.lines)
            .finish()
    }
}

/// The bytes of a file, memory mapped unless the file is empty (empty files can't be mapped).
enum MappedSource {
    Mapped(Mmap),
    Empty,
}

impl MappedSource {
    fn create(file: &File) -> Result<Self, Error> {
        if file.metadata()?.len() == 0 {
            return Ok(Self::Empty);
        }

        // SAFETY: the mapping is read only; the file is not expected to be modified while the
        // source file is alive.
        let mapped = unsafe { MmapOptions::new().map(file)? };
        Ok(Self::Mapped(mapped))
    }

    fn content(&self) -> &[u8] {
        match self {
            Self::Mapped(mapped) => &mapped[..],
            Self::Empty => &[],
        }
    }
}

/// Converts the given bytes into a string, mapping each byte to the character with the same
/// code point.
#[must_use]
pub fn bytes_to_string(bytes: &[u8]) -> String { bytes.iter().copied().map(char::from).collect() }

impl SourceFile {
    fn new(full_path: PathBuf, source: MappedSource) -> Arc<Self> {
        let lines = get_line_byte_positions(source.content());
        Arc::new(Self {
            source,
            full_path,
            lines,
        })
    }

    /// Gets the raw content of the source file.
    #[must_use]
    pub fn content(&self) -> &[u8] { self.source.content() }

    /// Gets the bytes of the line at the given line number, including its line terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&[u8]> {
        if line == 0 {
            return None;
        }

        let line = line - 1;
        self.lines
            .get(line)
            .map(|range| &self.source.content()[range.clone()])
    }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Loads the source file from the given file path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        let source = MappedSource::create(&file)?;
        Ok(Self::new(path, source))
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("monkey")
            .suffix(".mk")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }

    /// Gets the [`Location`] of the given byte index.
    ///
    /// The index one past the last byte is the end of the source file and has no location.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        if byte_index >= self.source.content().len() {
            return None;
        }

        // gets the line number by binary searching the line ranges
        let line = self
            .lines
            .binary_search_by(|range| {
                if range.contains(&byte_index) {
                    Ordering::Equal
                } else if byte_index < range.start {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            })
            .ok()?;

        Some(Location {
            line: line + 1,
            column: byte_index - self.lines[line].start + 1,
        })
    }
}

/// Is an unsigned integer that represents a byte index in the source code.
pub type ByteIndex = usize;

/// Represents a range of bytes in a source file.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the start byte index of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.text())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Span {
    fn cmp(&self, other: &Self) -> Ordering {
        let self_ptr_value = Arc::as_ptr(&self.source_file) as usize;
        let other_ptr_value = Arc::as_ptr(&other.source_file) as usize;

        self_ptr_value
            .cmp(&other_ptr_value)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl std::hash::Hash for Span {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        Arc::as_ptr(&self.source_file).hash(state);
    }
}

/// Is a struct pointing to a particular location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location, counted in bytes (starts at 1).
    pub column: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Span {
    /// Creates a span from the given start and end byte indices in the source file.
    ///
    /// # Parameters
    /// - `start`: The start byte index of the span.
    /// - `end`: The end byte index of the span (exclusive).
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        if start > end || source_file.source.content().len() < end {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Creates a span from the given start byte index to the end of the source file.
    #[must_use]
    pub fn to_end(source_file: Arc<SourceFile>, start: ByteIndex) -> Option<Self> {
        let end = source_file.source.content().len();
        Self::new(source_file, start, end)
    }

    /// Gets the bytes of the source code that the span covers.
    #[must_use]
    pub fn bytes(&self) -> &[u8] { &self.source_file.source.content()[self.start..self.end] }

    /// Gets the source code that the span covers as a string (see [`bytes_to_string`]).
    #[must_use]
    pub fn text(&self) -> String { bytes_to_string(self.bytes()) }

    /// Checks whether the span covers no bytes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.start == self.end }

    /// Gets the starting [`Location`] of the span.
    ///
    /// Returns [`None`] if the span starts at the end of the source file.
    #[must_use]
    pub fn start_location(&self) -> Option<Location> { self.source_file.get_location(self.start) }

    /// Gets the ending [`Location`] of the span.
    ///
    /// Returns [`None`] if the end of the span is the end of the source file.
    #[must_use]
    pub fn end_location(&self) -> Option<Location> { self.source_file.get_location(self.end) }
}

/// Represents an element that is located within a source file.
pub trait SourceElement {
    /// Gets the span location of the element.
    fn span(&self) -> Span;
}

fn get_line_byte_positions(text: &[u8]) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    let mut skip = false;

    for (byte, &character) in text.iter().enumerate() {
        if skip {
            skip = false;
            continue;
        }

        // ordinary lf
        if character == b'\n' {
            #[allow(clippy::range_plus_one)]
            results.push(current_position..byte + 1);

            current_position = byte + 1;
        }

        // crlf
        if character == b'\r' {
            if text.get(byte + 1) == Some(&b'\n') {
                #[allow(clippy::range_plus_one)]
                results.push(current_position..byte + 2);

                current_position = byte + 2;

                skip = true;
            } else {
                #[allow(clippy::range_plus_one)]
                results.push(current_position..byte + 1);

                current_position = byte + 1;
            }
        }
    }

    results.push(current_position..text.len());

    results
}
