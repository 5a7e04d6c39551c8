//! Contains the code related to the source code input.

use std::{
    cmp::Ordering,
    fmt::Debug,
    iter::Peekable,
    ops::Range,
    path::{Path, PathBuf},
    str::CharIndices,
    sync::Arc,
};

use getset::{CopyGetters, Getters};
use thiserror::Error;

/// Represents an error that occurs when loading a source text from the file system.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

/// Represents an immutable source text input for the checker.
///
/// The text is held in memory together with a precomputed table of line byte ranges, allowing
/// byte indices to be resolved to line/column [`Location`]s.
#[derive(Getters)]
pub struct SourceText {
    content: String,

    /// Gets the path that the source text originated from.
    ///
    /// Source texts created in memory report `<memory>`.
    #[get = "pub"]
    path: PathBuf,

    lines: Vec<Range<usize>>,
}

impl Debug for SourceText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceText")
            .field("path", &self.path)
            .field("lines", &self.lines)
            .finish()
    }
}

impl SourceText {
    /// Creates a new [`SourceText`] from the given content string.
    #[must_use]
    pub fn new(content: String, path: PathBuf) -> Arc<Self> {
        let lines = get_line_byte_positions(&content);
        Arc::new(Self {
            content,
            path,
            lines,
        })
    }

    /// Creates a [`SourceText`] that did not originate from the file system.
    #[must_use]
    pub fn memory(content: impl Into<String>) -> Arc<Self> {
        Self::new(content.into(), PathBuf::from("<memory>"))
    }

    /// Loads the source text from the given file path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when reading the file.
    /// - [`Error::Utf8Error`]: The file content is not valid UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Arc<Self>, Error> {
        let bytes = std::fs::read(path.as_ref())?;
        let content = String::from_utf8(bytes)?;

        Ok(Self::new(content, path.as_ref().to_owned()))
    }

    /// Gets the content of the source text.
    #[must_use]
    pub fn content(&self) -> &str { &self.content }

    /// Gets the line of the source text at the given line number.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        let line = line - 1;
        self.lines
            .get(line)
            .map(|range| &self.content[range.clone()])
    }

    /// Gets the number of lines in the source text.
    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.len() }

    /// Gets the [`Iterator`] for the source text.
    #[must_use]
    pub fn iter<'a>(self: &'a Arc<Self>) -> Iterator<'a> {
        Iterator {
            source_text: self,
            iterator: self.content.char_indices().peekable(),
        }
    }

    /// Gets the [`Location`] of the given byte index.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        if !self.content.is_char_boundary(byte_index) {
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

        let line_starting_byte_index = self.lines[line].start;
        let line_str = self.get_line(line + 1).unwrap();

        // gets the column number by iterating through the utf-8 characters (starts at 1)
        let column = line_str
            .char_indices()
            .take_while(|(i, _)| *i + line_starting_byte_index < byte_index)
            .count()
            + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }
}

/// Is an unsigned integer that represents a byte index in the source text.
pub type ByteIndex = usize;

/// Represents a range of characters in a source text.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the start byte index of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source text that the span is located in.
    #[get = "pub"]
    source_text: Arc<SourceText>,
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_text, &other.source_text)
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
        let self_ptr_value = Arc::as_ptr(&self.source_text) as usize;
        let other_ptr_value = Arc::as_ptr(&other.source_text) as usize;

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
        Arc::as_ptr(&self.source_text).hash(state);
    }
}

/// Is a struct pointing to a particular location in a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location (starts at 1).
    pub column: usize,
}

impl Span {
    /// Creates a span from the given start and end byte indices in the source text.
    ///
    /// # Parameters
    /// - `start`: The start byte index of the span.
    /// - `end`: The end byte index of the span (exclusive).
    #[must_use]
    pub fn new(source_text: Arc<SourceText>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        if start > end
            || !source_text.content.is_char_boundary(start)
            || source_text.content.len() < end
            || !source_text.content.is_char_boundary(end)
        {
            return None;
        }

        Some(Self {
            start,
            end,
            source_text,
        })
    }

    /// Creates a span from the given start byte index to the end of the source text.
    #[must_use]
    pub fn to_end(source_text: Arc<SourceText>, start: ByteIndex) -> Option<Self> {
        if !source_text.content.is_char_boundary(start) {
            return None;
        }
        Some(Self {
            start,
            end: source_text.content.len(),
            source_text,
        })
    }

    /// Gets the string slice of the source text that the span represents.
    #[must_use]
    pub fn str(&self) -> &str { &self.source_text.content[self.start..self.end] }

    /// Gets the starting [`Location`] of the span.
    #[must_use]
    pub fn start_location(&self) -> Location { self.source_text.get_location(self.start).unwrap() }

    /// Gets the ending [`Location`] of the span.
    ///
    /// Returns [`None`] if the end of the span is the end of the source text.
    #[must_use]
    pub fn end_location(&self) -> Option<Location> { self.source_text.get_location(self.end) }
}

/// Represents an element that is located within a source text.
pub trait SourceElement {
    /// Gets the span location of the element.
    fn span(&self) -> Span;
}

impl<T: SourceElement> SourceElement for Box<T> {
    fn span(&self) -> Span { self.as_ref().span() }
}

/// Is an iterator iterating over the characters in a source text that can be peeked at.
#[derive(Debug, Clone, CopyGetters)]
pub struct Iterator<'a> {
    /// Gets the source text that the iterator is iterating over.
    #[get_copy = "pub"]
    source_text: &'a Arc<SourceText>,
    iterator: Peekable<CharIndices<'a>>,
}

impl<'a> Iterator<'a> {
    /// Peeks at the next character in the source text.
    pub fn peek(&mut self) -> Option<(ByteIndex, char)> { self.iterator.peek().copied() }
}

impl<'a> std::iter::Iterator for Iterator<'a> {
    type Item = (ByteIndex, char);

    fn next(&mut self) -> Option<Self::Item> { self.iterator.next() }
}

fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    let mut skip = false;

    for (byte, char) in text.char_indices() {
        if skip {
            skip = false;
            continue;
        }

        // ordinary lf
        if char == '\n' {
            #[allow(clippy::range_plus_one)]
            results.push(current_position..byte + 1);

            current_position = byte + 1;
        }

        // crlf
        if char == '\r' {
            if text.as_bytes().get(byte + 1) == Some(&b'\n') {
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

#[cfg(test)]
mod tests;
