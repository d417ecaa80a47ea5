//! The mutable text buffer.
//!
//! This module provides [`StringBuilder`], a growable buffer that accepts any
//! [`Value`], coerces it to text (see [`crate::coerce`]), and optionally
//! enforces a hard capacity bound in chars.
//!
//! ## Capacity Discipline
//!
//! Every mutation measures its full text before touching the buffer. A
//! mutation that would pass the bound fails with
//! [`Error::CapacityExceeded`] and leaves the content as it was. Compound
//! operations (`append_line`, `append_join`) guard each sub-append
//! separately, so they can stop partway; the pieces already committed stay.
//!
//! ## Lengths Are Chars
//!
//! Capacity, [`len`](StringBuilder::len), insertion indices, and removal
//! ranges all count Unicode scalar values, not bytes. `"héllo"` occupies
//! five slots in a buffer whatever its UTF-8 size.
//!
//! ## Examples
//!
//! ```rust
//! use strbuilder::StringBuilder;
//!
//! let mut report = StringBuilder::new();
//! report.append("status: ").unwrap();
//! report.append(true).unwrap();
//! report.append(", codes: ").unwrap();
//! report.append(vec![200, 301]).unwrap();
//! assert_eq!(report.to_string(), "status: true, codes: 200,301");
//! ```

use std::fmt;

use crate::coerce::{coerce, NumberMode};
use crate::error::{Error, Result};
use crate::Value;

/// A growable text buffer with an optional hard capacity bound.
///
/// Mutations accept anything convertible to [`Value`] and return
/// `Result<&mut Self>`, so calls chain with `?`:
///
/// ```rust
/// use strbuilder::{Result, StringBuilder};
///
/// fn greeting() -> Result<StringBuilder> {
///     let mut builder = StringBuilder::new();
///     builder.append("Hello")?.append(' ')?.append("World")?;
///     Ok(builder)
/// }
///
/// assert_eq!(greeting().unwrap().to_string(), "Hello World");
/// ```
///
/// With a capacity bound, a rejected mutation leaves the buffer untouched:
///
/// ```rust
/// use strbuilder::StringBuilder;
///
/// let mut builder = StringBuilder::try_new("Hello", 10).unwrap();
/// assert!(builder.append(" World!").is_err());
/// assert_eq!(builder.to_string(), "Hello");
/// assert!(builder.append("World").is_ok());
/// assert_eq!(builder.to_string(), "HelloWorld");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringBuilder {
    content: String,
    // Char count of `content`, kept in step with every mutation so the
    // capacity guard never rescans the buffer.
    char_len: usize,
    max_capacity: Option<usize>,
}

impl StringBuilder {
    /// Creates an empty builder with no capacity bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder that will never grow past `max_capacity`
    /// chars.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strbuilder::StringBuilder;
    ///
    /// let mut builder = StringBuilder::with_max_capacity(5);
    /// assert!(builder.append("hello").is_ok());
    /// assert!(builder.append("!").is_err());
    /// ```
    #[must_use]
    pub fn with_max_capacity(max_capacity: usize) -> Self {
        StringBuilder {
            content: String::new(),
            char_len: 0,
            max_capacity: Some(max_capacity),
        }
    }

    /// Creates a builder holding `content` with a capacity bound.
    ///
    /// Fails with [`Error::InvalidCapacity`] if the initial content is
    /// already longer than `max_capacity` chars. A builder is never born
    /// over its bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strbuilder::{Error, StringBuilder};
    ///
    /// let builder = StringBuilder::try_new("Hello", 10).unwrap();
    /// assert_eq!(builder.len(), 5);
    /// assert_eq!(builder.max_capacity(), Some(10));
    ///
    /// let err = StringBuilder::try_new("Hello World", 5).unwrap_err();
    /// assert!(matches!(err, Error::InvalidCapacity { .. }));
    /// ```
    pub fn try_new(content: impl Into<String>, max_capacity: usize) -> Result<Self> {
        let content = content.into();
        let char_len = content.chars().count();
        if char_len > max_capacity {
            return Err(Error::InvalidCapacity {
                length: char_len,
                max_capacity,
            });
        }
        Ok(StringBuilder {
            content,
            char_len,
            max_capacity: Some(max_capacity),
        })
    }

    /// Appends a value's text to the end of the buffer.
    ///
    /// Numbers render as decimal text; use [`append_with`](Self::append_with)
    /// for byte mode. Fails with [`Error::CapacityExceeded`] if the coerced
    /// text would not fit, leaving the buffer unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strbuilder::StringBuilder;
    ///
    /// let mut builder = StringBuilder::new();
    /// builder.append(42).unwrap();
    /// builder.append(',').unwrap();
    /// builder.append(vec!["a", "b"]).unwrap();
    /// assert_eq!(builder.to_string(), "42,a,b");
    /// ```
    pub fn append(&mut self, value: impl Into<Value>) -> Result<&mut Self> {
        self.append_with(value, NumberMode::Decimal)
    }

    /// Appends a value's text under an explicit numeric mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strbuilder::{NumberMode, StringBuilder};
    ///
    /// let mut builder = StringBuilder::new();
    /// builder.append_with(65, NumberMode::Byte).unwrap();
    /// builder.append_with(300, NumberMode::Byte).unwrap();
    /// assert_eq!(builder.to_string(), "A300");
    /// ```
    pub fn append_with(&mut self, value: impl Into<Value>, mode: NumberMode) -> Result<&mut Self> {
        let text = coerce(&value.into(), mode);
        self.push_checked(&text)?;
        Ok(self)
    }

    /// Appends a value's text followed by a newline.
    pub fn append_line(&mut self, value: impl Into<Value>) -> Result<&mut Self> {
        self.append_line_with(value, NumberMode::Decimal)
    }

    /// Appends a value's text followed by a newline, under an explicit
    /// numeric mode.
    ///
    /// The value and the newline are guarded as two separate appends. When
    /// only the newline overflows, the call fails with the value already
    /// committed:
    ///
    /// ```rust
    /// use strbuilder::{NumberMode, StringBuilder};
    ///
    /// let mut builder = StringBuilder::with_max_capacity(5);
    /// assert!(builder
    ///     .append_line_with("hello", NumberMode::Decimal)
    ///     .is_err());
    /// assert_eq!(builder.to_string(), "hello");
    /// ```
    pub fn append_line_with(
        &mut self,
        value: impl Into<Value>,
        mode: NumberMode,
    ) -> Result<&mut Self> {
        self.append_with(value, mode)?;
        self.push_checked("\n")?;
        Ok(self)
    }

    /// Appends every value in `values`, comma-separated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strbuilder::StringBuilder;
    ///
    /// let mut builder = StringBuilder::new();
    /// builder.append_join([10, 20, 30]).unwrap();
    /// assert_eq!(builder.to_string(), "10,20,30");
    /// ```
    pub fn append_join<I>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.append_join_with(values, ",", NumberMode::Decimal)
    }

    /// Appends every value in `values` with a custom separator and numeric
    /// mode.
    ///
    /// The separator goes between consecutive values, never before the first
    /// or after the last. An empty iterator appends nothing. Unlike array
    /// coercion, the mode applies to each joined value, so byte-mode joins
    /// render char codes:
    ///
    /// ```rust
    /// use strbuilder::{NumberMode, StringBuilder};
    ///
    /// let mut builder = StringBuilder::new();
    /// builder
    ///     .append_join_with([65, 66], ",", NumberMode::Byte)
    ///     .unwrap();
    /// assert_eq!(builder.to_string(), "A,B");
    /// ```
    ///
    /// Each separator and value is guarded as its own append. On overflow
    /// the join stops there, keeping everything already committed.
    pub fn append_join_with<I>(
        &mut self,
        values: I,
        separator: &str,
        mode: NumberMode,
    ) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut first = true;
        for value in values {
            if first {
                first = false;
            } else {
                self.push_checked(separator)?;
            }
            let text = coerce(&value.into(), mode);
            self.push_checked(&text)?;
        }
        Ok(self)
    }

    /// Inserts a value's text at a char index.
    ///
    /// Indices past the end clamp to the end, so an oversized index appends.
    /// Existing content shifts right; nothing is overwritten.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strbuilder::StringBuilder;
    ///
    /// let mut builder = StringBuilder::from("0123");
    /// builder.insert(2, "x").unwrap();
    /// assert_eq!(builder.to_string(), "01x23");
    ///
    /// builder.insert(999, "!").unwrap();
    /// assert_eq!(builder.to_string(), "01x23!");
    /// ```
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<&mut Self> {
        self.insert_with(index, value, NumberMode::Decimal)
    }

    /// Inserts a value's text at a char index under an explicit numeric mode.
    pub fn insert_with(
        &mut self,
        index: usize,
        value: impl Into<Value>,
        mode: NumberMode,
    ) -> Result<&mut Self> {
        let text = coerce(&value.into(), mode);
        let added = text.chars().count();
        self.check_capacity(added)?;
        let at = self.byte_offset(index.min(self.char_len));
        self.content.insert_str(at, &text);
        self.char_len += added;
        Ok(self)
    }

    /// Removes `length` chars starting at `start_index`.
    ///
    /// The whole range must lie inside the current content; there is no
    /// clamping here. Fails with [`Error::InvalidRange`] otherwise, leaving
    /// the buffer unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strbuilder::StringBuilder;
    ///
    /// let mut builder = StringBuilder::from("0123456789");
    /// builder.remove(2, 3).unwrap();
    /// assert_eq!(builder.to_string(), "0156789");
    ///
    /// assert!(builder.remove(5, 10).is_err());
    /// assert_eq!(builder.to_string(), "0156789");
    /// ```
    pub fn remove(&mut self, start_index: usize, length: usize) -> Result<&mut Self> {
        let in_bounds = start_index
            .checked_add(length)
            .is_some_and(|end| end <= self.char_len);
        if !in_bounds {
            return Err(Error::InvalidRange {
                start: start_index,
                length,
                len: self.char_len,
            });
        }
        let from = self.byte_offset(start_index);
        let to = self.byte_offset(start_index + length);
        self.content.replace_range(from..to, "");
        self.char_len -= length;
        Ok(self)
    }

    /// Returns the buffer content as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Returns the length of the buffer in chars.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strbuilder::StringBuilder;
    ///
    /// let builder = StringBuilder::from("héllo");
    /// assert_eq!(builder.len(), 5);
    /// assert_eq!(builder.as_str().len(), 6); // bytes
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.char_len
    }

    /// Returns `true` if the buffer holds no content.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    /// Returns the capacity bound in chars, or `None` when unbounded.
    #[inline]
    #[must_use]
    pub const fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    /// Consumes the builder and returns its content.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.content
    }

    fn check_capacity(&self, added: usize) -> Result<()> {
        let Some(max_capacity) = self.max_capacity else {
            return Ok(());
        };
        if self.char_len + added > max_capacity {
            return Err(Error::CapacityExceeded {
                length: self.char_len,
                added,
                max_capacity,
            });
        }
        Ok(())
    }

    // Single commit point for end-of-buffer growth. Checks first, then
    // pushes, so a failed check cannot leave half an append behind.
    fn push_checked(&mut self, text: &str) -> Result<()> {
        let added = text.chars().count();
        self.check_capacity(added)?;
        self.content.push_str(text);
        self.char_len += added;
        Ok(())
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(at, _)| at)
    }
}

impl fmt::Display for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<&str> for StringBuilder {
    fn from(content: &str) -> Self {
        StringBuilder {
            char_len: content.chars().count(),
            content: content.to_string(),
            max_capacity: None,
        }
    }
}

impl From<String> for StringBuilder {
    fn from(content: String) -> Self {
        let char_len = content.chars().count();
        StringBuilder {
            content,
            char_len,
            max_capacity: None,
        }
    }
}
