//! Incremental decoding of whitespace-separated values
//!
//! Text content reaches the reader in arbitrary fragments: a number such as
//! `1.25` may arrive as `1.` followed by `25`. A [`ChunkReader`] buffers the
//! partial token at the end of each fragment and emits every complete token
//! exactly once, in order.

use crate::error::{Error, Result};

/// A value that can be decoded from a single whitespace-free token
pub trait Token: Sized {
    /// Decode one token
    fn decode(token: &str) -> Result<Self>;
}

impl Token for f64 {
    fn decode(token: &str) -> Result<Self> {
        token
            .parse::<f64>()
            .map_err(|_| Error::malformed_value("float value", token, "floating-point number"))
    }
}

impl Token for u32 {
    fn decode(token: &str) -> Result<Self> {
        token
            .parse::<u32>()
            .map_err(|_| Error::malformed_value("index value", token, "non-negative integer"))
    }
}

impl Token for String {
    fn decode(token: &str) -> Result<Self> {
        Ok(token.to_string())
    }
}

/// XML whitespace: space, tab, carriage return and line feed
pub(crate) fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Streaming tokenizer for whitespace-separated lists
#[derive(Debug, Default)]
pub struct ChunkReader<T> {
    pending: String,
    _token: std::marker::PhantomData<T>,
}

/// Decodes `<float_array>` and color content
pub type ChunkFloatReader = ChunkReader<f64>;
/// Decodes `<p>` index buffers
pub type ChunkIntReader = ChunkReader<u32>;
/// Decodes `<Name_array>` content
pub type ChunkStringReader = ChunkReader<String>;

impl<T: Token> ChunkReader<T> {
    /// Create a reader with no pending input
    pub fn new() -> Self {
        Self {
            pending: String::new(),
            _token: std::marker::PhantomData,
        }
    }

    /// Feed the next text fragment, emitting each token completed by it
    ///
    /// A token touching the end of the fragment is held back until
    /// whitespace or [`ChunkReader::finish`] ends it.
    ///
    /// # Example
    ///
    /// ```
    /// use collada::parser::ChunkFloatReader;
    ///
    /// let mut reader = ChunkFloatReader::new();
    /// let mut values = Vec::new();
    /// reader.feed("1.5 2", |v| { values.push(v); Ok(()) }).unwrap();
    /// reader.feed("5 3", |v| { values.push(v); Ok(()) }).unwrap();
    /// reader.finish(|v| { values.push(v); Ok(()) }).unwrap();
    /// assert_eq!(values, vec![1.5, 25.0, 3.0]);
    /// ```
    pub fn feed<F>(&mut self, fragment: &str, mut emit: F) -> Result<()>
    where
        F: FnMut(T) -> Result<()>,
    {
        let mut rest = fragment;
        while let Some(pos) = rest.find(is_xml_whitespace) {
            self.pending.push_str(&rest[..pos]);
            self.flush(&mut emit)?;
            // Every XML whitespace character is a single byte
            rest = &rest[pos + 1..];
        }
        self.pending.push_str(rest);
        Ok(())
    }

    /// Emit the final pending token, if any
    pub fn finish<F>(&mut self, mut emit: F) -> Result<()>
    where
        F: FnMut(T) -> Result<()>,
    {
        self.flush(&mut emit)
    }

    /// True when a partial token is buffered
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    fn flush<F>(&mut self, emit: &mut F) -> Result<()>
    where
        F: FnMut(T) -> Result<()>,
    {
        if self.pending.is_empty() {
            return Ok(());
        }
        let value = T::decode(&self.pending);
        self.pending.clear();
        emit(value?)
    }
}
