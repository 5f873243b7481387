//! Secure memory handling for sensitive text
//!
//! Passwords and opened plaintexts are kept in a [`SecureString`] so their
//! bytes are wiped when the value goes away.

use std::fmt;
use std::io::{self, Read};
use std::ops::Deref;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

const READ_CHUNK: usize = 4096;

/// A string type that zeros its contents on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecureString {
    inner: String,
}

impl SecureString {
    /// Create a new SecureString
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    /// Get the string contents
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Read a whole stream of UTF-8 text
    ///
    /// Every intermediate buffer is wiped, including the ones left behind
    /// when the buffer has to grow.
    pub fn read_from<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut buffer = Zeroizing::new(Vec::<u8>::with_capacity(READ_CHUNK));
        let mut chunk = Zeroizing::new([0u8; READ_CHUNK]);

        loop {
            let n = match reader.read(&mut chunk[..]) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if buffer.len() + n > buffer.capacity() {
                let capacity = (buffer.len() + n).max(buffer.capacity() * 2);
                let mut grown = Zeroizing::new(Vec::<u8>::with_capacity(capacity));
                grown.extend_from_slice(&buffer);
                buffer = grown;
            }
            buffer.extend_from_slice(&chunk[..n]);
        }

        let text = std::str::from_utf8(&buffer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Self::new(text))
    }

    /// Remove one trailing line ending (`\n` or `\r\n`), in place
    pub fn trim_line_ending(&mut self) {
        if self.inner.ends_with('\n') {
            self.inner.pop();
            if self.inner.ends_with('\r') {
                self.inner.pop();
            }
        }
    }
}

impl Deref for SecureString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<str> for SecureString {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq for SecureString {
    fn eq(&self, other: &Self) -> bool {
        self.inner.as_bytes().ct_eq(other.inner.as_bytes()).into()
    }
}

impl Eq for SecureString {}

// Don't print the contents in Debug output
impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("len", &self.inner.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}
