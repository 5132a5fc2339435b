//! Clearable storage for the password property.

use std::fmt;
use std::sync::atomic::{Ordering, compiler_fence};

/// An owned secret buffer that zeroes its contents when cleared or dropped.
///
/// The buffer is filled once at construction and never grows, so no stale
/// copies are left behind by reallocation. `Debug` never prints the
/// contents.
#[derive(Default)]
pub struct Secret {
    bytes: Vec<u8>,
}

impl Secret {
    /// Create a secret from a string value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            bytes: value.into().into_bytes(),
        }
    }

    /// Borrow the secret contents.
    pub fn expose(&self) -> &str {
        // The buffer originates from a `String`, so this cannot fail.
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }

    /// Check whether the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Zero and empty the buffer.
    pub fn clear(&mut self) {
        self.wipe();
        self.bytes.clear();
    }

    fn wipe(&mut self) {
        for byte in self.bytes.iter_mut() {
            *byte = 0;
        }
        // Keep the zeroing writes from being optimized away.
        compiler_fence(Ordering::SeqCst);
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_empty() {
        let secret = Secret::default();
        assert!(secret.is_empty());
        assert_eq!(secret.expose(), "");
    }

    #[test]
    fn test_round_trip() {
        let secret = Secret::new("some_password");
        assert!(!secret.is_empty());
        assert_eq!(secret.expose(), "some_password");
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut secret = Secret::new("hunter2");
        secret.clear();
        assert!(secret.is_empty());
        assert_eq!(secret.expose(), "");
    }

    #[test]
    fn test_debug_redacts() {
        let secret = Secret::new("hunter2");
        let rendered = format!("{:?}", secret);
        assert_eq!(rendered, "Secret(<redacted>)");
        assert!(!rendered.contains("hunter2"));
    }
}
