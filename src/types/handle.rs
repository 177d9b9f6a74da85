//! Stable entity identifiers
//!
//! The scene stores entities in an arena addressed by opaque handles, so
//! selection tracks identity rather than value: two geometrically equal
//! entities are still distinct selection targets.

use std::fmt;

/// A unique identifier for an entity within a loaded scene
///
/// Handles are allocated sequentially (1-based, in the order the document
/// collaborator supplied the entities) on every load. Handle 0 is reserved
/// and invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    /// The null/invalid handle (0)
    pub const NULL: Handle = Handle(0);

    /// Create a handle from a raw value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is the null handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Handle {
    fn default() -> Self {
        Handle::NULL
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_handle() {
        assert!(Handle::NULL.is_null());
        assert!(!Handle::new(1).is_null());
    }

    #[test]
    fn test_handle_ordering() {
        assert!(Handle::new(1) < Handle::new(2));
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(Handle::new(42).to_string(), "#42");
    }
}
