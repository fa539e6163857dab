use std::fmt;

/// Possible errors returned by methods on a [`crate::TrieMap`].
#[derive(Debug, PartialEq, Eq)]
pub enum TrieMapError {
    /// The requested key was not found in the map.
    KeyNotFound,
    /// A node or value cell could not be allocated.
    ///
    /// The crate uses the global allocator for every node and value cell,
    /// so this is only ever returned if that allocator itself reports
    /// exhaustion; it is not expected in ordinary operation.
    AllocationFailure,
    /// An internal consistency check failed.
    ///
    /// This indicates a bug in the crate itself (e.g. a cursor that no
    /// longer corresponds to a live position, or a double wrap past the
    /// end of iteration). It is not expected to occur in a correct
    /// program and should be reported upstream.
    InvariantViolated,
}

impl std::error::Error for TrieMapError {}

impl fmt::Display for TrieMapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TrieMapError::KeyNotFound => {
                write!(f, "Error: The requested key was not found.")
            }
            TrieMapError::AllocationFailure => {
                write!(f, "Error: Failed to allocate storage for a node or value.")
            }
            TrieMapError::InvariantViolated => {
                write!(
                    f,
                    "Error: An internal invariant was violated. This is a bug."
                )
            }
        }
    }
}
