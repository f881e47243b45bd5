//! Math-layer error types.

/// Errors raised by fallible accessors on the math types.
///
/// Arithmetic never fails; only indexing outside a type's fixed shape does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// An index was outside the valid range for the indexed value.
    #[error("invalid {kind} index: {index}")]
    IndexOutOfRange {
        /// What was being indexed (e.g. `"quaternion"`, `"matrix row"`).
        kind: &'static str,
        /// The offending index.
        index: usize,
    },
}

impl MathError {
    pub(crate) const fn index(kind: &'static str, index: usize) -> Self {
        Self::IndexOutOfRange { kind, index }
    }
}
