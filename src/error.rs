use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The output buffer for a counting pass could not be reserved. The pass
    /// is abandoned before writing anything back.
    #[error("unable to reserve an output buffer for {len} elements")]
    AllocationFailed { len: usize },

    #[error("key at index {index} is negative, only non-negative keys can be sorted")]
    NegativeKey { index: usize },
}
