use thiserror::Error;

/// Everything that can go wrong inside the filter core.
///
/// Configuration variants are only reachable at construction; a filter that
/// exists is always usable. `IndexOutOfRange` is a defensive check on the
/// derived hash indices and is unreachable while the generator's modulo
/// arithmetic is correct.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("dictionary is empty, cannot derive filter parameters")]
    EmptyDictionary,

    #[error(
        "bit array is too small for dictionary set ({array_size} bits for {dictionary_size} items): optimal hash count is 0"
    )]
    ZeroHashCount {
        array_size: usize,
        dictionary_size: usize,
    },

    #[error("bit array is too small for dictionary set: false positive rate is 1")]
    SaturatedFilter,

    #[error("hash index {index} out of range for bit array of {len} bits")]
    IndexOutOfRange { index: usize, len: usize },
}
