/// Errors reported by tree operations.
///
/// Every failing operation returns before touching the tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("index range {start}..={end} is out of range for length {len}")]
    IndexOutOfRange { start: isize, end: isize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
