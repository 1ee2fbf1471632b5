use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
/// An error produced by [`HistoryBuffer`].
///
/// [`HistoryBuffer`]: super::HistoryBuffer
pub enum BufferError {
    /// The index is outside the currently valid window.
    #[error("Index ({0}) is out of range ([{1}, {2}])")]
    IndexOutOfRange(i64, i64, i64),
}
