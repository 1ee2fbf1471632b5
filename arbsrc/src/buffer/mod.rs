mod error;

pub use error::BufferError;

use crate::utils::int::greater_power_of_two;

/// A fixed-capacity circular record of a monotonically advancing stream.
///
/// The `n`-th pushed element (starting at `0`) is addressed by index `n`. The capacity is a
/// power of two so that an index is mapped to its slot with a bit mask. Only the most
/// recent `capacity` elements are readable, i.e., indices in
/// [`min_index`](Self::min_index)`..=`[`max_index`](Self::max_index). Before the buffer
/// fills, this window extends to negative indices whose slots hold the initial value.
#[derive(Clone, Debug)]
pub struct HistoryBuffer<T> {
    mask: usize,
    buf: Vec<T>,
    pushed: u64,
}

impl<T: Copy> HistoryBuffer<T> {
    /// Creates a buffer holding at least `size + 1` elements, all initialized to `init`.
    ///
    /// The capacity is the smallest power of two strictly greater than `size`. The extra
    /// slot keeps a write from aliasing the oldest element still needed by a reader.
    #[must_use]
    pub fn new(size: usize, init: T) -> Self {
        let capacity = greater_power_of_two(size + 1);
        Self {
            mask: capacity - 1,
            buf: vec![init; capacity],
            pushed: 0,
        }
    }

    /// The number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Writes `elem` at index [`pushed`](Self::pushed), overwriting the oldest element.
    #[inline]
    pub fn push(&mut self, elem: T) {
        self.buf[(self.pushed as usize) & self.mask] = elem;
        self.pushed += 1;
    }

    /// The total number of elements pushed so far.
    #[must_use]
    pub const fn pushed(&self) -> u64 {
        self.pushed
    }

    /// The largest readable index, `pushed - 1`.
    #[must_use]
    pub fn max_index(&self) -> i64 {
        self.pushed as i64 - 1
    }

    /// The smallest readable index, `pushed - capacity`.
    #[must_use]
    pub fn min_index(&self) -> i64 {
        self.pushed as i64 - self.capacity() as i64
    }

    /// Returns `true` if `idx` is inside the readable window.
    #[must_use]
    pub fn contains(&self, idx: i64) -> bool {
        (self.min_index()..=self.max_index()).contains(&idx)
    }

    /// Reads the element at `idx` without checking the window.
    ///
    /// Indices outside the window address a slot that was either overwritten or not yet
    /// written.
    #[inline]
    pub(crate) fn read(&self, idx: i64) -> T {
        self.buf[(idx & self.mask as i64) as usize]
    }

    /// Reads the element at `idx`.
    pub fn get(&self, idx: i64) -> Result<T, BufferError> {
        self.check(idx)?;
        Ok(self.read(idx))
    }

    /// Overwrites the element at `idx`.
    pub fn set(&mut self, idx: i64, elem: T) -> Result<(), BufferError> {
        self.check(idx)?;
        self.buf[(idx & self.mask as i64) as usize] = elem;
        Ok(())
    }

    fn check(&self, idx: i64) -> Result<(), BufferError> {
        if !self.contains(idx) {
            return Err(BufferError::IndexOutOfRange(
                idx,
                self.min_index(),
                self.max_index(),
            ));
        }
        Ok(())
    }
}
