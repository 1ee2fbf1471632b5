use super::Resampler;

/// Push-driven adapter that turns a [`Resampler`] into a block processor.
///
/// Every output index from the start index on is emitted exactly once and in order, as soon
/// as it becomes computable. If the output window has already moved past the next index,
/// the skipped outputs are lost and a warning is logged.
#[derive(Clone, Debug)]
pub struct Stream<R: Resampler> {
    resampler: R,
    next: i64,
}

impl<R: Resampler> Stream<R> {
    /// Creates a new [`Stream`] emitting outputs from index `0`.
    pub const fn new(resampler: R) -> Self {
        Self::with_start(resampler, 0)
    }

    /// Creates a new [`Stream`] emitting outputs from index `start`.
    pub const fn with_start(resampler: R, start: i64) -> Self {
        Self {
            resampler,
            next: start,
        }
    }

    /// The wrapped resampler.
    pub const fn resampler(&self) -> &R {
        &self.resampler
    }

    /// Unwraps the resampler.
    pub fn into_inner(self) -> R {
        self.resampler
    }

    /// The index of the next output to be emitted.
    pub const fn next_index(&self) -> i64 {
        self.next
    }

    /// Pushes `input` and appends every output that became computable to `output`.
    ///
    /// Returns the number of appended samples.
    pub fn process(&mut self, input: &[R::Sample], output: &mut Vec<R::Sample>) -> usize {
        let len = output.len();
        input.iter().for_each(|&x| {
            self.resampler.push(x);
            self.drain(output);
        });
        output.len() - len
    }

    fn drain(&mut self, output: &mut Vec<R::Sample>) {
        let (min, max) = (
            self.resampler.min_output_index(),
            self.resampler.max_output_index(),
        );
        if max < min || max < self.next {
            return;
        }
        if self.next < min {
            tracing::warn!(
                "Outputs [{}, {}) are no longer computable and were skipped",
                self.next,
                min
            );
            self.next = min;
        }
        output.extend((self.next..=max).map(|n| self.resampler.evaluate(n)));
        self.next = max + 1;
    }
}
