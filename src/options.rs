/// Options to tune how the transform is decomposed and which twiddle table it uses.
///
/// Calling the FFT routines without specifying options uses the benchmark's reference
/// configuration: four slices for the first group of levels, the literal twiddle table, and
/// parallel dispatch when the `parallel` feature is enabled.
///
/// None of these options change the result. Every valid configuration produces bit-identical
/// output for the same twiddle table.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Number of slices the first group of decimation levels is split into.
    /// Must be a power of two no larger than `FFT_SIZE / 2`.
    pub initial_slices: usize,
    /// Where the twiddle factors come from
    pub twiddles: TwiddleSource,
    /// Dispatch the slices of a group to worker threads.
    /// Ignored when the `parallel` feature is disabled.
    pub parallel: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            initial_slices: 4,
            twiddles: TwiddleSource::default(),
            parallel: true,
        }
    }
}

impl Options {
    /// Reference options with a different starting slice count
    pub fn with_initial_slices(initial_slices: usize) -> Self {
        Self {
            initial_slices,
            ..Self::default()
        }
    }

    /// Fully sequential: one slice covering every level, run on the caller's thread
    pub fn sequential() -> Self {
        Self {
            initial_slices: 1,
            parallel: false,
            ..Self::default()
        }
    }
}

/// The origin of the Q12 twiddle table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TwiddleSource {
    #[default]
    /// The literal table shared by every port of the benchmark.
    ///
    /// Use this when output must be comparable across implementations.
    Reference,
    /// Computed at plan time from `f64` cosine, rounded to Q12.
    ///
    /// Entries differ from the reference table by at most 2.
    Computed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_configuration() {
        let options = Options::default();
        assert_eq!(options.initial_slices, 4);
        assert_eq!(options.twiddles, TwiddleSource::Reference);
        assert!(options.parallel);
    }

    #[test]
    fn sequential_is_a_single_slice() {
        let options = Options::sequential();
        assert_eq!(options.initial_slices, 1);
        assert!(!options.parallel);
        assert_eq!(Options::with_initial_slices(16).initial_slices, 16);
    }
}
