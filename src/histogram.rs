use itertools::Itertools;

/// Fixed-range 1D histogram with equal-width, integer-count bins.
///
/// The range `[min, max]` is split into `num_bins` bins of width
/// `(max - min) / num_bins`. The top bin absorbs every sample from
/// `max - bin_step` upward and the bottom bin everything at or below `min`,
/// so inserts never fall outside the bin array. Intended for cheap
/// percentile estimates via [`Histogram::approximate_value`].
#[derive(Debug, Clone)]
pub struct Histogram {
    min: f64,
    max: f64,
    bin_step: f64,
    bins: Vec<usize>,
    num_samples: usize,
}

impl Histogram {
    /// Create a histogram over `[min, max]` with `num_bins` empty bins.
    ///
    /// # Panics
    /// If `num_bins <= 1`.
    pub fn new(min: f64, max: f64, num_bins: usize) -> Self {
        let mut histogram = Self {
            min: 0.0,
            max: 0.0,
            bin_step: 0.0,
            bins: Vec::new(),
            num_samples: 0,
        };
        histogram.reset(min, max, num_bins);
        histogram
    }

    /// Reconfigure range and bin count, zeroing all counts and the sample
    /// total. May be called repeatedly on the same instance.
    ///
    /// # Panics
    /// If `num_bins <= 1`.
    pub fn reset(&mut self, min: f64, max: f64, num_bins: usize) {
        assert!(num_bins > 1, "invalid number of bins [{}]", num_bins);
        self.num_samples = 0;
        self.min = min;
        self.max = max;
        self.bin_step = (max - min) / num_bins as f64;
        self.bins.clear();
        self.bins.resize(num_bins, 0);
    }

    /// Zero all bin counts, keeping range and bin count.
    ///
    /// Note that the running sample total is left untouched; only
    /// [`Histogram::reset`] clears it. The `compute` methods rely on this
    /// when re-binning a fresh sample set on a reused instance.
    pub fn clear_bins(&mut self) {
        self.bins.fill(0);
    }

    /// Bin index for a sample value, clamped into `[0, num_bins)`.
    ///
    /// Values at or below `min` map to bin 0; values from one bin width
    /// below `max` upward map to the last bin.
    pub fn bin_id(&self, value: f64) -> usize {
        if value >= self.max - self.bin_step {
            return self.num_bins() - 1;
        }
        if value <= self.min {
            return 0;
        }
        let id = ((value - self.min) / self.bin_step) as usize;
        debug_assert!(
            id < self.num_bins(),
            "bin index out of range [{}/{}] [value {}] [range {} {}]",
            id,
            self.num_bins(),
            value,
            self.min,
            self.max
        );
        id
    }

    /// Count a single sample.
    pub fn insert(&mut self, value: f64) {
        let id = self.bin_id(value);
        self.bins[id] += 1;
        self.num_samples += 1;
    }

    /// Clear the bins and insert every sample, in order.
    pub fn compute(&mut self, samples: &[f64]) {
        self.clear_bins();
        for &value in samples {
            self.insert(value);
        }
    }

    /// Clear the bins and insert every sample strictly above
    /// `min_value_threshold`, in order.
    pub fn compute_above(&mut self, samples: &[f64], min_value_threshold: f64) {
        self.clear_bins();
        for &value in samples {
            if value <= min_value_threshold {
                continue;
            }
            self.insert(value);
        }
    }

    /// Approximate value below which `percentage` percent of the samples
    /// fall: the lower edge of the first bin whose cumulative fraction
    /// strictly exceeds the target, or `max` if none does.
    ///
    /// The cumulative fraction is tested before each bin's own count is
    /// added, so the returned edge lags one bin behind the crossing.
    ///
    /// # Panics
    /// If `percentage` is outside `[0, 100]` or no samples were ever
    /// inserted.
    pub fn approximate_value(&self, percentage: f64) -> f64 {
        assert!(
            (0.0..=100.0).contains(&percentage),
            "invalid percentage request [{}]",
            percentage
        );
        assert!(self.num_samples > 0, "histogram holds no samples");
        let mut rval = self.min;
        let mut n = 0.0;
        for (i, &count) in self.bins.iter().enumerate() {
            if n / self.num_samples as f64 > percentage / 100.0 {
                return rval;
            }
            n += count as f64;
            rval = i as f64 * self.bin_step + self.min;
        }
        self.max
    }

    /// Raw count in the i-th bin.
    ///
    /// # Panics
    /// If `i` is out of range.
    pub fn bin_value(&self, i: usize) -> usize {
        assert!(
            i < self.num_bins(),
            "bin index out of range [{}/{}]",
            i,
            self.num_bins()
        );
        self.bins[i]
    }

    /// Largest single-bin count, 0 when all bins are empty.
    pub fn max_value(&self) -> usize {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    /// Sum of the counts in bins `[0, i)`, with `i` clamped to the bin
    /// count. Out-of-range indices therefore yield the full sample sum
    /// rather than panicking.
    pub fn integrate_till(&self, i: usize) -> usize {
        let end = i.min(self.num_bins());
        self.bins[..end].iter().sum()
    }

    /// Number of bins.
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Total number of samples inserted since the last `reset`.
    pub const fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Bin width.
    pub const fn bin_step(&self) -> f64 {
        self.bin_step
    }

    /// Lower range bound.
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper range bound.
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Log the bin edges and bin counts, one line each.
    pub fn print(&self) {
        let edges = (0..=self.num_bins())
            .map(|i| format!("{:6.2}", self.min + i as f64 * self.bin_step))
            .join(" ");
        log::info!("{}", edges);
        let counts = self.bins.iter().map(|count| format!("{:6}", count)).join(" ");
        log::info!("{}", counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reset_zeroes_everything() {
        let h = Histogram::new(0.0, 10.0, 5);
        assert_eq!(h.num_bins(), 5);
        assert_relative_eq!(h.bin_step(), 2.0);
        assert_eq!(h.num_samples(), 0);
        for i in 0..h.num_bins() {
            assert_eq!(h.bin_value(i), 0);
        }
    }

    #[test]
    fn reset_reconfigures() {
        let mut h = Histogram::new(0.0, 1.0, 4);
        h.insert(0.3);
        h.reset(-1.0, 1.0, 8);
        assert_eq!(h.num_bins(), 8);
        assert_eq!(h.num_samples(), 0);
        assert_relative_eq!(h.bin_step(), 0.25);
        assert_eq!(h.integrate_till(8), 0);
    }

    #[test]
    #[should_panic(expected = "invalid number of bins")]
    fn single_bin_rejected() {
        Histogram::new(0.0, 10.0, 1);
    }

    #[test]
    fn binning_scenario() {
        // bin_step = 2.0; top bin covers everything >= 8.0
        let mut h = Histogram::new(0.0, 10.0, 5);
        for value in [0.0, 1.9, 2.0, 9.9, 10.0, -5.0, 15.0] {
            h.insert(value);
        }
        assert_eq!(h.bin_value(0), 3);
        assert_eq!(h.bin_value(1), 1);
        assert_eq!(h.bin_value(2), 0);
        assert_eq!(h.bin_value(3), 0);
        assert_eq!(h.bin_value(4), 3);
        assert_eq!(h.num_samples(), 7);
        assert_eq!(h.integrate_till(5), 7);
        assert_eq!(h.max_value(), 3);
    }

    #[test]
    fn counts_sum_to_sample_total() {
        let mut h = Histogram::new(-1.0, 1.0, 10);
        let samples: Vec<f64> = (0..100).map(|i| (i as f64).sin()).collect();
        h.compute(&samples);
        let total: usize = (0..h.num_bins()).map(|i| h.bin_value(i)).sum();
        assert_eq!(total, h.num_samples());
        assert_eq!(total, samples.len());
    }

    #[test]
    fn clamping_at_range_edges() {
        let h = Histogram::new(0.0, 10.0, 5);
        assert_eq!(h.bin_id(0.0), 0);
        assert_eq!(h.bin_id(-100.0), 0);
        // top bin starts one bin width below max
        assert_eq!(h.bin_id(8.0), 4);
        assert_eq!(h.bin_id(10.0), 4);
        assert_eq!(h.bin_id(1e9), 4);
        assert_eq!(h.bin_id(7.9), 3);
    }

    #[test]
    fn integrate_till_is_monotonic_and_clamps() {
        let mut h = Histogram::new(0.0, 10.0, 5);
        h.compute(&[1.0, 3.0, 3.5, 5.0, 9.0]);
        let mut previous = 0;
        for i in 0..=h.num_bins() {
            let cumulative = h.integrate_till(i);
            assert!(cumulative >= previous);
            previous = cumulative;
        }
        assert_eq!(h.integrate_till(5), h.num_samples());
        assert_eq!(h.integrate_till(1000), h.num_samples());
    }

    #[test]
    #[should_panic(expected = "bin index out of range")]
    fn bin_value_out_of_range_rejected() {
        let h = Histogram::new(0.0, 10.0, 5);
        h.bin_value(5);
    }

    #[test]
    fn percentile_endpoints() {
        let mut h = Histogram::new(0.0, 10.0, 5);
        h.compute(&[1.0, 3.0, 5.0, 7.0, 9.0]);
        assert_relative_eq!(h.approximate_value(0.0), 0.0);
        assert_relative_eq!(h.approximate_value(100.0), 10.0);
    }

    #[test]
    fn percentile_lags_one_bin_behind_crossing() {
        let mut h = Histogram::new(0.0, 10.0, 5);
        // 4 samples in bin 0, 4 in bin 1, 2 in bin 4
        h.compute(&[0.1, 0.2, 0.3, 0.4, 2.1, 2.2, 2.3, 2.4, 9.0, 9.5]);
        // The fraction is checked before each bin's count is added, and
        // rval trails as the left edge of the previously visited bin.
        assert_relative_eq!(h.approximate_value(20.0), 0.0);
        assert_relative_eq!(h.approximate_value(50.0), 2.0);
        assert_relative_eq!(h.approximate_value(75.0), 2.0);
        // Cumulative fraction never strictly exceeds 0.9 inside the loop
        // (it reaches 0.8 before the last bin), so the scan falls through.
        assert_relative_eq!(h.approximate_value(90.0), 10.0);
    }

    #[test]
    #[should_panic(expected = "invalid percentage request")]
    fn percentile_out_of_range_rejected() {
        let mut h = Histogram::new(0.0, 10.0, 5);
        h.insert(5.0);
        h.approximate_value(101.0);
    }

    #[test]
    #[should_panic(expected = "holds no samples")]
    fn percentile_on_empty_histogram_rejected() {
        let h = Histogram::new(0.0, 10.0, 5);
        h.approximate_value(50.0);
    }

    #[test]
    fn threshold_filter_matches_manual_filtering() {
        let samples = [0.5, 1.5, -0.5, 2.5, 1.0, 4.0, 0.9];
        let threshold = 1.0;

        let mut filtered = Histogram::new(0.0, 5.0, 5);
        filtered.compute_above(&samples, threshold);

        let kept: Vec<f64> = samples.iter().copied().filter(|&v| v > threshold).collect();
        let mut reference = Histogram::new(0.0, 5.0, 5);
        reference.compute(&kept);

        for i in 0..filtered.num_bins() {
            assert_eq!(filtered.bin_value(i), reference.bin_value(i));
        }
    }

    #[test]
    fn num_samples_accumulates_across_compute_calls() {
        // Kept for compatibility: compute() clears the bins but not the
        // sample total, so back-to-back compute() calls inflate
        // num_samples while the bins only reflect the last call. Only
        // reset() starts the total over.
        let mut h = Histogram::new(0.0, 10.0, 5);
        h.compute(&[1.0, 2.0, 3.0]);
        assert_eq!(h.num_samples(), 3);
        h.compute(&[4.0, 5.0]);
        assert_eq!(h.num_samples(), 5);
        let binned: usize = (0..h.num_bins()).map(|i| h.bin_value(i)).sum();
        assert_eq!(binned, 2);
    }

    #[test]
    fn print_leaves_state_untouched() {
        let mut h = Histogram::new(0.0, 10.0, 5);
        h.compute(&[1.0, 9.0]);
        h.print();
        assert_eq!(h.num_samples(), 2);
        assert_eq!(h.bin_value(0), 1);
        assert_eq!(h.bin_value(4), 1);
    }
}
