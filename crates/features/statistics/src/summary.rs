use fxhash::FxHashMap;

/// Summary statistics of one submitted list.
///
/// Built once by [`Statistics::compute`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    numbers: Vec<f64>,
    mean: f64,
    median: f64,
    std_dev: f64,
    mode: f64,
}

impl Statistics {
    /// Sorts `numbers` and computes the summary; `None` for an empty list.
    ///
    /// ```
    /// use primer_statistics::Statistics;
    ///
    /// let stats = Statistics::compute(vec![4.0, 1.0, 3.0, 2.0]).unwrap();
    /// assert_eq!(stats.numbers(), &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(stats.median(), 2.5);
    /// ```
    #[must_use]
    pub fn compute(mut numbers: Vec<f64>) -> Option<Self> {
        numbers.sort_by(f64::total_cmp);

        let mean = mean(&numbers)?;
        let median = median(&numbers)?;
        let std_dev = population_std_dev(&numbers, mean);
        let mode = mode(&numbers)?;

        Some(Self { numbers, mean, median, std_dev, mode })
    }

    /// The input, ascending.
    #[must_use]
    pub fn numbers(&self) -> &[f64] {
        &self.numbers
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.numbers.len()
    }

    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub const fn median(&self) -> f64 {
        self.median
    }

    /// Population standard deviation (divides by N).
    #[must_use]
    pub const fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Most frequent value after rounding to one decimal place.
    #[must_use]
    pub const fn mode(&self) -> f64 {
        self.mode
    }
}

fn mean(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// `sorted` must be ascending.
fn median(sorted: &[f64]) -> Option<f64> {
    let middle = sorted.len() / 2;
    let upper = *sorted.get(middle)?;
    if sorted.len() % 2 == 0 { Some(f64::midpoint(sorted[middle - 1], upper)) } else { Some(upper) }
}

fn population_std_dev(numbers: &[f64], mean: f64) -> f64 {
    let squared: f64 = numbers.iter().map(|x| (x - mean).powi(2)).sum();
    (squared / numbers.len() as f64).sqrt()
}

/// Groups values by their one-decimal rendering and returns the most populated group.
///
/// Ties go to the smallest value, so the result never depends on hash order.
fn mode(numbers: &[f64]) -> Option<f64> {
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for x in numbers {
        *counts.entry(format!("{x:.1}")).or_default() += 1;
    }

    counts
        .into_iter()
        .filter_map(|(key, count)| key.parse::<f64>().ok().map(|value| (value, count)))
        .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then_with(|| b.total_cmp(a)))
        .map(|(value, _)| value)
}
