//! Bucketing of expense amounts for the spending histogram.

use crate::Error;

/// The most buckets a histogram may have before drawing it is refused.
pub(super) const MAX_BUCKETS: u64 = 10_000;

/// Expense amounts counted into buckets of equal width starting at zero.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Histogram {
    /// The width of every bucket in dollars.
    pub width: u64,
    /// The bucket boundaries `0, width, 2 * width, ...`, always at least two.
    pub edges: Vec<u64>,
    /// The number of amounts in each bucket, one fewer than `edges`.
    pub counts: Vec<u32>,
}

/// One bar of the histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bucket {
    pub start: u64,
    pub end: u64,
    pub count: u32,
}

impl Histogram {
    /// Count `amounts` into buckets sized for the largest amount.
    ///
    /// Buckets are half-open, `[start, end)`, except the last one which also
    /// includes its end. Amounts are expected to be finite and non-negative,
    /// anything below zero is counted in the first bucket.
    ///
    /// Returns `Ok(None)` if there are no amounts.
    ///
    /// # Errors
    /// Returns an [Error::ChartError] if the largest amount would need more
    /// than [MAX_BUCKETS] buckets.
    pub fn from_amounts(amounts: &[f64]) -> Result<Option<Self>, Error> {
        let Some(max_amount) = amounts.iter().copied().reduce(f64::max) else {
            return Ok(None);
        };

        let width = bucket_width(max_amount);
        let edges = bucket_edges(max_amount, width)?;
        let mut counts = vec![0; edges.len() - 1];
        let last_bucket = counts.len() - 1;

        for amount in amounts {
            let index = (amount.max(0.0) / width as f64).floor() as usize;
            counts[index.min(last_bucket)] += 1;
        }

        Ok(Some(Self {
            width,
            edges,
            counts,
        }))
    }

    /// The buckets in ascending order.
    pub fn buckets(&self) -> impl Iterator<Item = Bucket> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edges, &count)| Bucket {
                start: edges[0],
                end: edges[1],
                count,
            })
    }

    /// The last bucket boundary.
    pub fn upper_edge(&self) -> u64 {
        self.edges.last().copied().unwrap_or(self.width)
    }

    /// The count of the fullest bucket.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Pick the bucket width for a histogram whose largest amount is `max_amount`.
pub(super) fn bucket_width(max_amount: f64) -> u64 {
    if max_amount < 100.0 {
        5
    } else if max_amount < 500.0 {
        10
    } else {
        50
    }
}

/// The bucket boundaries from zero up to and including the largest multiple
/// of `width` that is no greater than `floor(max_amount) + width`.
///
/// The last boundary is always greater than `max_amount`.
///
/// # Errors
/// Returns an [Error::ChartError] if the boundaries would not fit in a `u64`
/// or there would be more than [MAX_BUCKETS] buckets.
pub(super) fn bucket_edges(max_amount: f64, width: u64) -> Result<Vec<u64>, Error> {
    let too_large = || {
        Error::ChartError(format!(
            "the amount {max_amount} needs more than {MAX_BUCKETS} buckets of width {width}"
        ))
    };

    let upper_bound = (max_amount.max(0.0).floor() as u64)
        .checked_add(width)
        .ok_or_else(too_large)?;

    if upper_bound / width > MAX_BUCKETS {
        return Err(too_large());
    }

    Ok((0..=upper_bound).step_by(width as usize).collect())
}
