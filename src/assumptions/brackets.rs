//! Generic bracket lookups shared by every table in the model
//!
//! Two flavours of lookup exist:
//! - grade resolution against exclusive upper thresholds, with clamped
//!   retrieval of the per-grade value
//! - income-bracketed schedules where each band covers values up to and
//!   including its upper limit, with an open-ended top band

/// 1-based rank of `value` among ascending exclusive upper `thresholds`.
///
/// Returns the index of the first threshold strictly greater than `value`,
/// plus one. A value equal to a threshold belongs to the next rank. Values at
/// or above the last threshold rank `thresholds.len() + 1`.
pub fn exclusive_rank<T>(value: f64, thresholds: &[T]) -> usize
where
    T: Copy + Into<f64>,
{
    thresholds.partition_point(|&t| Into::<f64>::into(t) <= value) + 1
}

/// Entry for a 1-based `rank`, clamped to the table.
///
/// Ranks at or below zero yield `None`; ranks past the end yield the last
/// entry.
pub fn clamped_entry<T: Copy>(rank: i64, entries: &[T]) -> Option<T> {
    if rank <= 0 {
        return None;
    }
    let idx = (rank as usize).min(entries.len()).saturating_sub(1);
    entries.get(idx).copied()
}

/// One band of a [`BracketSchedule`], covering values up to and including `upper`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<T> {
    pub upper: f64,
    pub value: T,
}

/// Ascending income bands with an open-ended top band
#[derive(Debug, Clone, PartialEq)]
pub struct BracketSchedule<T> {
    bands: Vec<Band<T>>,
    top: T,
}

impl<T> BracketSchedule<T> {
    /// Build from `(inclusive upper limit, value)` pairs and the value above
    /// the last limit. Limits must be ascending.
    pub fn new(bands: Vec<(f64, T)>, top: T) -> Self {
        Self {
            bands: bands
                .into_iter()
                .map(|(upper, value)| Band { upper, value })
                .collect(),
            top,
        }
    }

    /// Value of the first band whose upper limit is at or above `x`
    pub fn lookup(&self, x: f64) -> &T {
        self.bands
            .iter()
            .find(|band| x <= band.upper)
            .map(|band| &band.value)
            .unwrap_or(&self.top)
    }

    pub fn bands(&self) -> &[Band<T>] {
        &self.bands
    }
}
