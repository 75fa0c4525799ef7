use serde::Serialize;

/// Inclusive range of character indices covered by a match.
///
/// An unset interval is modelled as `None` at every use site, so a value of
/// this type always satisfies `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    /// Returns `None` when `end < start`.
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Interval covered by `len` characters beginning at `start`.
    pub fn from_span(start: usize, len: usize) -> Option<Self> {
        let last = len.checked_sub(1)?;
        Self::new(start, start + last)
    }

    /// Touching endpoints count as an overlap.
    pub fn overlaps(self, other: Interval) -> bool {
        self.end >= other.start && self.start <= other.end
    }

    pub fn cover(self, other: Interval) -> Interval {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

pub fn is_valid(interval: Option<Interval>) -> bool {
    interval.is_some()
}

/// Smallest interval covering both operands; unset only if both are unset.
pub fn merge(a: Option<Interval>, b: Option<Interval>) -> Option<Interval> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.cover(b)),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

/// An unset operand never intersects anything.
pub fn intersects(a: Option<Interval>, b: Option<Interval>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.overlaps(b),
        _ => false,
    }
}
