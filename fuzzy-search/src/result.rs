use crate::interval;
use crate::interval::Interval;
use serde::Serialize;
use std::ops::Range;

/// Separator whose last occurrence splits a target into directory and file name.
pub const PATH_SEPARATOR: char = '/';

/// A contiguous run of matched target characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Substring {
    /// Character index of the first matched character.
    pub start: usize,
    /// Number of characters, always positive.
    pub len: usize,
}

impl Substring {
    /// One past the last matched character.
    pub fn end(self) -> usize {
        self.start + self.len
    }

    pub fn interval(self) -> Option<Interval> {
        Interval::from_span(self.start, self.len)
    }
}

/// Placement of one query token inside one target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMatch {
    token_len: usize,
    matched_len: usize,
    interval: Option<Interval>,
    /// Runs in discovery order.
    pub substrings: Vec<Substring>,
    pub score: i64,
}

impl TokenMatch {
    pub(crate) fn new(token_len: usize) -> Self {
        Self {
            token_len,
            matched_len: 0,
            interval: None,
            substrings: Vec::new(),
            score: 0,
        }
    }

    pub(crate) fn add_substring(&mut self, start: usize, len: usize) {
        let substring = Substring { start, len };
        self.substrings.push(substring);
        self.matched_len += len;
        self.interval = interval::merge(self.interval, substring.interval());
    }

    /// Characters the token asked for.
    pub fn token_len(&self) -> usize {
        self.token_len
    }

    /// Characters that were located in the target.
    pub fn matched_len(&self) -> usize {
        self.matched_len
    }

    pub fn misses(&self) -> usize {
        self.token_len - self.matched_len
    }

    /// Bounds of every substring, `None` when nothing was matched.
    pub fn interval(&self) -> Option<Interval> {
        self.interval
    }

    pub fn intersects(&self, other: Option<Interval>) -> bool {
        interval::intersects(self.interval, other)
    }
}

/// Accepted token matches for one target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub target: String,
    pub score: i64,
    /// Character index of the last `/`, if any.
    pub dir_index: Option<usize>,
    /// One entry per query token, in token processing order.
    pub token_matches: Vec<TokenMatch>,
    #[serde(skip)]
    miss_budget: usize,
    #[serde(skip)]
    match_interval: Option<Interval>,
    #[serde(skip)]
    char_len: usize,
}

impl SearchResult {
    pub(crate) fn new(target: &str, max_misses: usize) -> Self {
        let mut char_len = 0;
        let mut dir_index = None;
        for (idx, c) in target.chars().enumerate() {
            if c == PATH_SEPARATOR {
                dir_index = Some(idx);
            }
            char_len += 1;
        }
        Self {
            target: target.to_string(),
            score: 0,
            dir_index,
            token_matches: Vec::new(),
            miss_budget: max_misses,
            match_interval: None,
            char_len,
        }
    }

    /// Whether `candidate` fits the budget and keeps accepted matches disjoint.
    ///
    /// The running interval is only a bounding box. With a single accepted
    /// match it is exact, so any overlap is a conflict. With two or more it
    /// can span a gap, and a candidate inside that gap is still admissible
    /// as long as it misses every individual match.
    pub(crate) fn can_add_token_match(&self, candidate: &TokenMatch) -> bool {
        if candidate.misses() > self.miss_budget {
            return false;
        }
        if !candidate.intersects(self.match_interval) {
            return true;
        }
        if self.token_matches.len() == 1 {
            return false;
        }
        !self
            .token_matches
            .iter()
            .any(|existing| existing.intersects(candidate.interval))
    }

    pub(crate) fn add_token_match(&mut self, token_match: TokenMatch) {
        self.score += token_match.score;
        self.match_interval = interval::merge(self.match_interval, token_match.interval);
        self.miss_budget -= token_match.misses();
        self.token_matches.push(token_match);
    }

    /// Miss budget left after all accepted matches.
    pub fn remaining_misses(&self) -> usize {
        self.miss_budget
    }

    pub fn total_misses(&self) -> usize {
        self.token_matches.iter().map(TokenMatch::misses).sum()
    }

    /// Bounding interval of all accepted matches.
    pub fn match_interval(&self) -> Option<Interval> {
        self.match_interval
    }

    /// Length of `target` in characters.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Matched spans of every token merged into maximal runs, ordered by
    /// start. Spans that touch or overlap collapse into one run.
    pub fn highlight_runs(&self) -> Vec<Substring> {
        let mut spans: Vec<Substring> = self
            .token_matches
            .iter()
            .flat_map(|token_match| token_match.substrings.iter().copied())
            .collect();
        spans.sort_by_key(|span| span.start);

        let mut runs: Vec<Substring> = Vec::with_capacity(spans.len());
        for span in spans {
            match runs.last_mut() {
                Some(last) if span.start <= last.end() => {
                    last.len = last.len.max(span.end() - last.start);
                }
                _ => runs.push(span),
            }
        }
        runs
    }

    /// Sorted character indices covered by any accepted match.
    pub fn matched_indices(&self) -> Vec<usize> {
        self.highlight_runs()
            .into_iter()
            .flat_map(|run| run.start..run.end())
            .collect()
    }

    /// [`Self::highlight_runs`] as byte ranges into `target`.
    pub fn highlight_byte_ranges(&self) -> Vec<Range<usize>> {
        let mut offsets: Vec<usize> = self.target.char_indices().map(|(at, _)| at).collect();
        offsets.push(self.target.len());
        self.highlight_runs()
            .into_iter()
            .filter_map(|run| Some(*offsets.get(run.start)?..*offsets.get(run.end())?))
            .collect()
    }
}
