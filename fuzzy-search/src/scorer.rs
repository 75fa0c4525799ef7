use crate::result::TokenMatch;

pub const MISS_PENALTY: i64 = 20;
pub const CASE_FOLD_PENALTY: i64 = 3;
pub const WORD_BOUNDARY_BONUS: i64 = 4;
pub const FULL_TOKEN_BONUS: i64 = 100;

/// Scores token matches against one target.
///
/// Intuition: an unbroken token should nearly always beat a fragmented
/// subsequence; the remaining terms mostly break ties.
pub(crate) struct Scorer<'a> {
    pub target: &'a [char],
    pub adjusted: &'a [char],
    pub dir_index: Option<usize>,
    pub case_insensitive: bool,
    pub boundary_chars: &'a [char],
}

impl Scorer<'_> {
    pub(crate) fn score(&self, token_match: &TokenMatch) -> i64 {
        let mut score = -MISS_PENALTY * token_match.misses() as i64;
        if self.case_insensitive && self.folded_case(token_match) {
            score -= CASE_FOLD_PENALTY;
        }

        for substring in &token_match.substrings {
            let len = substring.len as i64;
            let mut substring_score = len * len;
            // File name matches count double.
            if self.dir_index.is_none_or(|dir| substring.start > dir) {
                substring_score *= 2;
            }
            if self.is_word_boundary(substring.start.checked_sub(1))
                || self.is_word_boundary(Some(substring.end()))
            {
                substring_score += WORD_BOUNDARY_BONUS;
            }
            if substring.len == token_match.token_len() {
                substring_score += FULL_TOKEN_BONUS;
            }
            score += substring_score;
        }
        score
    }

    /// `None` stands for the position before the first character.
    fn is_word_boundary(&self, index: Option<usize>) -> bool {
        let Some(index) = index else {
            return true;
        };
        match self.target.get(index) {
            Some(c) => self.boundary_chars.contains(c),
            None => index == self.target.len(),
        }
    }

    fn folded_case(&self, token_match: &TokenMatch) -> bool {
        token_match.substrings.iter().any(|substring| {
            let range = substring.start..substring.end();
            match (self.target.get(range.clone()), self.adjusted.get(range)) {
                (Some(original), Some(adjusted)) => original != adjusted,
                _ => false,
            }
        })
    }
}
