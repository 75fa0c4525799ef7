use crate::result::TokenMatch;

/// Locates a single token inside a case-adjusted target.
///
/// Pure: every call depends only on its arguments and the mode flag.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenMatcher {
    allow_subsequences: bool,
}

impl TokenMatcher {
    pub(crate) fn new(allow_subsequences: bool) -> Self {
        Self { allow_subsequences }
    }

    /// Attempts to place `token` at or after `offset`.
    ///
    /// Returns `None` when the token is absent (exact mode) or when more than
    /// `miss_budget` of its characters cannot be found (subsequence mode).
    pub(crate) fn try_match(
        self,
        token: &[char],
        target: &[char],
        offset: usize,
        miss_budget: usize,
    ) -> Option<TokenMatch> {
        if self.allow_subsequences {
            match_subsequence(token, target, offset, miss_budget)
        } else {
            match_exact(token, target, offset)
        }
    }
}

fn match_exact(token: &[char], target: &[char], offset: usize) -> Option<TokenMatch> {
    let mut token_match = TokenMatch::new(token.len());
    if token.is_empty() {
        return Some(token_match);
    }
    let start = target
        .get(offset..)?
        .windows(token.len())
        .position(|window| window == token)?
        + offset;
    token_match.add_substring(start, token.len());
    Some(token_match)
}

// Greedy left-to-right scan: each character is taken at its first occurrence
// after the previous one. Finds landing directly on the cursor extend the
// current run, anything else closes it.
fn match_subsequence(
    token: &[char],
    target: &[char],
    offset: usize,
    miss_budget: usize,
) -> Option<TokenMatch> {
    let mut token_match = TokenMatch::new(token.len());
    let mut budget = miss_budget;
    let mut cursor = offset;
    let mut run_start: Option<usize> = None;
    let mut run_len = 0;

    for &c in token {
        let Some(found) = find_char(target, c, cursor) else {
            budget = budget.checked_sub(1)?;
            continue;
        };
        if run_start.is_some() && found == cursor {
            run_len += 1;
        } else {
            if let Some(start) = run_start {
                token_match.add_substring(start, run_len);
            }
            run_start = Some(found);
            run_len = 1;
        }
        cursor = found + 1;
    }

    if let Some(start) = run_start {
        token_match.add_substring(start, run_len);
    }
    Some(token_match)
}

fn find_char(target: &[char], c: char, from: usize) -> Option<usize> {
    target
        .get(from..)?
        .iter()
        .position(|&candidate| candidate == c)
        .map(|pos| pos + from)
}
