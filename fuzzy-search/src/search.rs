use crate::config::SearchConfig;
use crate::filter;
use crate::matcher::TokenMatcher;
use crate::query::Query;
use crate::query::Token;
use crate::result::SearchResult;
use crate::result::TokenMatch;
use crate::scorer::Scorer;
use tracing::debug;
use tracing::trace;

/// Ranks candidate strings against a query.
///
/// Holds no mutable state during a pass, so one instance can be shared
/// across threads that each search a slice of the candidates.
#[derive(Debug, Clone)]
pub struct FuzzySearch {
    config: SearchConfig,
    query: Query,
    boundary_chars: Vec<char>,
}

impl FuzzySearch {
    pub fn new(config: SearchConfig) -> Self {
        let boundary_chars = config.boundary_chars.chars().collect();
        Self {
            config,
            query: Query::default(),
            boundary_chars,
        }
    }

    pub fn with_query(config: SearchConfig, query: &str) -> Self {
        let mut search = Self::new(config);
        search.set_query(query);
        search
    }

    /// Replaces the active query. Cheap enough to call on every keystroke.
    pub fn set_query(&mut self, query: &str) {
        self.query = Query::parse(query);
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Matches a single target, `None` when any token cannot be placed.
    ///
    /// Each token is tried at successive leftmost placements starting from
    /// the configured offset; the best scoring one that fits beside the
    /// previously accepted tokens wins. This is greedy on two levels and
    /// does not promise the best overall combination.
    pub fn search(&self, target: &str) -> Option<SearchResult> {
        let mut result = SearchResult::new(target, self.config.max_misses);
        if self.query.is_empty() {
            return Some(result);
        }

        let original: Vec<char> = target.chars().collect();
        let adjusted = self.query.adjust_target(&original);
        let scorer = Scorer {
            target: &original,
            adjusted: &adjusted,
            dir_index: result.dir_index,
            case_insensitive: !self.query.case_sensitive(),
            boundary_chars: &self.boundary_chars,
        };
        let matcher = TokenMatcher::new(self.config.allow_subsequences);

        for token in self.query.tokens() {
            let Some(best) = self.best_token_match(&result, token, &adjusted, matcher, &scorer)
            else {
                trace!("no admissible placement for {:?} in {target}", token.as_str());
                return None;
            };
            result.add_token_match(best);
        }
        Some(result)
    }

    fn best_token_match(
        &self,
        result: &SearchResult,
        token: &Token,
        adjusted: &[char],
        matcher: TokenMatcher,
        scorer: &Scorer<'_>,
    ) -> Option<TokenMatch> {
        let mut best: Option<TokenMatch> = None;
        let mut offset = self.config.start_offset;

        while let Some(mut candidate) =
            matcher.try_match(token.chars(), adjusted, offset, result.remaining_misses())
        {
            let next_offset = candidate.interval().map(|interval| interval.start + 1);
            if result.can_add_token_match(&candidate) {
                candidate.score = scorer.score(&candidate);
                if best.as_ref().is_none_or(|best| best.score < candidate.score) {
                    best = Some(candidate);
                }
            }
            match next_offset {
                Some(next) => offset = next,
                None => break,
            }
        }
        best
    }

    /// Matches every target, culls weak results and returns the top ones in
    /// a deterministic order.
    pub fn search_all<S: AsRef<str>>(&self, targets: &[S]) -> Vec<SearchResult> {
        let matched: Vec<SearchResult> = targets
            .iter()
            .filter_map(|target| self.search(target.as_ref()))
            .collect();
        let matched_count = matched.len();

        let (results, threshold) = filter::cull_and_sort(
            matched,
            self.config.max_results,
            self.config.cull_cutoff,
            self.config.cull_factor,
        );
        debug!(
            "fuzzy search: {} targets, {matched_count} matched, cull threshold {threshold:?}, {} returned",
            targets.len(),
            results.len()
        );
        results
    }
}

impl Default for FuzzySearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Runs `query` over `targets` with the default configuration.
pub fn search_all<S: AsRef<str>>(query: &str, targets: &[S]) -> Vec<SearchResult> {
    FuzzySearch::with_query(SearchConfig::default(), query).search_all(targets)
}
