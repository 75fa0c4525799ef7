/*!
# Quick-open fuzzy search

Ranks candidate strings, typically project-relative file paths, against a
query typed into a filter box.

- **Tokenizing**: the query is split on whitespace and tokens are matched
  longest first. An all-lowercase query matches case-insensitively.
- **Matching**: each token is placed either as a literal run or as a greedy
  subsequence that may skip a few characters, within a miss budget shared by
  all tokens of a target.
- **Scoring**: long contiguous runs, file-name placement and word boundaries
  are rewarded; misses and case folding are penalised.
- **Ranking**: weak results are culled relative to the mean and best score,
  the rest are sorted deterministically and capped.

Token placements never overlap, and the search is a deliberately greedy
heuristic: it is fast enough to run per keystroke but does not guarantee the
best possible combination of placements.

## Example

```rust
use quickopen_fuzzy_search::FuzzySearch;
use quickopen_fuzzy_search::SearchConfig;

let mut search = FuzzySearch::new(SearchConfig::default());
search.set_query("hud gd");

let targets = ["./menu/hud/hud.gd", "./menu/main.tscn"];
let results = search.search_all(&targets);

assert_eq!(results[0].target, "./menu/hud/hud.gd");
for run in results[0].highlight_runs() {
    println!("matched {} chars at {}", run.len, run.start);
}
```
*/

mod config;
mod error;
mod filter;
pub mod interval;
mod matcher;
mod query;
mod result;
mod scorer;
mod search;

pub use config::DEFAULT_BOUNDARY_CHARS;
pub use config::DEFAULT_CULL_CUTOFF;
pub use config::DEFAULT_CULL_FACTOR;
pub use config::SearchConfig;
pub use error::FuzzySearchError;
pub use error::Result;
pub use filter::compare_results;
pub use filter::cull_threshold;
pub use interval::Interval;
pub use query::Query;
pub use query::Token;
pub use result::PATH_SEPARATOR;
pub use result::SearchResult;
pub use result::Substring;
pub use result::TokenMatch;
pub use search::FuzzySearch;
pub use search::search_all;
