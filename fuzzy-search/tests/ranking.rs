use pretty_assertions::assert_eq;
use quickopen_fuzzy_search::FuzzySearch;
use quickopen_fuzzy_search::SearchConfig;
use quickopen_fuzzy_search::SearchResult;
use quickopen_fuzzy_search::Substring;
use quickopen_fuzzy_search::cull_threshold;
use quickopen_fuzzy_search::interval;
use quickopen_fuzzy_search::search_all;

const PROJECT_DIR_TREE: &str = include_str!("fixtures/project_dir_tree.txt");

const QUERIES: &[&str] = &[
    "///gd",
    "sm.png",
    "ham ",
    "push background",
    "entity gd",
    "hud",
    "menu hud",
    "player png",
    "gd",
    "zzzz",
    "HUD",
];

fn targets() -> Vec<&'static str> {
    PROJECT_DIR_TREE
        .lines()
        .filter(|line| !line.is_empty())
        .collect()
}

fn top_result(query: &str) -> String {
    search_all(query, &targets())
        .first()
        .map(|result| result.target.clone())
        .unwrap_or_else(|| "<no result>".to_string())
}

fn targets_of(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|result| result.target.as_str()).collect()
}

#[test]
fn test_top_results_over_project_tree() {
    let cases = [
        ("///gd", "./menu/hud/hud.gd"),
        ("sm.png", "./entity/blood_sword/sam.png"),
        ("ham ", "./entity/game_trap/ha_missed_me.wav"),
        (
            "push background",
            "./entity/background_zone1/background/push.png",
        ),
        ("entity gd", "./entity/entity_man.gd"),
    ];
    for (query, expected) in cases {
        assert_eq!(top_result(query), expected, "query {query:?}");
    }
}

#[test]
fn test_repeated_searches_are_identical() {
    let targets = targets();
    for query in QUERIES {
        let search = FuzzySearch::with_query(SearchConfig::default(), query);
        assert_eq!(search.search_all(&targets), search.search_all(&targets));
    }
}

#[test]
fn test_input_order_does_not_change_output() {
    let targets = targets();
    let mut reversed = targets.clone();
    reversed.reverse();
    for query in QUERIES {
        assert_eq!(
            targets_of(&search_all(query, &targets)),
            targets_of(&search_all(query, &reversed)),
            "query {query:?}"
        );
    }
}

#[test]
fn test_equal_scores_break_on_length_then_text() {
    let targets = targets();
    for query in QUERIES {
        let results = search_all(query, &targets);
        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.score >= b.score, "query {query:?}");
            if a.score == b.score {
                let key_a = (a.target.chars().count(), a.target.as_str());
                let key_b = (b.target.chars().count(), b.target.as_str());
                assert!(key_a < key_b, "query {query:?}: {key_a:?} vs {key_b:?}");
            }
        }
    }
}

#[test]
fn test_miss_budget_is_never_exceeded() {
    let targets = targets();
    for max_misses in 0..=3 {
        let config = SearchConfig {
            max_misses,
            ..Default::default()
        };
        for query in QUERIES {
            let search = FuzzySearch::with_query(config.clone(), query);
            for result in search.search_all(&targets) {
                assert!(result.total_misses() <= max_misses);
                assert_eq!(result.remaining_misses(), max_misses - result.total_misses());
            }
        }
    }
}

#[test]
fn test_accepted_matches_never_overlap() {
    let targets = targets();
    for query in QUERIES.iter().chain(&["hud hud", "a e i", "entity entity gd"]) {
        for result in search_all(query, &targets) {
            let matches = &result.token_matches;
            for (i, a) in matches.iter().enumerate() {
                for b in &matches[i + 1..] {
                    assert!(
                        !interval::intersects(a.interval(), b.interval()),
                        "query {query:?} target {}",
                        result.target
                    );
                }
            }
        }
    }
}

#[test]
fn test_results_clear_the_cull_threshold() {
    let targets = targets();
    for query in QUERIES {
        let search = FuzzySearch::with_query(SearchConfig::default(), query);
        let scores: Vec<i64> = targets
            .iter()
            .filter_map(|target| search.search(target))
            .map(|result| result.score)
            .collect();
        let Some(threshold) = cull_threshold(&scores, 30.0, 0.1) else {
            continue;
        };
        assert!(threshold <= 30.0);
        let results = search.search_all(&targets);
        assert!(results.iter().all(|result| result.score as f64 >= threshold));
        let survivors = scores.iter().filter(|&&s| s as f64 >= threshold).count();
        assert_eq!(results.len(), survivors.min(100), "query {query:?}");
    }
}

#[test]
fn test_result_cap() {
    let targets = targets();
    let config = SearchConfig {
        max_results: 3,
        ..Default::default()
    };
    let capped = FuzzySearch::with_query(config, "gd").search_all(&targets);
    let full = search_all("gd", &targets);
    assert_eq!(capped.len(), 3);
    assert_eq!(targets_of(&capped), targets_of(&full[..3]));
}

#[test]
fn test_exact_mode_requires_literal_tokens() {
    let targets = targets();
    for query in ["hud", "entity gd", "push background", "hd", "menu hud"] {
        let search = FuzzySearch::with_query(SearchConfig::exact(), query);
        for result in search.search_all(&targets) {
            for token in query.split_whitespace() {
                assert!(
                    result.target.contains(token),
                    "{} lacks {token}",
                    result.target
                );
            }
            assert!(
                result
                    .token_matches
                    .iter()
                    .all(|m| m.substrings.len() == 1 && m.misses() == 0)
            );
        }
    }
    assert!(
        FuzzySearch::with_query(SearchConfig::exact(), "hd")
            .search_all(&targets)
            .is_empty()
    );
}

#[test]
fn test_highlight_runs_for_top_result() {
    let results = search_all("push background", &targets());
    let Some(top) = results.first() else {
        panic!("expected results");
    };
    assert_eq!(
        top.highlight_runs(),
        vec![
            Substring { start: 9, len: 10 },
            Substring { start: 37, len: 4 },
        ]
    );
    let highlighted: Vec<&str> = top
        .highlight_byte_ranges()
        .into_iter()
        .map(|range| &top.target[range])
        .collect();
    assert_eq!(highlighted, vec!["background", "push"]);
}

#[test]
fn test_results_serialize_for_display() {
    let results = search_all("hud", &targets());
    let value = serde_json::to_value(&results[0]).unwrap_or_default();
    assert_eq!(value["target"], "./menu/hud/hud.gd");
    assert_eq!(value["score"], 122);
    assert_eq!(value["dir_index"], 10);
    assert_eq!(value["token_matches"][0]["substrings"][0]["start"], 11);
    assert_eq!(value["token_matches"][0]["substrings"][0]["len"], 3);
}
