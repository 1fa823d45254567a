use std::collections::HashSet;

/// A candidate together with its score against the query.
pub type Match = (String, u8);

/// Similarity between two strings in `0..=100`.
///
/// The shorter string is slid across every position of the longer one and the
/// best fraction of aligned equal characters wins, so a clean substring scores
/// 100. Either side being empty scores 0.
pub fn score(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    if a == b {
        return 100;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let len = shorter.len();

    let mut best = 0;
    for window in longer.windows(len) {
        let matches = shorter
            .iter()
            .zip(window)
            .filter(|(x, y)| x == y)
            .count();
        let window_score = (100 * matches / len) as u8;
        if window_score > best {
            best = window_score;
        }
        if best == 100 {
            break;
        }
    }
    best
}

/// Rank `candidates` against `query` with [`score`], keeping the best `limit`.
pub fn extract<I>(query: &str, candidates: I, limit: usize) -> Vec<Match>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    extract_with(query, candidates, limit, score)
}

/// Rank `candidates` against `query` with a caller supplied scorer.
///
/// Repeated candidates are dropped after their first occurrence. The sort is
/// stable, so equal scores keep first-seen order.
pub fn extract_with<I, F>(query: &str, candidates: I, limit: usize, scorer: F) -> Vec<Match>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: Fn(&str, &str) -> u8,
{
    if limit == 0 {
        return Vec::new();
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut results: Vec<Match> = Vec::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if seen.contains(candidate) {
            continue;
        }
        seen.insert(candidate.to_string());
        let candidate_score = scorer(query, candidate);
        results.push((candidate.to_string(), candidate_score));
    }

    results.sort_by(|a, b| b.1.cmp(&a.1));
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "a",
        "abc",
        "hello",
        "hello world",
        "night",
        "nacht",
        "/home/user/projects/api",
        "Grüße",
        "grüne",
    ];

    #[test]
    fn test_identical_strings() {
        for s in SAMPLES.iter().filter(|s| !s.is_empty()) {
            assert_eq!(score(s, s), 100, "{s}");
        }
    }

    #[test]
    fn test_empty_scores_zero() {
        for s in SAMPLES {
            assert_eq!(score("", s), 0);
            assert_eq!(score(s, ""), 0);
        }
    }

    #[test]
    fn test_symmetric_and_bounded() {
        for a in SAMPLES {
            for b in SAMPLES {
                let ab = score(a, b);
                assert_eq!(ab, score(b, a), "{a:?} vs {b:?}");
                assert!(ab <= 100);
            }
        }
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(score("hello", "hello world"), 100);
        assert_eq!(score("world", "hello world"), 100);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(score("abc", "xyz"), 0);
    }

    #[test]
    fn test_partial_alignment() {
        // n-i-g-h-t vs n-a-c-h-t: n and h and t align
        assert_eq!(score("night", "nacht"), 60);
        assert_eq!(score("abcd", "abxd"), 75);
    }

    #[test]
    fn test_best_window_wins() {
        // "apx" aligns 2 of 3 at the start, "apple" window holds "app"
        assert_eq!(score("app", "apxapple"), 100);
        assert_eq!(score("abz", "xxabyxx"), 66);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(score("grü", "grüße"), 100);
        assert_eq!(score("Grüße", "grüne"), 60);
    }

    #[test]
    fn test_extract_dedups_and_keeps_first_seen_order() {
        let results = extract("abc", ["abcdef", "xyz", "abc", "abc"], 2);
        assert_eq!(
            results,
            vec![("abcdef".to_string(), 100), ("abc".to_string(), 100)]
        );
    }

    #[test]
    fn test_extract_limit_zero() {
        assert!(extract("abc", ["abc", "abcd"], 0).is_empty());
    }

    #[test]
    fn test_extract_empty_candidates() {
        let none: Vec<String> = Vec::new();
        assert!(extract("abc", none, 5).is_empty());
    }

    #[test]
    fn test_extract_empty_query_keeps_input_order() {
        let results = extract("", ["b", "a", "c", "a"], 10);
        let names: Vec<&str> = results.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert!(results.iter().all(|(_, s)| *s == 0));
    }

    #[test]
    fn test_extract_respects_limit_and_uniqueness() {
        let candidates = ["one", "two", "one", "three", "two", "four", "five", "six"];
        for limit in 0..10 {
            let results = extract("o", candidates, limit);
            assert!(results.len() <= limit);
            let unique: HashSet<&String> = results.iter().map(|(c, _)| c).collect();
            assert_eq!(unique.len(), results.len());
        }
    }

    #[test]
    fn test_extract_sorts_descending() {
        let results = extract("proj", ["notes", "project", "prod", "xyz"], 5);
        let scores: Vec<u8> = results.iter().map(|(_, s)| *s).collect();
        assert_eq!(scores, vec![100, 75, 0, 0]);
        assert_eq!(results[0].0, "project");
        assert_eq!(results[1].0, "prod");
    }

    #[test]
    fn test_extract_is_idempotent() {
        let candidates = vec!["alpha", "beta", "alphabet", "beta"];
        let first = extract("alp", &candidates, 3);
        let second = extract("alp", &candidates, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_with_custom_scorer() {
        let by_len = |_: &str, c: &str| c.len().min(100) as u8;
        let results = extract_with("", ["aa", "a", "aaa"], 2, by_len);
        assert_eq!(
            results,
            vec![("aaa".to_string(), 3), ("aa".to_string(), 2)]
        );
    }
}
