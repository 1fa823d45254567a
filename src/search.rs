use crate::config::Preferences;
use crate::fuzzy;
use crate::recents::Recent;
use serde::Serialize;
use std::collections::HashSet;

/// Most items shown for a single query
pub const MAX_RESULTS: usize = 20;
/// Label matches must score above this to be listed ahead of URI matches
pub const LABEL_THRESHOLD: u8 = 95;

/// What to hand to the editor when an item is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchTarget {
    /// Empty for a raw path typed by the user
    pub option: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub name: String,
    pub description: String,
    pub icon: &'static str,
    pub target: LaunchTarget,
}

impl ResultItem {
    fn from_recent(recent: &Recent) -> Self {
        ResultItem {
            name: decode(&recent.label),
            description: clean_path(&recent.uri),
            icon: recent.kind.icon(),
            target: LaunchTarget {
                option: recent.kind.option().to_string(),
                uri: recent.uri.clone(),
            },
        }
    }

    fn create_file(path: &str) -> Self {
        ResultItem {
            name: path.to_string(),
            description: path.to_string(),
            icon: "icon",
            target: LaunchTarget {
                option: String::new(),
                uri: path.to_string(),
            },
        }
    }
}

/// Drop a leading launcher keyword, so `code api` searches for `api`.
pub fn strip_keyword<'a>(input: &'a str, keyword: &str) -> &'a str {
    let trimmed = input.trim_start();
    if keyword.is_empty() {
        return trimmed;
    }
    match trimmed.strip_prefix(keyword) {
        Some("") => "",
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => trimmed,
    }
}

/// Rank recents for a case-insensitive query.
///
/// Labels scoring above [`LABEL_THRESHOLD`] come first, followed by the best
/// URI matches. Results are unique by URI.
pub fn rank_recents<'a>(query: &str, recents: &'a [Recent], exclude_dirs: &[String]) -> Vec<&'a Recent> {
    let query = query.to_lowercase();

    let visible: Vec<&Recent> = recents
        .iter()
        .filter(|r| !exclude_dirs.iter().any(|ex| r.uri.contains(ex.as_str())))
        .collect();
    let labels: Vec<String> = visible.iter().map(|r| r.label.to_lowercase()).collect();
    let uris: Vec<String> = visible.iter().map(|r| r.uri.to_lowercase()).collect();

    let mut data: Vec<&Recent> = Vec::new();

    // a lowercased value can stand for several recents, e.g. ~/Projects and ~/projects
    for (label, label_score) in fuzzy::extract(&query, &labels, MAX_RESULTS) {
        if label_score <= LABEL_THRESHOLD {
            continue;
        }
        data.extend(sharing(&visible, &labels, &label));
    }

    for (uri, _) in fuzzy::extract(&query, &uris, MAX_RESULTS) {
        for recent in sharing(&visible, &uris, &uri) {
            if !data.iter().any(|d| d.uri == recent.uri) {
                data.push(recent);
            }
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    data.retain(|r| seen.insert(r.uri.as_str()));
    data.truncate(MAX_RESULTS);
    data
}

/// Every visible recent whose lowercased key equals `key`, in recent order.
fn sharing<'a, 'k>(
    visible: &'k [&'a Recent],
    keys: &'k [String],
    key: &'k str,
) -> impl Iterator<Item = &'a Recent> + 'k {
    keys.iter()
        .zip(visible)
        .filter(move |(k, _)| k.as_str() == key)
        .map(|(_, recent)| *recent)
}

/// The best-ranked recent for `query`, ignoring the create-file item.
pub fn best_match(query: &str, recents: &[Recent], prefs: &Preferences) -> Option<ResultItem> {
    rank_recents(query, recents, &prefs.exclude_dir_list())
        .first()
        .copied()
        .map(ResultItem::from_recent)
}

/// Build the items shown to the user for `query_raw`.
pub fn result_items(query_raw: &str, recents: &[Recent], prefs: &Preferences) -> Vec<ResultItem> {
    let mut items = Vec::new();

    if !query_raw.trim().is_empty() && prefs.create_file {
        items.push(ResultItem::create_file(query_raw));
    }

    let ranked = rank_recents(query_raw, recents, &prefs.exclude_dir_list());
    tracing::debug!(query = query_raw, matches = ranked.len(), "ranked recents");
    items.extend(ranked.into_iter().map(ResultItem::from_recent));
    items
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Percent-decoded path component of a URI
pub fn clean_path(uri: &str) -> String {
    match url::Url::parse(uri) {
        Ok(parsed) => decode(parsed.path()),
        Err(_) => decode(uri),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recents::RecentKind;

    fn recent(uri: &str, label: &str, kind: RecentKind) -> Recent {
        Recent {
            uri: uri.to_string(),
            label: label.to_string(),
            kind,
        }
    }

    fn sample() -> Vec<Recent> {
        vec![
            recent("file:///home/me/projects/api", "api", RecentKind::Folder),
            recent("file:///home/me/notes/Todo%20List.md", "Todo%20List.md", RecentKind::File),
            recent("file:///tmp/scratch", "scratch", RecentKind::Folder),
            recent("file:///home/me/site.code-workspace", "Website", RecentKind::Workspace),
        ]
    }

    #[test]
    fn test_strip_keyword() {
        assert_eq!(strip_keyword("code api", "code"), "api");
        assert_eq!(strip_keyword("  code   api", "code"), "api");
        assert_eq!(strip_keyword("code", "code"), "");
        assert_eq!(strip_keyword("codename", "code"), "codename");
        assert_eq!(strip_keyword("api", "code"), "api");
        assert_eq!(strip_keyword("api", ""), "api");
    }

    #[test]
    fn test_empty_query_lists_in_recent_order() {
        let recents = sample();
        let ranked = rank_recents("", &recents, &[]);
        let labels: Vec<&str> = ranked.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["api", "Todo%20List.md", "scratch", "Website"]);
    }

    #[test]
    fn test_label_match_comes_first_case_insensitive() {
        let recents = sample();
        let ranked = rank_recents("WEB", &recents, &[]);
        assert_eq!(ranked[0].label, "Website");
        assert_eq!(ranked.len(), recents.len());
    }

    #[test]
    fn test_results_unique_by_uri() {
        let mut recents = sample();
        recents.push(recent("file:///home/me/projects/api", "api copy", RecentKind::Folder));
        let ranked = rank_recents("api", &recents, &[]);
        let uris: HashSet<&str> = ranked.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(uris.len(), ranked.len());
        assert_eq!(ranked[0].label, "api");
    }

    #[test]
    fn test_uris_differing_in_case_are_distinct() {
        let recents = vec![
            recent("file:///home/me/Projects", "Projects", RecentKind::Folder),
            recent("file:///home/me/projects", "projects", RecentKind::Folder),
        ];
        let ranked = rank_recents("", &recents, &[]);
        let uris: Vec<&str> = ranked.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(uris, vec!["file:///home/me/Projects", "file:///home/me/projects"]);

        let ranked = rank_recents("projects", &recents, &[]);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_best_match_skips_create_file_item() {
        let recents = vec![recent("file:///home/me/api", "api", RecentKind::Folder)];
        let prefs = Preferences {
            create_file: true,
            ..Preferences::default()
        };
        assert_eq!(result_items("api", &recents, &prefs)[0].target.uri, "api");

        let best = best_match("api", &recents, &prefs).unwrap();
        assert_eq!(best.target.uri, "file:///home/me/api");
        assert_eq!(best.target.option, "--folder-uri");

        assert!(best_match("api", &[], &prefs).is_none());
    }

    #[test]
    fn test_exclude_dirs() {
        let recents = sample();
        let ranked = rank_recents("", &recents, &["/tmp".to_string(), "notes".to_string()]);
        let labels: Vec<&str> = ranked.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["api", "Website"]);
    }

    #[test]
    fn test_capped_at_max_results() {
        let recents: Vec<Recent> = (0..30)
            .map(|i| recent(&format!("file:///p/{i}"), &format!("p{i}"), RecentKind::Folder))
            .collect();
        assert_eq!(rank_recents("p", &recents, &[]).len(), MAX_RESULTS);
    }

    #[test]
    fn test_result_items_decode_and_targets() {
        let recents = sample();
        let prefs = Preferences::default();
        let items = result_items("todo", &recents, &prefs);
        let todo = &items[0];
        assert_eq!(todo.name, "Todo List.md");
        assert_eq!(todo.description, "/home/me/notes/Todo List.md");
        assert_eq!(todo.icon, "file");
        assert_eq!(todo.target.option, "--file-uri");
        assert_eq!(todo.target.uri, "file:///home/me/notes/Todo%20List.md");
    }

    #[test]
    fn test_create_file_item() {
        let recents = sample();
        let prefs = Preferences {
            create_file: true,
            ..Preferences::default()
        };
        let items = result_items("~/new.txt", &recents, &prefs);
        assert_eq!(items[0].name, "~/new.txt");
        assert_eq!(items[0].icon, "icon");
        assert!(items[0].target.option.is_empty());
        assert_eq!(items.len(), recents.len() + 1);

        let items = result_items("   ", &recents, &prefs);
        assert_eq!(items.len(), recents.len());
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path("file:///home/me/My%20Project"), "/home/me/My Project");
        assert_eq!(clean_path("vscode-remote://ssh-remote%2Bbox/srv/app"), "/srv/app");
        assert_eq!(clean_path("not a uri"), "not a uri");
    }
}
