use crate::commands::Session;
use crate::error::Result;
use crate::search::{self, ResultItem};
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 32;

pub async fn run_list(session: &Session, query: &str, json: bool) -> Result<()> {
    let (recents, _) = session.recents()?;
    let items = search::result_items(query, &recents, &session.prefs);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No recents match '{}'", query);
        return Ok(());
    }

    for item in &items {
        println!("{}", format_row(item));
    }

    Ok(())
}

/// `icon  name  description`, with the name padded to a fixed display width
pub fn format_row(item: &ResultItem) -> String {
    let padding = NAME_WIDTH.saturating_sub(item.name.width());
    format!(
        "{:<9} {}{} {}",
        item.icon,
        item.name,
        " ".repeat(padding),
        item.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::LaunchTarget;

    #[test]
    fn test_format_row() {
        let item = ResultItem {
            name: "api".to_string(),
            description: "/home/me/api".to_string(),
            icon: "folder",
            target: LaunchTarget {
                option: "--folder-uri".to_string(),
                uri: "file:///home/me/api".to_string(),
            },
        };
        let row = format_row(&item);
        assert!(row.starts_with("folder    api "));
        assert!(row.ends_with(" /home/me/api"));
        assert_eq!(row.len(), 10 + NAME_WIDTH + 1 + "/home/me/api".len());
    }
}
