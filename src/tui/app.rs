use crate::config::Preferences;
use crate::recents::Recent;
use crate::search::{self, ResultItem};

#[derive(Debug)]
pub struct App {
    /// Recents read from the editor's store
    recents: Vec<Recent>,
    prefs: Preferences,
    /// Query as typed, keyword included if the user typed one
    pub query: String,
    /// Ranked items for the current query
    pub items: Vec<ResultItem>,
    /// Currently selected item index
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// Item chosen with Enter, opened after the picker closes
    pub chosen: Option<ResultItem>,
    /// Temporary message to display
    pub message: Option<String>,
    pub terminal_width: usize,
    pub terminal_height: usize,
    /// Editor variant (for display)
    pub editor_name: String,
}

impl App {
    pub fn new(
        recents: Vec<Recent>,
        prefs: Preferences,
        editor_name: String,
        query: String,
        terminal_width: usize,
        terminal_height: usize,
    ) -> Self {
        let mut app = App {
            recents,
            prefs,
            query,
            items: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            chosen: None,
            message: None,
            terminal_width,
            terminal_height,
            editor_name,
        };
        app.refresh_items();
        app
    }

    /// Re-rank items for the current query and reset the selection
    pub fn refresh_items(&mut self) {
        let query = search::strip_keyword(&self.query, &self.prefs.keyword);
        self.items = search::result_items(query, &self.recents, &self.prefs);
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn keyword(&self) -> &str {
        &self.prefs.keyword
    }

    pub fn current_item(&self) -> Option<&ResultItem> {
        self.items.get(self.selected_index)
    }

    pub fn select_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            if self.selected_index < self.scroll_offset {
                self.scroll_offset = self.selected_index;
            }
        }
    }

    pub fn select_down(&mut self) {
        if self.selected_index < self.items.len().saturating_sub(1) {
            self.selected_index += 1;
            let usable_height = self.get_list_height().max(1);
            if self.selected_index >= self.scroll_offset + usable_height {
                self.scroll_offset = self.selected_index + 1 - usable_height;
            }
        }
    }

    pub fn query_push(&mut self, ch: char) {
        self.query.push(ch);
        self.message = None;
        self.refresh_items();
    }

    pub fn query_pop(&mut self) {
        self.query.pop();
        self.message = None;
        self.refresh_items();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refresh_items();
    }

    /// Choose the selected item. Returns false when there is nothing to choose.
    pub fn choose(&mut self) -> bool {
        match self.current_item().cloned() {
            Some(item) => {
                self.chosen = Some(item);
                true
            }
            None => {
                self.show_message("Nothing to open");
                false
            }
        }
    }

    /// Rows available for the item list
    pub fn get_list_height(&self) -> usize {
        // Header: 2 lines (title + separator)
        // Query line: 1 line
        // Status bar: 1 line
        let reserved = 4;
        self.terminal_height.saturating_sub(reserved)
    }

    pub fn get_visible_items(&self) -> &[ResultItem] {
        let end = (self.scroll_offset + self.get_list_height()).min(self.items.len());
        if self.scroll_offset >= end {
            &[]
        } else {
            &self.items[self.scroll_offset..end]
        }
    }

    pub fn get_count_info(&self) -> String {
        format!("{} of {} recents", self.items.len(), self.recents.len())
    }

    pub fn show_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn update_terminal_size(&mut self, width: usize, height: usize) {
        self.terminal_width = width;
        self.terminal_height = height;
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::app_with;
    use super::*;

    #[test]
    fn test_app_creation_lists_recents() {
        let app = app_with(3, 24);
        assert_eq!(app.items.len(), 3);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.get_count_info(), "3 of 3 recents");
    }

    #[test]
    fn test_query_editing_reranks() {
        let mut app = app_with(12, 24);
        app.query_push('1');
        app.query_push('1');
        assert_eq!(app.items[0].name, "project11");
        app.query_pop();
        assert_eq!(app.query, "1");
        assert_eq!(app.items[0].name, "project1");
        assert_eq!(app.items[1].name, "project10");
    }

    #[test]
    fn test_keyword_prefix_is_ignored() {
        let mut app = app_with(12, 24);
        for ch in "code project7".chars() {
            app.query_push(ch);
        }
        assert_eq!(app.items[0].name, "project7");
    }

    #[test]
    fn test_scrolls_with_selection() {
        let mut app = app_with(10, 7);
        assert_eq!(app.get_list_height(), 3);
        for _ in 0..4 {
            app.select_down();
        }
        assert_eq!(app.selected_index, 4);
        assert_eq!(app.scroll_offset, 2);
        assert_eq!(app.get_visible_items().len(), 3);
        for _ in 0..4 {
            app.select_up();
        }
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_choose_empty() {
        let mut app = app_with(0, 24);
        assert!(!app.choose());
        assert!(app.chosen.is_none());
        assert!(app.message.is_some());
    }
}
