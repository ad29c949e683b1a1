//! Scrolling and viewport management utilities
//!
//! Shared cursor/offset logic for the file browser and the format list.

/// Scrolling state for any scrollable list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// Current scroll offset (index of first visible item)
    pub offset: usize,
    /// Total number of items
    pub total_items: usize,
    /// Number of items that can be visible at once
    pub visible_items: usize,
    /// Currently selected item index
    pub selected_index: usize,
}

impl ScrollState {
    /// Create a new scroll state
    pub fn new(total_items: usize, visible_items: usize) -> Self {
        Self {
            offset: 0,
            total_items,
            visible_items: visible_items.max(1),
            selected_index: 0,
        }
    }

    /// Replace the item count (directory change) and move the cursor to the top
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.selected_index = 0;
        self.offset = 0;
    }

    /// Update visible items count (for window resize)
    pub fn update_visible_items(&mut self, new_visible_items: usize) {
        self.visible_items = new_visible_items.max(1);
        self.ensure_selected_visible();
    }

    /// Put the cursor on `index`, clamped to the list
    pub fn set_selected(&mut self, index: usize) {
        self.selected_index = index.min(self.last_index());
        self.ensure_selected_visible();
    }

    fn last_index(&self) -> usize {
        self.total_items.saturating_sub(1)
    }

    /// Move selection up by one item
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.ensure_selected_visible();
        }
    }

    /// Move selection down by one item
    pub fn move_down(&mut self) {
        if self.selected_index < self.last_index() {
            self.selected_index += 1;
            self.ensure_selected_visible();
        }
    }

    /// Move selection up by one page
    pub fn page_up(&mut self) {
        let jump_size = self.visible_items.saturating_sub(1).max(1);
        self.selected_index = self.selected_index.saturating_sub(jump_size);
        self.ensure_selected_visible();
    }

    /// Move selection down by one page
    pub fn page_down(&mut self) {
        let jump_size = self.visible_items.saturating_sub(1).max(1);
        self.selected_index = (self.selected_index + jump_size).min(self.last_index());
        self.ensure_selected_visible();
    }

    /// Jump to first item
    pub fn move_to_first(&mut self) {
        self.selected_index = 0;
        self.ensure_selected_visible();
    }

    /// Jump to last item
    pub fn move_to_last(&mut self) {
        self.selected_index = self.last_index();
        self.ensure_selected_visible();
    }

    /// Ensure the selected item is visible by adjusting scroll offset
    fn ensure_selected_visible(&mut self) {
        if self.selected_index < self.offset {
            self.offset = self.selected_index;
        } else if self.selected_index >= self.offset + self.visible_items {
            self.offset = self.selected_index + 1 - self.visible_items;
        }

        let max_offset = self.total_items.saturating_sub(self.visible_items);
        if self.offset > max_offset {
            self.offset = max_offset;
        }
    }

    /// Get the range of visible items (start, end)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (start + self.visible_items).min(self.total_items);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_state_new() {
        let scroll = ScrollState::new(10, 5);
        assert_eq!(scroll.offset, 0);
        assert_eq!(scroll.selected_index, 0);
        assert_eq!(scroll.visible_range(), (0, 5));
    }

    #[test]
    fn test_move_down_stops_at_last_item() {
        let mut scroll = ScrollState::new(3, 5);
        for _ in 0..10 {
            scroll.move_down();
        }
        assert_eq!(scroll.selected_index, 2);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        let mut scroll = ScrollState::new(10, 3);
        for _ in 0..4 {
            scroll.move_down();
        }
        assert_eq!(scroll.selected_index, 4);
        assert_eq!(scroll.visible_range(), (2, 5));

        scroll.move_to_first();
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_paging() {
        let mut scroll = ScrollState::new(20, 5);
        scroll.page_down();
        assert_eq!(scroll.selected_index, 4);
        scroll.move_to_last();
        assert_eq!(scroll.selected_index, 19);
        assert_eq!(scroll.visible_range(), (15, 20));
        scroll.page_up();
        assert_eq!(scroll.selected_index, 15);
    }

    #[test]
    fn test_empty_list_is_stable() {
        let mut scroll = ScrollState::new(0, 5);
        scroll.move_down();
        scroll.page_down();
        scroll.move_to_last();
        assert_eq!(scroll.selected_index, 0);
        assert_eq!(scroll.visible_range(), (0, 0));
    }

    #[test]
    fn test_set_selected_clamps_and_scrolls() {
        let mut scroll = ScrollState::new(10, 4);
        scroll.set_selected(42);
        assert_eq!(scroll.selected_index, 9);
        assert_eq!(scroll.visible_range(), (6, 10));
    }

    #[test]
    fn test_resize_keeps_selection_visible() {
        let mut scroll = ScrollState::new(10, 8);
        scroll.selected_index = 7;
        scroll.update_visible_items(3);
        assert_eq!(scroll.visible_range(), (5, 8));
    }
}
