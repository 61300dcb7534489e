use super::App;

impl App {
    // ─── List navigation ───────────────────────────────────

    pub fn move_down(&mut self) {
        if !self.books.is_empty() && self.selected_index < self.books.len() - 1 {
            self.selected_index += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn move_to_bottom(&mut self) {
        if !self.books.is_empty() {
            self.selected_index = self.books.len() - 1;
        }
    }

    // ─── Detail scrolling ──────────────────────────────────

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_detail_top(&mut self) {
        self.detail_scroll = 0;
    }
}
