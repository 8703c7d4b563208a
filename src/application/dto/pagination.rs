#[derive(Debug, Clone)]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> CursorPage<T> {
    pub const fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    /// Token for the next page, or the empty string once exhausted.
    pub fn next_cursor_or_empty(&self) -> &str {
        self.next_cursor.as_deref().unwrap_or_default()
    }
}
