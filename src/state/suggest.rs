/// Suggestion panel cursor. The panel is either closed, open without a
/// selection, or open with the cursor on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestCursor {
    #[default]
    Closed,
    Open {
        selected: Option<usize>,
    },
}

impl SuggestCursor {
    pub fn open() -> Self {
        Self::Open { selected: None }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn selected(self) -> Option<usize> {
        match self {
            Self::Open { selected } => selected,
            Self::Closed => None,
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Moves the cursor down with wraparound. From no selection the cursor
    /// lands on the first row. No-op while closed or when the list is empty.
    pub fn move_down(&mut self, len: usize) {
        let Self::Open { selected } = self else {
            return;
        };
        if len == 0 {
            return;
        }
        *selected = Some(match *selected {
            Some(index) => (index + 1) % len,
            None => 0,
        });
    }

    /// Moves the cursor up with wraparound. From no selection the cursor
    /// lands on the last row.
    pub fn move_up(&mut self, len: usize) {
        let Self::Open { selected } = self else {
            return;
        };
        if len == 0 {
            return;
        }
        *selected = Some(match *selected {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        });
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_cursor_ignores_movement() {
        let mut cursor = SuggestCursor::Closed;
        cursor.move_down(5);
        assert_eq!(cursor, SuggestCursor::Closed);
    }

    #[test]
    fn down_from_no_selection_lands_on_first() {
        let mut cursor = SuggestCursor::open();
        cursor.move_down(3);
        assert_eq!(cursor.selected(), Some(0));
    }

    #[test]
    fn up_from_no_selection_lands_on_last() {
        let mut cursor = SuggestCursor::open();
        cursor.move_up(3);
        assert_eq!(cursor.selected(), Some(2));
    }

    #[test]
    fn movement_wraps_around() {
        let mut cursor = SuggestCursor::open();
        cursor.move_down(2);
        cursor.move_down(2);
        cursor.move_down(2);
        assert_eq!(cursor.selected(), Some(0));

        cursor.move_up(2);
        assert_eq!(cursor.selected(), Some(1));
    }

    #[test]
    fn empty_list_keeps_no_selection() {
        let mut cursor = SuggestCursor::open();
        cursor.move_down(0);
        assert_eq!(cursor.selected(), None);
    }

}
