use crate::ui::span::Span;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn push(&mut self, span: Span) {
        if !span.text().is_empty() {
            self.spans.push(span);
        }
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text()).collect()
    }
}

/// A line paired with the display-column offset of the hardware cursor,
/// when the cursor should rest on this line.
#[derive(Clone, Debug, Default)]
pub struct RenderLine {
    pub line: Line,
    pub cursor_offset: Option<usize>,
}

impl RenderLine {
    pub fn new(line: Line) -> Self {
        Self {
            line,
            cursor_offset: None,
        }
    }

    pub fn with_cursor(mut self, offset: usize) -> Self {
        self.cursor_offset = Some(offset);
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct Frame {
    lines: Vec<RenderLine>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[RenderLine] {
        &self.lines
    }

    pub fn push(&mut self, line: RenderLine) {
        self.lines.push(line);
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(RenderLine::new(line));
    }

    pub fn push_blank(&mut self) {
        self.lines.push(RenderLine::default());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Row and column of the cursor within the frame, if any line claims it.
    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.lines
            .iter()
            .enumerate()
            .find_map(|(row, line)| line.cursor_offset.map(|col| (col, row)))
    }
}
