use crate::terminal::Terminal;
use crate::ui::frame::Frame;
use std::io::{self, Write};

struct RenderRegion {
    start_row: u16,
    line_count: usize,
}

/// Draws frames inline, anchored to the row where the app started, and
/// repaints the same region on every render instead of scrolling output.
pub struct RenderPipeline {
    region: Option<RenderRegion>,
}

impl RenderPipeline {
    pub fn new() -> Self {
        Self { region: None }
    }

    pub fn render(&mut self, terminal: &mut Terminal, frame: &Frame) -> io::Result<()> {
        terminal.refresh_size()?;

        let start = self.ensure_region(terminal, frame.len())?;

        for (idx, render_line) in frame.lines().iter().enumerate() {
            let row = start + idx as u16;
            terminal.queue_move_cursor(0, row)?;
            terminal.queue_clear_line()?;
            terminal.render_line(&render_line.line)?;
        }

        self.clear_extra_lines(terminal, start, frame.len())?;
        if let Some(region) = &mut self.region {
            region.line_count = frame.len();
        }

        match frame.cursor() {
            Some((col, row)) => {
                terminal.queue_move_cursor(col as u16, start + row as u16)?;
                terminal.queue_show_cursor()?;
            }
            None => terminal.queue_hide_cursor()?,
        }

        terminal.flush()
    }

    pub fn move_to_end(&self, terminal: &mut Terminal) -> io::Result<()> {
        if let Some(region) = &self.region {
            let end_row = region.start_row + region.line_count as u16;
            terminal.queue_move_cursor(0, end_row)?;
            terminal.flush()?;
        }
        Ok(())
    }

    fn ensure_region(&mut self, terminal: &mut Terminal, line_count: usize) -> io::Result<u16> {
        if let Some(region) = &mut self.region {
            if line_count > region.line_count {
                let extra = line_count - region.line_count;
                let end_row = region.start_row + region.line_count as u16;
                terminal.queue_move_cursor(0, end_row)?;
                for _ in 0..extra {
                    writeln!(terminal.writer_mut())?;
                }
                terminal.flush()?;
                region.line_count = line_count;

                // Growing past the bottom of the screen scrolls everything
                // up, so the anchor has to move with it.
                terminal.refresh_cursor_position()?;
                let pos = terminal.cursor_position();
                region.start_row = pos.y.saturating_sub(line_count as u16);
            }
            return Ok(region.start_row);
        }

        terminal.refresh_cursor_position()?;
        let pos = terminal.cursor_position();
        terminal.queue_move_cursor(0, pos.y)?;

        for _ in 0..line_count {
            writeln!(terminal.writer_mut())?;
        }
        terminal.flush()?;

        terminal.refresh_cursor_position()?;
        let pos = terminal.cursor_position();
        let start = pos.y.saturating_sub(line_count as u16);

        self.region = Some(RenderRegion {
            start_row: start,
            line_count,
        });

        Ok(start)
    }

    fn clear_extra_lines(
        &self,
        terminal: &mut Terminal,
        start: u16,
        current_len: usize,
    ) -> io::Result<()> {
        let Some(region) = &self.region else {
            return Ok(());
        };

        if current_len >= region.line_count {
            return Ok(());
        }

        for idx in current_len..region.line_count {
            let row = start + idx as u16;
            terminal.queue_move_cursor(0, row)?;
            terminal.queue_clear_line()?;
        }

        Ok(())
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new()
    }
}
