//! Crossterm surface: one terminal line per recursion depth.
//!
//! The container is a rectangular region of the screen. Row `d` is drawn on
//! line `region.y + d`. Item widths arrive as percentages; each row keeps a
//! running percentage and maps both ends of an item to columns with rounding,
//! so adjacent items never overlap and a full row spans exactly
//! `region.width` cells.
//!
//! Every report is queued through a `Writer` and flushed in `commit`, after
//! which the configured frame delay elapses (animation pacing).

use crate::error::RenderError;
use crate::surface::{ItemStyle, Surface};
use crate::writer::Writer;
use core_terminal::TerminalCapabilities;
use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct RowCursor {
    line: u16,
    filled_percent: f64,
}

pub struct TerminalSurface<W: Write> {
    out: W,
    container_id: String,
    region: Region,
    caps: TerminalCapabilities,
    frame_delay: Duration,
    rows: HashMap<String, RowCursor>,
    writer: Writer,
    frames: u64,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(
        out: W,
        container_id: impl Into<String>,
        region: Region,
        caps: TerminalCapabilities,
    ) -> Self {
        Self {
            out,
            container_id: container_id.into(),
            region,
            caps,
            frame_delay: Duration::ZERO,
            rows: HashMap::new(),
            writer: Writer::new(),
            frames: 0,
        }
    }

    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Number of committed frames (one per report).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Columns covered so far in `row_id` (relative to the region).
    pub fn row_fill(&self, row_id: &str) -> Option<u16> {
        self.rows
            .get(row_id)
            .map(|c| self.column_at(c.filled_percent))
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn column_at(&self, percent: f64) -> u16 {
        let col = (percent.clamp(0.0, 100.0) / 100.0 * f64::from(self.region.width)).round();
        col as u16
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn contains(&self, id: &str) -> bool {
        id == self.container_id || self.rows.contains_key(id)
    }

    fn create_row(
        &mut self,
        container_id: &str,
        row_id: &str,
        depth: usize,
    ) -> Result<(), RenderError> {
        if container_id != self.container_id {
            return Err(RenderError::MissingContainer {
                id: container_id.to_string(),
            });
        }
        if depth >= usize::from(self.region.height) {
            return Err(RenderError::RowOutOfBounds {
                id: row_id.to_string(),
                depth,
                available: self.region.height,
            });
        }
        self.rows.insert(
            row_id.to_string(),
            RowCursor {
                line: self.region.y + depth as u16,
                filled_percent: 0.0,
            },
        );
        Ok(())
    }

    fn append_item(&mut self, row_id: &str, item: &ItemStyle) -> Result<(), RenderError> {
        let cursor = *self.rows.get(row_id).ok_or_else(|| RenderError::MissingRow {
            id: row_id.to_string(),
        })?;
        let end_percent = cursor.filled_percent + item.width_percent;
        let start = self.column_at(cursor.filled_percent);
        let end = self.column_at(end_percent);
        if let Some(c) = self.rows.get_mut(row_id) {
            c.filled_percent = end_percent;
        }

        let cells = end.saturating_sub(start);
        if cells > 0 {
            self.writer.move_to(self.region.x + start, cursor.line);
            self.writer
                .set_background(item.color.to_terminal(self.caps.truecolor));
            self.writer.print(" ".repeat(usize::from(cells)));
            self.writer.reset_color();
        }
        Ok(())
    }

    fn commit(&mut self) -> Result<(), RenderError> {
        self.writer.flush_to(&mut self.out)?;
        self.frames += 1;
        if !self.frame_delay.is_zero() {
            std::thread::sleep(self.frame_delay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsl;

    fn surface(width: u16, height: u16) -> TerminalSurface<Vec<u8>> {
        TerminalSurface::new(
            Vec::new(),
            "t_container",
            Region::new(0, 0, width, height),
            TerminalCapabilities::basic(),
        )
    }

    fn item(width_percent: f64) -> ItemStyle {
        ItemStyle {
            width_percent,
            color: Hsl {
                hue: 0,
                saturation: 0,
                lightness: 50.0,
            },
        }
    }

    #[test]
    fn rejects_foreign_container_and_deep_rows() {
        let mut s = surface(10, 2);
        assert!(matches!(
            s.create_row("other_container", "other_row_0", 0),
            Err(RenderError::MissingContainer { .. })
        ));
        assert!(matches!(
            s.create_row("t_container", "t_row_2", 2),
            Err(RenderError::RowOutOfBounds { available: 2, .. })
        ));
    }

    #[test]
    fn append_requires_row() {
        let mut s = surface(10, 2);
        assert!(matches!(
            s.append_item("t_row_0", &item(10.0)),
            Err(RenderError::MissingRow { .. })
        ));
    }

    #[test]
    fn commit_flushes_and_counts_frames() {
        let mut s = surface(4, 1);
        s.create_row("t_container", "t_row_0", 0).unwrap();
        s.append_item("t_row_0", &item(50.0)).unwrap();
        s.commit().unwrap();
        assert_eq!(s.frames(), 1);
        let bytes = s.into_inner();
        let text = String::from_utf8(bytes).unwrap();
        // 50% of 4 columns -> two cells of background color.
        assert!(text.contains("  "));
        assert!(!text.contains("   "));
    }
}
