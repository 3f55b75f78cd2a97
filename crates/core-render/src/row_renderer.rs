//! Row renderer: the `ReportSink` that turns sort reports into lanes of bars.
//!
//! Each report at depth `d` appends one item per value to the row
//! `{sort_name}_row_{d}`, creating that row on first use. Rows are never
//! cleared; in a single sort every depth receives at most `item_count` items
//! in total, so a row never overflows 100%.
//!
//! Failure handling: the sink interface cannot return errors, so the first
//! surface error is stored and every later report is ignored. `finish`
//! surfaces the stored error.

use crate::color::ColorScheme;
use crate::error::RenderError;
use crate::surface::{ItemStyle, Surface, container_id, row_id};
use core_sort::ReportSink;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub reports: u64,
    pub rows_created: u64,
    pub items_drawn: u64,
}

pub struct RowRenderer<S> {
    sort_name: String,
    container_id: String,
    item_count: usize,
    scheme: ColorScheme,
    surface: S,
    stats: RenderStats,
    error: Option<RenderError>,
}

impl<S: Surface> RowRenderer<S> {
    pub fn new(
        sort_name: impl Into<String>,
        item_count: usize,
        scheme: ColorScheme,
        surface: S,
    ) -> Result<Self, RenderError> {
        if item_count == 0 {
            return Err(RenderError::EmptyItemCount);
        }
        let sort_name = sort_name.into();
        Ok(Self {
            container_id: container_id(&sort_name),
            sort_name,
            item_count,
            scheme,
            surface,
            stats: RenderStats::default(),
            error: None,
        })
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Render one report, propagating surface errors.
    pub fn render(&mut self, values: &[u32], depth: usize) -> Result<(), RenderError> {
        if !self.surface.contains(&self.container_id) {
            return Err(RenderError::MissingContainer {
                id: self.container_id.clone(),
            });
        }
        let row = row_id(&self.sort_name, depth);
        if !self.surface.contains(&row) {
            self.surface.create_row(&self.container_id, &row, depth)?;
            self.stats.rows_created += 1;
            debug!(target: "render", row = row.as_str(), depth, "row_created");
        }

        let width_percent = 100.0 / self.item_count as f64;
        for &value in values {
            let item = ItemStyle {
                width_percent,
                color: self.scheme.color_for(value, self.item_count),
            };
            self.surface.append_item(&row, &item)?;
        }
        self.surface.commit()?;

        self.stats.reports += 1;
        self.stats.items_drawn += values.len() as u64;
        trace!(target: "render", row = row.as_str(), items = values.len(), "report_drawn");
        Ok(())
    }

    /// Consume the renderer, returning the surface or the first error seen.
    pub fn finish(self) -> Result<S, RenderError> {
        match self.error {
            Some(e) => Err(e),
            None => {
                debug!(
                    target: "render",
                    sort = self.sort_name.as_str(),
                    reports = self.stats.reports,
                    rows = self.stats.rows_created,
                    items = self.stats.items_drawn,
                    "render_finished"
                );
                Ok(self.surface)
            }
        }
    }
}

impl<S: Surface> ReportSink<u32> for RowRenderer<S> {
    fn report(&mut self, values: &[u32], depth: usize) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.render(values, depth) {
            warn!(target: "render", sort = self.sort_name.as_str(), depth, error = %e, "render_failed");
            self.error = Some(e);
        }
    }
}
