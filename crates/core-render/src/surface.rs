//! Rendering surface seam and id naming.
//!
//! A surface is an id-addressed tree: containers hold rows, rows hold items.
//! Containers must exist before rendering starts; rows are created lazily by
//! the row renderer the first time a depth is reported. Ids are
//! `{sort_name}_container` and `{sort_name}_row_{depth}`, so several sorts can
//! share one surface as long as their names differ.

use crate::color::Hsl;
use crate::error::RenderError;

pub fn container_id(sort_name: &str) -> String {
    format!("{sort_name}_container")
}

pub fn row_id(sort_name: &str, depth: usize) -> String {
    format!("{sort_name}_row_{depth}")
}

/// One fixed-width marker within a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    /// Share of the row width, in percent.
    pub width_percent: f64,
    pub color: Hsl,
}

impl ItemStyle {
    /// Inline CSS declaration block for this item.
    pub fn to_css(&self) -> String {
        format!(
            "width: {}%; background-color: {};",
            self.width_percent,
            self.color.to_css()
        )
    }
}

pub trait Surface {
    /// Whether a container or row with this id exists.
    fn contains(&self, id: &str) -> bool;

    /// Create row `row_id` inside the existing container `container_id`.
    fn create_row(
        &mut self,
        container_id: &str,
        row_id: &str,
        depth: usize,
    ) -> Result<(), RenderError>;

    /// Append an item to the end of an existing row.
    fn append_item(&mut self, row_id: &str, item: &ItemStyle) -> Result<(), RenderError>;

    /// Called once after every report; surfaces that present incrementally
    /// make the report visible here.
    fn commit(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn contains(&self, id: &str) -> bool {
        (**self).contains(id)
    }
    fn create_row(
        &mut self,
        container_id: &str,
        row_id: &str,
        depth: usize,
    ) -> Result<(), RenderError> {
        (**self).create_row(container_id, row_id, depth)
    }
    fn append_item(&mut self, row_id: &str, item: &ItemStyle) -> Result<(), RenderError> {
        (**self).append_item(row_id, item)
    }
    fn commit(&mut self) -> Result<(), RenderError> {
        (**self).commit()
    }
}
