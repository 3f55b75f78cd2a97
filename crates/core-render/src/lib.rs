//! Rendering for merge-sort reports.
//!
//! The sort core only knows about `ReportSink`. This crate supplies the sink
//! that draws: `RowRenderer` maps each report's depth to a lane (row) and
//! each value to a colored marker whose lightness encodes magnitude. Where
//! the lanes end up is decided by a `Surface`:
//!
//! - `HtmlDocument`: in-memory element tree rendered to a standalone page.
//!   Containers (`{sort_name}_container`) are created up front; rows
//!   (`{sort_name}_row_{depth}`) appear on first reference, ordered by depth.
//! - `TerminalSurface`: crossterm output into a screen region, one line per
//!   depth, flushed once per report with optional frame pacing.
//!
//! Invariants:
//! - Rendering is additive; rows are never cleared or rewritten.
//! - Item width is `100 / item_count` percent of the row.
//! - Color is `hsl(hue, saturation%, lightness%)` with lightness from
//!   `ColorScheme::lightness`.
//! - A missing container is an error (`RenderError::MissingContainer`), never
//!   created implicitly.
//!
//! Exposed Components:
//! - `color`: `ColorScheme`, `Hsl` (CSS string, RGB, terminal color).
//! - `surface`: `Surface` trait, `ItemStyle`, id helpers.
//! - `row_renderer`: `RowRenderer` sink and `RenderStats`.
//! - `html`: `HtmlDocument` surface.
//! - `terminal_surface`: `TerminalSurface` and `Region`.
//! - `writer`: terminal command queue used by the terminal surface.

pub mod color;
pub mod error;
pub mod html;
pub mod row_renderer;
pub mod surface;
pub mod terminal_surface;
pub mod writer;

pub use color::{ColorScheme, Hsl};
pub use error::RenderError;
pub use html::HtmlDocument;
pub use row_renderer::{RenderStats, RowRenderer};
pub use surface::{ItemStyle, Surface, container_id, row_id};
pub use terminal_surface::{Region, TerminalSurface};
