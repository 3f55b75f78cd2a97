//! In-memory HTML document surface.
//!
//! Mirrors a page with pre-existing containers: rows are `display: flex`
//! strips and items are fixed-width blocks styled inline. Rows are kept in
//! depth order within their container (root lane on top) regardless of the
//! order in which they were first referenced.

use crate::error::RenderError;
use crate::surface::{ItemStyle, Surface};
use std::fmt::Write as _;
use std::path::Path;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 24px; }
.sort-container { display: flex; flex-direction: column; gap: 4px; margin-bottom: 32px; }
.sort-row { display: flex; height: 24px; }
.sort-item { height: 100%; }
";

#[derive(Debug, Clone, PartialEq)]
pub struct HtmlRow {
    pub id: String,
    pub depth: usize,
    pub items: Vec<ItemStyle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HtmlContainer {
    pub id: String,
    pub rows: Vec<HtmlRow>,
}

#[derive(Debug, Clone)]
pub struct HtmlDocument {
    title: String,
    containers: Vec<HtmlContainer>,
}

impl HtmlDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            containers: Vec::new(),
        }
    }

    /// Add an empty container. Adding an existing id is a no-op.
    pub fn add_container(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.container(&id).is_none() {
            self.containers.push(HtmlContainer {
                id,
                rows: Vec::new(),
            });
        }
    }

    pub fn containers(&self) -> &[HtmlContainer] {
        &self.containers
    }

    pub fn container(&self, id: &str) -> Option<&HtmlContainer> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn row(&self, id: &str) -> Option<&HtmlRow> {
        self.containers
            .iter()
            .flat_map(|c| c.rows.iter())
            .find(|r| r.id == id)
    }

    fn row_mut(&mut self, id: &str) -> Option<&mut HtmlRow> {
        self.containers
            .iter_mut()
            .flat_map(|c| c.rows.iter_mut())
            .find(|r| r.id == id)
    }

    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape(&self.title));
        let _ = writeln!(out, "<style>\n{STYLE}</style>");
        out.push_str("</head>\n<body>\n");
        for container in &self.containers {
            let _ = writeln!(
                out,
                "<div id=\"{}\" class=\"sort-container\">",
                escape(&container.id)
            );
            for row in &container.rows {
                let _ = write!(out, "<div id=\"{}\" class=\"sort-row\">", escape(&row.id));
                for item in &row.items {
                    let _ = write!(
                        out,
                        "<div class=\"sort-item\" style=\"{}\"></div>",
                        item.to_css()
                    );
                }
                out.push_str("</div>\n");
            }
            out.push_str("</div>\n");
        }
        out.push_str("</body>\n</html>\n");
        out
    }

    pub fn write_to(&self, path: &Path) -> Result<(), RenderError> {
        std::fs::write(path, self.to_html())?;
        Ok(())
    }
}

impl Surface for HtmlDocument {
    fn contains(&self, id: &str) -> bool {
        self.container(id).is_some() || self.row(id).is_some()
    }

    fn create_row(
        &mut self,
        container_id: &str,
        row_id: &str,
        depth: usize,
    ) -> Result<(), RenderError> {
        let container = self
            .containers
            .iter_mut()
            .find(|c| c.id == container_id)
            .ok_or_else(|| RenderError::MissingContainer {
                id: container_id.to_string(),
            })?;
        let at = container.rows.partition_point(|r| r.depth <= depth);
        container.rows.insert(
            at,
            HtmlRow {
                id: row_id.to_string(),
                depth,
                items: Vec::new(),
            },
        );
        Ok(())
    }

    fn append_item(&mut self, row_id: &str, item: &ItemStyle) -> Result<(), RenderError> {
        let row = self.row_mut(row_id).ok_or_else(|| RenderError::MissingRow {
            id: row_id.to_string(),
        })?;
        row.items.push(*item);
        Ok(())
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsl;

    fn item(lightness: f64) -> ItemStyle {
        ItemStyle {
            width_percent: 50.0,
            color: Hsl {
                hue: 200,
                saturation: 70,
                lightness,
            },
        }
    }

    #[test]
    fn rows_ordered_by_depth() {
        let mut doc = HtmlDocument::new("t");
        doc.add_container("s_container");
        doc.create_row("s_container", "s_row_2", 2).unwrap();
        doc.create_row("s_container", "s_row_0", 0).unwrap();
        doc.create_row("s_container", "s_row_1", 1).unwrap();
        let depths: Vec<usize> = doc
            .container("s_container")
            .unwrap()
            .rows
            .iter()
            .map(|r| r.depth)
            .collect();
        assert_eq!(depths, vec![0, 1, 2]);
    }

    #[test]
    fn missing_container_and_row() {
        let mut doc = HtmlDocument::new("t");
        assert!(matches!(
            doc.create_row("nope_container", "nope_row_0", 0),
            Err(RenderError::MissingContainer { id }) if id == "nope_container"
        ));
        assert!(matches!(
            doc.append_item("nope_row_0", &item(30.0)),
            Err(RenderError::MissingRow { .. })
        ));
    }

    #[test]
    fn add_container_idempotent() {
        let mut doc = HtmlDocument::new("t");
        doc.add_container("a_container");
        doc.add_container("a_container");
        assert_eq!(doc.containers().len(), 1);
    }

    #[test]
    fn html_contains_ids_and_styles() {
        let mut doc = HtmlDocument::new("<demo>");
        doc.add_container("m_container");
        doc.create_row("m_container", "m_row_0", 0).unwrap();
        doc.append_item("m_row_0", &item(30.0)).unwrap();
        let html = doc.to_html();
        assert!(html.contains("<title>&lt;demo&gt;</title>"));
        assert!(html.contains("<div id=\"m_container\" class=\"sort-container\">"));
        assert!(html.contains("<div id=\"m_row_0\" class=\"sort-row\">"));
        assert!(html.contains("style=\"width: 50%; background-color: hsl(200, 70%, 30%);\""));
    }

    #[test]
    fn write_to_file() {
        let mut doc = HtmlDocument::new("t");
        doc.add_container("x_container");
        let tmp = tempfile::NamedTempFile::new().unwrap();
        doc.write_to(tmp.path()).unwrap();
        let written = std::fs::read_to_string(tmp.path()).unwrap();
        assert_eq!(written, doc.to_html());
    }
}
