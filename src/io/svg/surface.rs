use std::{fmt::Write as _, io::Write, path::Path};

use geo::{Coord, Rect};

use crate::{
    error::Result,
    surface::{DrawingSurface, ElementId, PathData, Style, TextAnchor},
};

use super::{write_svg_footer, write_svg_header, write_svg_styles, SvgStringWriter, SvgWriter};

/// Approximate glyph box used for text bounding boxes (10px sans-serif).
const TEXT_EM: f64 = 10.0;

#[derive(Debug, Clone)]
enum Node {
    Open { id: String, translate: (f64, f64) },
    Close,
    Element(usize),
}

#[derive(Debug, Clone)]
struct Element {
    class: Option<&'static str>,
    markup: String,
    bbox: Option<Rect<f64>>,
}

/// Retained SVG scene: records drawing commands, answers bounding-box queries,
/// and serializes to a standalone SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    nodes: Vec<Node>,
    elements: Vec<Element>,
    offsets: Vec<(f64, f64)>,
    /// Id of the first element drawn since the last clear.
    base: u32,
}

impl SvgSurface {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn size(&self) -> (f64, f64) { (self.width, self.height) }

    /// Number of live elements, optionally restricted to one style class.
    pub fn count(&self, class: Option<&str>) -> usize {
        self.elements.iter()
            .filter(|element| class.is_none() || element.class == class)
            .count()
    }

    /// Markup of a live element.
    pub fn markup(&self, id: ElementId) -> Option<&str> {
        self.element(id).map(|element| element.markup.as_str())
    }

    fn element(&self, id: ElementId) -> Option<&Element> {
        id.0.checked_sub(self.base).and_then(|i| self.elements.get(i as usize))
    }

    fn offset(&self) -> (f64, f64) {
        self.offsets.last().copied().unwrap_or((0.0, 0.0))
    }

    fn push(&mut self, class: Option<&'static str>, markup: String, bbox: Option<Rect<f64>>) -> ElementId {
        let (dx, dy) = self.offset();
        let bbox = bbox.map(|rect| Rect::new(
            Coord { x: rect.min().x + dx, y: rect.min().y + dy },
            Coord { x: rect.max().x + dx, y: rect.max().y + dy },
        ));
        let id = ElementId(self.base + self.elements.len() as u32);
        self.nodes.push(Node::Element(self.elements.len()));
        self.elements.push(Element { class, markup, bbox });
        id
    }

    /// Serialize the scene as a complete SVG document.
    pub fn write_svg<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_svg_header(writer, self.width, self.height)?;
        write_svg_styles(writer)?;
        for node in &self.nodes {
            match node {
                Node::Open { id, translate: (x, y) } => {
                    writeln!(writer, r#"<g id="{}" transform="translate({x},{y})">"#, escape(id))?
                }
                Node::Close => writeln!(writer, "</g>")?,
                Node::Element(i) => writeln!(writer, "{}", self.elements[*i].markup)?,
            }
        }
        write_svg_footer(writer)
    }

    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        self.write_svg(&mut writer)?;
        writer.into_string()
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let mut writer = SvgWriter::new(path)?;
        self.write_svg(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl DrawingSurface for SvgSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.base += self.elements.len() as u32;
        self.width = width;
        self.height = height;
        self.nodes.clear();
        self.elements.clear();
        self.offsets.clear();
    }

    fn begin_group(&mut self, id: &str, translate: (f64, f64)) {
        let (dx, dy) = self.offset();
        self.offsets.push((dx + translate.0, dy + translate.1));
        self.nodes.push(Node::Open { id: id.to_string(), translate });
    }

    fn end_group(&mut self) {
        if self.offsets.pop().is_some() {
            self.nodes.push(Node::Close);
        }
    }

    fn draw_path(&mut self, path: &PathData, style: &Style) -> ElementId {
        let id = self.next_id();
        let markup = format!(r#"<path data-element="{}"{} d="{}"/>"#, id.0, attributes(style), path.d().trim_start());
        self.push(style.class, markup, path.bounds())
    }

    fn draw_rect(&mut self, rect: Rect<f64>, style: &Style) -> ElementId {
        let id = self.next_id();
        let markup = format!(
            r#"<rect data-element="{}"{} x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}"/>"#,
            id.0, attributes(style), rect.min().x, rect.min().y, rect.width(), rect.height(),
        );
        self.push(style.class, markup, Some(rect))
    }

    fn draw_line(&mut self, from: Coord<f64>, to: Coord<f64>, style: &Style) -> ElementId {
        let id = self.next_id();
        let markup = format!(
            r#"<line data-element="{}"{} x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}"/>"#,
            id.0, attributes(style), from.x, from.y, to.x, to.y,
        );
        self.push(style.class, markup, Some(Rect::new(from, to)))
    }

    fn draw_text(&mut self, at: Coord<f64>, text: &str, anchor: TextAnchor, style: &Style) -> ElementId {
        let id = self.next_id();
        let (anchor_attr, left) = match anchor {
            TextAnchor::Start => ("start", 0.0),
            TextAnchor::Middle => ("middle", 0.5),
            TextAnchor::End => ("end", 1.0),
        };
        let markup = format!(
            r#"<text data-element="{}"{} x="{:.3}" y="{:.3}" text-anchor="{anchor_attr}">{}</text>"#,
            id.0, attributes(style), at.x, at.y, escape(text),
        );
        let width = 0.6 * TEXT_EM * text.chars().count() as f64;
        let min = Coord { x: at.x - left * width, y: at.y - TEXT_EM };
        self.push(style.class, markup, Some(Rect::new(min, Coord { x: min.x + width, y: at.y })))
    }

    fn bounding_box(&self, id: ElementId) -> Option<Rect<f64>> {
        self.element(id).and_then(|element| element.bbox)
    }
}

impl SvgSurface {
    #[inline]
    fn next_id(&self) -> ElementId {
        ElementId(self.base + self.elements.len() as u32)
    }
}

fn attributes(style: &Style) -> String {
    let mut out = String::new();
    if let Some(class) = style.class { let _ = write!(out, r#" class="{class}""#); }
    if let Some(fill) = &style.fill { let _ = write!(out, r#" fill="{}""#, escape(fill)); }
    if let Some(stroke) = &style.stroke { let _ = write!(out, r#" stroke="{}""#, escape(stroke)); }
    if let Some(width) = style.stroke_width { let _ = write!(out, r#" stroke-width="{width}""#); }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
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
