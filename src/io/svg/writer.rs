//! SVG writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use crate::error::Result;

pub(crate) struct SvgWriter {
    writer: BufWriter<File>
}

/// String-based SVG writer for hosts that embed the markup directly
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { std::io::Result::Ok(()) }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(())
    }
}

impl SvgStringWriter {
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub(crate) fn into_string(self) -> Result<String> {
        Ok(String::from_utf8(self.buffer)?)
    }
}

impl SvgWriter {
    /// Create a new SVG writer to a file path
    pub(crate) fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self { writer: BufWriter::new(file) })
    }
}

/// Write the XML declaration and opening <svg> tag.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, width: f64, height: f64) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg" class="card" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"##)?;
    Ok(())
}

/// Write the style classes used by the map, mesh, legend and failure elements.
pub(crate) fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .region {{ stroke: none; }}
    .mesh-fine {{ fill: none; stroke: #ffffff; stroke-opacity: 0.5; stroke-width: 0.5; stroke-linejoin: round; }}
    .mesh-coarse {{ fill: none; stroke: #111827; stroke-width: 1.2; stroke-linejoin: round; }}
    .legend-swatch {{ stroke: none; }}
    .tick {{ stroke: #111827; stroke-width: 1; }}
    .tick-label {{ font: 10px sans-serif; fill: #111827; }}
    .failure {{ font: 16px sans-serif; fill: #b91c1c; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}
