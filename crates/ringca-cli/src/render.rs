//! Grid renderers.
//!
//! A renderer turns a finished [`Grid`] into bytes: rows are generations and
//! columns are lattice positions, the same layout as a raster heatmap.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ringca_core::Grid;
use serde::Serialize;

use crate::config::OutputFormat;

/// Plain PBM lines must not exceed this many characters.
const PBM_LINE_LIMIT: usize = 70;

/// Draws a grid onto a byte sink.
pub trait GridRenderer {
    /// Write the whole grid to `out`.
    fn render(&self, grid: &Grid, out: &mut dyn Write) -> io::Result<()>;
}

/// Title shared by the text and PBM outputs.
pub fn title(grid: &Grid) -> String {
    format!("Results of 1D CA for {} generations", grid.generations())
}

/// Terminal raster: one line per generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    pub live: char,
    pub dead: char,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { live: '█', dead: '·' }
    }
}

impl GridRenderer for TextRenderer {
    fn render(&self, grid: &Grid, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", title(grid))?;
        for row in grid {
            let line: String = row
                .iter()
                .map(|&cell| if cell == 1 { self.live } else { self.dead })
                .collect();
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// Plain (P1) portable bitmap; live cells are black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PbmRenderer;

impl GridRenderer for PbmRenderer {
    fn render(&self, grid: &Grid, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "P1")?;
        writeln!(out, "# {}", title(grid))?;
        writeln!(out, "{} {}", grid.width(), grid.generations())?;
        for row in grid {
            for chunk in row.chunks(PBM_LINE_LIMIT) {
                let line: String = chunk
                    .iter()
                    .map(|&cell| if cell == 1 { '1' } else { '0' })
                    .collect();
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }
}

/// JSON document: dimensions plus the rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonGrid<'a> {
    generations: usize,
    width: usize,
    #[serde(flatten)]
    grid: &'a Grid,
}

impl GridRenderer for JsonRenderer {
    fn render(&self, grid: &Grid, out: &mut dyn Write) -> io::Result<()> {
        let doc = JsonGrid {
            generations: grid.generations(),
            width: grid.width(),
            grid,
        };
        serde_json::to_writer(&mut *out, &doc)?;
        writeln!(out)
    }
}

impl OutputFormat {
    /// Renderer for this format.
    pub fn renderer(self) -> Box<dyn GridRenderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer::default()),
            OutputFormat::Pbm => Box::new(PbmRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

/// Open the destination for rendered output: a file if given, stdout otherwise.
pub fn open_sink(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}
