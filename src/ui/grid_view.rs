// Pure grid rendering over a context snapshotted from the controller.
// This is completely decoupled from terminal setup and event handling.

use std::ops::Range;

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::grid::controller::ScrollWindowController;

/// Everything the renderer needs for one frame: the published slice, the
/// per-render-column offsets (trailing spacer included), and the scroll
/// position. Reading this after the pipeline run is the adapter's only view
/// into controller state.
pub struct GridRenderContext<'a> {
    /// Sliced rows for the active window, header row first.
    pub rows: &'a [Vec<String>],
    /// Left pixel offset per render column; the extra entry at the end is
    /// the trailing spacer. `None` = unresolved, not rendered.
    pub offsets: Vec<Option<f64>>,
    /// Absolute horizontal scroll position in pixels.
    pub scroll_left: f64,
    /// Pixel-to-terminal-cell scale.
    pub px_per_cell: f64,
    /// The active preload window, for the title line.
    pub window: Range<usize>,
}

impl<'a> GridRenderContext<'a> {
    pub fn new(
        controller: &'a ScrollWindowController,
        scroll_left: f64,
        px_per_cell: f64,
    ) -> Self {
        let rows = controller.rows();
        let slice_width = rows.first().map_or(0, Vec::len);
        let offsets = (0..=slice_width)
            .map(|render_index| controller.left_pixel_offset(render_index))
            .collect();
        Self {
            rows,
            offsets,
            scroll_left,
            px_per_cell: px_per_cell.max(1.0),
            window: controller.window(),
        }
    }

    /// Render column's horizontal cell position relative to the viewport
    /// origin. Negative while the column is scrolled off to the left.
    fn cell_x(&self, offset: f64) -> i64 {
        ((offset - self.scroll_left) / self.px_per_cell).round() as i64
    }
}

/// Render the grid into `area` using only the provided context.
pub fn render_grid(f: &mut Frame, area: Rect, ctx: &GridRenderContext) {
    let title = format!(
        " wide-grid  columns [{}, {})  scroll {:.0}px ",
        ctx.window.start, ctx.window.end, ctx.scroll_left
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if ctx.rows.is_empty() || ctx.rows[0].is_empty() {
        let empty = Paragraph::new("No columns in window")
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(empty, inner);
        return;
    }
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let cell_style = Style::default();
    let buf = f.buffer_mut();

    let slice_width = ctx.rows[0].len();
    for render_index in 0..slice_width {
        let Some(offset) = ctx.offsets[render_index] else {
            // Unresolved offset: skip the column rather than guessing.
            continue;
        };

        let x = ctx.cell_x(offset);
        // Column cell-width from the next resolved offset, one cell of gap;
        // the last column falls back to whatever fits.
        let span = ctx
            .offsets
            .get(render_index + 1)
            .copied()
            .flatten()
            .map(|next| ((next - offset) / ctx.px_per_cell).round() as i64 - 1);

        let right_edge = span.map_or(i64::from(inner.width), |s| x + s);
        if right_edge <= 0 || x >= i64::from(inner.width) {
            continue;
        }

        // Clip against the left viewport edge.
        let start_x = x.max(0);
        let skip = (start_x - x) as usize;
        let avail = (right_edge.min(i64::from(inner.width)) - start_x).max(0) as usize;
        if avail == 0 {
            continue;
        }

        for (row_index, row) in ctx.rows.iter().enumerate() {
            if row_index >= inner.height as usize {
                break;
            }
            let Some(cell) = row.get(render_index) else {
                continue;
            };
            let text: String = cell.chars().skip(skip).collect();
            if text.is_empty() {
                continue;
            }
            let style = if row_index == 0 { header_style } else { cell_style };
            buf.set_stringn(
                inner.x + start_x as u16,
                inner.y + row_index as u16,
                &text,
                avail,
                style,
            );
        }
    }

    // Trailing spacer: mark the right edge of the materialized columns.
    if let Some(spacer) = ctx.offsets.last().copied().flatten() {
        let x = ctx.cell_x(spacer);
        if (0..i64::from(inner.width)).contains(&x) {
            for row_index in 0..ctx.rows.len().min(inner.height as usize) {
                buf.set_stringn(
                    inner.x + x as u16,
                    inner.y + row_index as u16,
                    "\u{2502}",
                    1,
                    Style::default().fg(Color::DarkGray),
                );
            }
        }
    }
}
