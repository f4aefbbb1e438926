use serde::{Deserialize, Serialize};

use super::grid::{GridSpec, Rect};
use crate::FontError;

/// One laid-out glyph: character code, uniform advance, the cell's
/// normalized texture rectangle, and the local-space quad.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlyphRecord {
    pub code: u32,
    pub advance: f32,
    pub uv: Rect,
    pub vert: Rect,
}

/// Lay out a glyph table for the given grid.
///
/// Cells are visited from the last row down to row zero, left to right
/// within each row, so that the first emitted glyph maps to the top-left
/// cell of a texture whose row zero sits at the bottom. Codes are assigned
/// contiguously from `start_code` in visit order. Emission stops as soon
/// as `character_count` records exist, mid-row included, and a count
/// beyond grid capacity is clamped rather than rejected.
pub fn glyph_table(spec: &GridSpec) -> Result<Vec<GlyphRecord>, FontError> {
    if spec.columns == 0 || spec.rows == 0 {
        return Err(FontError::InvalidGridDimension { columns: spec.columns, rows: spec.rows });
    }

    let uv_width = 1.0 / f32::from(spec.columns);
    let uv_height = 1.0 / f32::from(spec.rows);
    // The quad geometry does not vary per cell, only the UVs do.
    let vert =
        Rect::new(spec.padding.horizontal, spec.padding.vertical, spec.cell_width, spec.cell_height);
    let count = spec.character_count.min(spec.capacity());

    let table = (0..spec.rows)
        .rev()
        .flat_map(|row| (0..spec.columns).map(move |column| (column, row)))
        .take(count)
        .enumerate()
        .map(|(index, (column, row))| GlyphRecord {
            code: spec.start_code + index as u32,
            advance: spec.advance,
            uv: Rect::new(
                f32::from(column) * uv_width,
                f32::from(row) * uv_height,
                uv_width,
                uv_height,
            ),
            vert,
        })
        .collect();

    Ok(table)
}
