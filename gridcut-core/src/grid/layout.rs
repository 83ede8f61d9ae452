use crate::foundation::core::{Canvas, CellRect};
use crate::foundation::error::{GridcutError, GridcutResult};

/// Grid geometry derived from the project canvas and the requested shape.
///
/// Cell sizes use integer floor division, so cell edges may not exactly tile
/// the canvas when the dimensions are not evenly divisible; the rounding
/// error is accepted, not corrected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    /// Requested column count.
    pub columns: u32,
    /// Derived row count, `ceil(slot_count / columns)`.
    pub rows: u32,
    /// Canvas the grid is laid out on.
    pub canvas: Canvas,
    /// Width of a single (non-widened) cell.
    pub cell_width: u32,
    /// Height of a cell.
    pub cell_height: u32,
}

impl GridLayout {
    /// Derive the grid geometry for `slot_count` slots (fill markers
    /// included) across `columns` columns.
    pub fn new(canvas: Canvas, columns: u32, slot_count: u32) -> GridcutResult<Self> {
        if columns == 0 {
            return Err(GridcutError::validation("column count must be > 0"));
        }
        if slot_count == 0 {
            return Err(GridcutError::validation("slot count must be > 0"));
        }
        let rows = slot_count.div_ceil(columns);
        Ok(Self {
            columns,
            rows,
            canvas,
            cell_width: canvas.width / columns,
            cell_height: canvas.height / rows,
        })
    }

    /// Rectangle of the cell at `(col, row)`, spanning `span` columns.
    pub fn cell(&self, col: u32, row: u32, span: u32) -> CellRect {
        CellRect {
            left: i64::from(col) * i64::from(self.cell_width),
            top: i64::from(row) * i64::from(self.cell_height),
            width: i64::from(self.cell_width) * i64::from(span),
            height: i64::from(self.cell_height),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/layout.rs"]
mod tests;
