//! Responsive grid layout
//!
//! Card grids collapse to fewer columns as the terminal narrows, the way a
//! web page drops grid columns at its breakpoints.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Small terminal (< 80 columns): single column
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns): two columns
    pub const MD_WIDTH: u16 = 120;
}

/// Columns between adjacent cards
pub const COLUMN_GAP: u16 = 2;

/// Rows between grid rows
pub const ROW_GAP: u16 = 1;

/// Number of card columns for a given content width.
pub fn grid_columns(width: u16) -> u16 {
    if width < breakpoints::SM_WIDTH {
        1
    } else if width < breakpoints::MD_WIDTH {
        2
    } else {
        3
    }
}

/// Widths of each column, spreading any remainder over the leftmost ones.
///
/// Always returns `columns` entries; columns never drop below one cell.
pub fn column_widths(width: u16, columns: u16) -> Vec<u16> {
    let columns = columns.max(1);
    let gaps = COLUMN_GAP * (columns - 1);
    let usable = width.saturating_sub(gaps);
    let base = usable / columns;
    let extra = usable % columns;

    (0..columns)
        .map(|i| (base + u16::from(i < extra)).max(1))
        .collect()
}

/// Place cards of the given heights into a grid starting at `(x, y)`.
///
/// Cards fill rows left to right. Each grid row is as tall as its tallest
/// card. Returns one rect per placed card plus the total height used.
///
/// A row that would end past `u16::MAX` is not placed, nor is anything
/// after it, so the returned rects may be fewer than `heights`.
pub fn grid_rects(x: u16, y: u16, width: u16, heights: &[u16]) -> (Vec<Rect>, u16) {
    let columns = grid_columns(width);
    let widths = column_widths(width, columns);
    let mut rects = Vec::with_capacity(heights.len());
    let mut row_y = y;

    for (row_index, row) in heights.chunks(columns as usize).enumerate() {
        let gap = if row_index > 0 { ROW_GAP } else { 0 };
        let row_height = row.iter().copied().max().unwrap_or(0);
        let Some(top) = row_y.checked_add(gap) else {
            break;
        };
        let Some(bottom) = top.checked_add(row_height) else {
            break;
        };

        let mut col_x = x;
        for (col, _) in row.iter().enumerate() {
            let w = widths[col];
            rects.push(Rect::new(col_x, top, w, row_height));
            col_x = col_x.saturating_add(w).saturating_add(COLUMN_GAP);
        }
        row_y = bottom;
    }

    (rects, row_y - y)
}
