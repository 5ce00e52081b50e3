//! Monospace text layout: tab stops, grapheme columns and soft wrap.

use unicode_segmentation::UnicodeSegmentation;

/// Cell geometry of the monospace grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub cell_width: i32,
    pub line_height: i32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8,
            line_height: 16,
        }
    }
}

/// Visual position of one character offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPos {
    /// Global visual row
    pub row: usize,
    pub column: usize,
}

/// Layout of one document line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLayout {
    /// Position of every char offset in the line, plus the line end
    pub positions: Vec<GridPos>,
    /// Columns occupied by each grapheme, keyed by its first char index
    pub glyphs: Vec<Glyph>,
    pub first_row: usize,
    pub row_count: usize,
}

impl LineLayout {
    pub fn end(&self) -> GridPos {
        self.positions.last().copied().unwrap_or_default()
    }
}

/// A painted grapheme cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub pos: GridPos,
    pub columns: usize,
    pub blank: bool,
}

/// Column count of `text` laid out from column 0 without wrapping
pub fn text_columns(text: &str, tab_size: usize) -> usize {
    let mut column = 0;
    for grapheme in text.graphemes(true) {
        column += grapheme_columns(grapheme, column, tab_size);
    }
    column
}

fn grapheme_columns(grapheme: &str, column: usize, tab_size: usize) -> usize {
    if grapheme == "\t" {
        let tab = tab_size.max(1);
        tab - column % tab
    } else {
        1
    }
}

/// Lay out one line starting at visual row `first_row`
pub fn layout_line(text: &str, first_row: usize, tab_size: usize, wrap: Option<usize>) -> LineLayout {
    let mut positions = Vec::with_capacity(text.chars().count() + 1);
    let mut glyphs = Vec::new();
    let mut row = first_row;
    let mut column = 0usize;

    for grapheme in text.graphemes(true) {
        let mut width = grapheme_columns(grapheme, column, tab_size);
        if let Some(limit) = wrap.filter(|w| *w > 0)
            && column > 0
            && column + width > limit
        {
            row += 1;
            column = 0;
            width = grapheme_columns(grapheme, column, tab_size);
        }

        let pos = GridPos { row, column };
        for _ in grapheme.chars() {
            positions.push(pos);
        }
        glyphs.push(Glyph {
            pos,
            columns: width,
            blank: grapheme.chars().all(char::is_whitespace),
        });
        column += width;
    }
    positions.push(GridPos { row, column });

    LineLayout {
        positions,
        glyphs,
        first_row,
        row_count: row - first_row + 1,
    }
}
