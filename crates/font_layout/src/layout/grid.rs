use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, used both for normalized UV coordinates and for
/// local-space quad geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Inset applied uniformly to every glyph's vertex rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Padding {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self { horizontal, vertical }
    }
}

/// Inclusive range of character codes covered by a glyph sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharsetRange {
    /// Code assigned to the first glyph in the sheet.
    pub first: u32,
    /// Code assigned to the last glyph in the sheet.
    pub last: u32,
}

impl CharsetRange {
    pub fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Printable ASCII, space through tilde.
    pub fn printable_ascii() -> Self {
        Self { first: 32, last: 126 }
    }

    /// Number of codes in the range; a reversed range is empty.
    pub fn count(&self) -> usize {
        if self.last < self.first {
            0
        } else {
            (self.last - self.first) as usize + 1
        }
    }
}

/// Immutable description of one glyph sheet layout pass.
///
/// `cell_height` is a plain signed value: callers working in texture space
/// conventionally pass it negated to flip Y into layout space, and the
/// layout never touches the sign.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Glyphs per row in the source texture.
    pub columns: u16,
    /// Number of glyph rows in the source texture.
    pub rows: u16,
    /// Total glyphs to emit; clamped to grid capacity during layout.
    pub character_count: usize,
    /// Character code assigned to the first glyph.
    pub start_code: u32,
    /// Horizontal advance in layout units, identical for every glyph.
    pub advance: f32,
    pub padding: Padding,
    /// Pixel width of one glyph cell.
    pub cell_width: f32,
    /// Pixel height of one glyph cell, sign preserved as supplied.
    pub cell_height: f32,
}

impl GridSpec {
    /// Total number of cells in the grid.
    pub fn capacity(&self) -> usize {
        usize::from(self.columns) * usize::from(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_count_is_inclusive() {
        assert_eq!(CharsetRange::new(32, 32).count(), 1);
        assert_eq!(CharsetRange::new(32, 41).count(), 10);
    }

    #[test]
    fn reversed_charset_is_empty() {
        assert_eq!(CharsetRange::new(90, 65).count(), 0);
    }

    #[test]
    fn printable_ascii_covers_space_through_tilde() {
        let charset = CharsetRange::printable_ascii();
        assert_eq!(charset.first, 32);
        assert_eq!(charset.last, 126);
        assert_eq!(charset.count(), 95);
    }

    #[test]
    fn capacity_is_columns_times_rows() {
        let spec = GridSpec {
            columns: 10,
            rows: 4,
            character_count: 0,
            start_code: 0,
            advance: 0.0,
            padding: Padding::default(),
            cell_width: 0.0,
            cell_height: 0.0,
        };
        assert_eq!(spec.capacity(), 40);
    }
}
