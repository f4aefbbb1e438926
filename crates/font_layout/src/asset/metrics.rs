/// Pixel dimensions of one glyph cell, derived from the source texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMetrics {
    pub width: f32,
    /// Negative: texture-space Y runs opposite to layout-space Y, and the
    /// flip is baked into the value rather than handled downstream.
    pub height: f32,
}

impl CellMetrics {
    /// Derive cell dimensions from texture pixel size and grid shape.
    ///
    /// Division truncates, matching pixel-snapped glyph sheets where the
    /// texture size is an exact multiple of the grid. Returns `None` when
    /// either grid dimension is zero.
    pub fn derive(
        texture_width: u32,
        texture_height: u32,
        columns: u16,
        rows: u16,
    ) -> Option<Self> {
        if columns == 0 || rows == 0 {
            return None;
        }

        let width = (texture_width / u32::from(columns)) as f32;
        let height = -((texture_height / u32::from(rows)) as f32);
        Some(Self { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_grid_division() {
        let metrics = CellMetrics::derive(128, 64, 16, 8).unwrap();
        assert_eq!(metrics.width, 8.0);
        assert_eq!(metrics.height, -8.0);
    }

    #[test]
    fn division_truncates() {
        let metrics = CellMetrics::derive(100, 50, 3, 3).unwrap();
        assert_eq!(metrics.width, 33.0);
        assert_eq!(metrics.height, -16.0);
    }

    #[test]
    fn zero_grid_dimension_yields_none() {
        assert!(CellMetrics::derive(128, 64, 0, 8).is_none());
        assert!(CellMetrics::derive(128, 64, 16, 0).is_none());
    }
}
