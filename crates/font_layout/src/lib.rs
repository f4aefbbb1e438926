mod asset;
mod layout;

use std::path::Path;

pub use asset::{
    font::FontAsset,
    material::{MaterialSpec, DEFAULT_SHADER},
    metrics::CellMetrics,
};
pub use layout::{
    engine::{glyph_table, GlyphRecord},
    grid::{CharsetRange, GridSpec, Padding, Rect},
};

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to read texture: {0}")]
    Texture(#[from] image::ImageError),
    #[error("invalid grid dimensions: {columns} columns x {rows} rows")]
    InvalidGridDimension { columns: u16, rows: u16 },
    #[error("failed to encode font asset: {0}")]
    Encode(#[from] ron::Error),
    #[error("failed to decode font asset: {0}")]
    Decode(#[from] ron::error::SpannedError),
}

#[derive(Clone, Debug)]
pub struct BuildOptions {
    /// Font name; empty means "use the material name".
    pub font_name: String,
    pub columns: u16,
    pub rows: u16,
    pub charset: CharsetRange,
    /// Horizontal advance in pixels, applied uniformly to every glyph.
    pub advance: f32,
    pub padding: Padding,
    /// Shader name recorded in the material; `None` picks the default.
    pub shader: Option<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            font_name: String::new(),
            columns: 16,
            rows: 6,
            charset: CharsetRange::printable_ascii(),
            advance: 8.0,
            padding: Padding::default(),
            shader: None,
        }
    }
}

#[derive(Default)]
pub struct FontBuilder;

impl FontBuilder {
    /// Build a font asset from a glyph sheet texture on disk. Only the
    /// image header is read; pixel data never matters to the layout.
    pub fn build_from_texture<P: AsRef<Path>>(
        &self,
        path: P,
        options: BuildOptions,
    ) -> Result<FontAsset, FontError> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path)?;
        self.build_with_dimensions(path, width, height, options)
    }

    /// Build a font asset from known texture dimensions.
    pub fn build_with_dimensions(
        &self,
        texture: &Path,
        texture_width: u32,
        texture_height: u32,
        options: BuildOptions,
    ) -> Result<FontAsset, FontError> {
        let metrics =
            CellMetrics::derive(texture_width, texture_height, options.columns, options.rows)
                .ok_or(FontError::InvalidGridDimension {
                    columns: options.columns,
                    rows: options.rows,
                })?;

        let spec = GridSpec {
            columns: options.columns,
            rows: options.rows,
            character_count: options.charset.count(),
            start_code: options.charset.first,
            advance: options.advance,
            padding: options.padding,
            cell_width: metrics.width,
            cell_height: metrics.height,
        };

        let glyphs = glyph_table(&spec)?;
        let material = MaterialSpec::for_texture(texture, options.shader);
        Ok(FontAsset::new(options.font_name, material, glyphs))
    }
}
