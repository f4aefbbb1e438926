use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::material::{sibling, MaterialSpec};
use crate::layout::engine::GlyphRecord;
use crate::FontError;

/// A built bitmap font: a name, the material it draws with, and the glyph
/// table mapping character codes to texture cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontAsset {
    pub name: String,
    pub material: MaterialSpec,
    pub glyphs: Vec<GlyphRecord>,
}

impl FontAsset {
    /// Assemble a font asset. An empty name falls back to the material
    /// name so the asset always has a usable file stem.
    pub fn new(name: impl Into<String>, material: MaterialSpec, glyphs: Vec<GlyphRecord>) -> Self {
        let mut name = name.into();
        if name.is_empty() {
            name = material.name.clone();
        }
        Self { name, material, glyphs }
    }

    /// Where the font descriptor lives on disk: next to its material.
    pub fn asset_path(&self) -> PathBuf {
        sibling(&self.material.asset_path(), &self.name, "font.ron")
    }

    pub fn to_ron(&self) -> Result<String, FontError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(4);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn from_ron(text: &str) -> Result<Self, FontError> {
        Ok(ron::de::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::grid::Rect;

    fn sample_glyph(code: u32) -> GlyphRecord {
        GlyphRecord {
            code,
            advance: 8.0,
            uv: Rect::new(0.0, 0.0, 0.25, 0.5),
            vert: Rect::new(0.0, 0.0, 8.0, -8.0),
        }
    }

    #[test]
    fn font_asset_path_sits_next_to_material() {
        let material = MaterialSpec::for_texture("fonts/terminus.png", None);
        let font = FontAsset::new("TerminusMono", material, vec![sample_glyph(32)]);
        assert_eq!(font.asset_path(), PathBuf::from("fonts/TerminusMono.font.ron"));
    }

    #[test]
    fn empty_name_falls_back_to_material_name() {
        let material = MaterialSpec::for_texture("fonts/terminus.png", None);
        let font = FontAsset::new("", material, Vec::new());
        assert_eq!(font.name, "terminus");
    }

    #[test]
    fn descriptor_survives_ron_round_trip() {
        let material = MaterialSpec::for_texture("sheet.png", None);
        let font = FontAsset::new("Sheet", material, vec![sample_glyph(32), sample_glyph(33)]);
        let text = font.to_ron().unwrap();
        let restored = FontAsset::from_ron(&text).unwrap();
        assert_eq!(restored, font);
    }
}
