use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::FontError;

/// Default shader name assigned when the caller does not pick one.
pub const DEFAULT_SHADER: &str = "Standard";

/// Descriptor for the material backing a bitmap font: the glyph sheet
/// texture, the shader to draw it with, and a tint color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub name: String,
    pub texture: PathBuf,
    pub shader: String,
    /// RGBA tint. Alpha defaults to zero so the glyph coverage in the
    /// texture controls opacity.
    pub color: [f32; 4],
}

impl MaterialSpec {
    /// Build a material descriptor for a glyph sheet texture. The material
    /// takes its name from the texture file stem.
    pub fn for_texture<P: Into<PathBuf>>(texture: P, shader: Option<String>) -> Self {
        let texture = texture.into();
        let name = texture
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "font".to_owned());

        Self {
            name,
            texture,
            shader: shader.unwrap_or_else(|| DEFAULT_SHADER.to_owned()),
            color: [1.0, 1.0, 1.0, 0.0],
        }
    }

    /// Where the material descriptor lives on disk: next to its texture.
    pub fn asset_path(&self) -> PathBuf {
        sibling(&self.texture, &self.name, "mat.ron")
    }

    pub fn to_ron(&self) -> Result<String, FontError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())?)
    }
}

/// Path to `<name>.<extension>` in the directory containing `anchor`.
pub(crate) fn sibling(anchor: &Path, name: &str, extension: &str) -> PathBuf {
    let directory = anchor.parent().unwrap_or_else(|| Path::new(""));
    directory.join(format!("{}.{}", name, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_takes_texture_stem_as_name() {
        let material = MaterialSpec::for_texture("fonts/terminus.png", None);
        assert_eq!(material.name, "terminus");
        assert_eq!(material.shader, DEFAULT_SHADER);
        assert_eq!(material.color, [1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn material_asset_path_sits_next_to_texture() {
        let material = MaterialSpec::for_texture("fonts/terminus.png", None);
        assert_eq!(material.asset_path(), PathBuf::from("fonts/terminus.mat.ron"));
    }

    #[test]
    fn explicit_shader_is_kept() {
        let material =
            MaterialSpec::for_texture("sheet.png", Some("Unlit/Transparent".to_owned()));
        assert_eq!(material.shader, "Unlit/Transparent");
    }
}
