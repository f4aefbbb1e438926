use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use font_layout::{BuildOptions, CharsetRange, FontAsset, FontBuilder, Padding};
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tga", "tif", "tiff"];

#[derive(Parser, Debug)]
#[command(author, version, about = "Build bitmap font assets from glyph grid textures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the glyph table for a texture without writing anything
    Preview(PreviewArgs),
    /// Build a font asset from a texture and write it to disk
    Build(BuildArgs),
    /// Build a font asset for every texture in a directory
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Glyph sheet texture path
    texture: PathBuf,
    #[command(flatten)]
    settings: GridSettings,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Glyph sheet texture path
    texture: PathBuf,
    /// Output path for the font descriptor (default: next to the texture)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Also write the material descriptor next to the texture
    #[arg(long, default_value_t = false)]
    emit_material: bool,
    #[command(flatten)]
    settings: GridSettings,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Directory containing glyph sheet textures
    input: PathBuf,
    /// Output directory for font descriptors
    #[arg(short, long)]
    out_dir: PathBuf,
    #[command(flatten)]
    settings: GridSettings,
}

#[derive(Parser, Debug, Clone)]
struct GridSettings {
    /// Glyphs per row in the texture
    #[arg(long, default_value_t = 16)]
    columns: u16,
    /// Glyph rows in the texture
    #[arg(long, default_value_t = 6)]
    rows: u16,
    /// Decimal code of the first character in the sheet
    #[arg(long, default_value_t = 32)]
    first_ascii: u32,
    /// Decimal code of the last character in the sheet
    #[arg(long, default_value_t = 126)]
    last_ascii: u32,
    /// Horizontal advance from one character origin to the next, in pixels
    #[arg(long, default_value_t = 8.0)]
    advance: f32,
    /// Horizontal inset of each glyph quad
    #[arg(long, default_value_t = 0.0)]
    horizontal_padding: f32,
    /// Vertical inset of each glyph quad
    #[arg(long, default_value_t = 0.0)]
    vertical_padding: f32,
    /// Shader name recorded in the material
    #[arg(long)]
    shader: Option<String>,
    /// Font name (default: the texture file stem)
    #[arg(long)]
    font_name: Option<String>,
}

impl GridSettings {
    fn to_options(&self) -> BuildOptions {
        BuildOptions {
            font_name: self.font_name.clone().unwrap_or_default(),
            columns: self.columns,
            rows: self.rows,
            charset: CharsetRange::new(self.first_ascii, self.last_ascii),
            advance: self.advance,
            padding: Padding::new(self.horizontal_padding, self.vertical_padding),
            shader: self.shader.clone(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview(args),
        Commands::Build(args) => build(args),
        Commands::Batch(args) => batch(args),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let font = build_font(&args.texture, &args.settings)?;

    println!("font: {}", font.name);
    println!("material: {} (shader {})", font.material.name, font.material.shader);
    println!("glyphs: {}", font.glyphs.len());
    println!();
    println!("{:>5}  {:^5}  {:>7}  {:>24}  {:>24}", "code", "char", "advance", "uv", "vert");
    for glyph in &font.glyphs {
        println!(
            "{:>5}  {:^5}  {:>7}  {:>24}  {:>24}",
            glyph.code,
            display_char(glyph.code),
            glyph.advance,
            format_rect(&glyph.uv),
            format_rect(&glyph.vert),
        );
    }

    Ok(())
}

fn build(args: BuildArgs) -> Result<()> {
    let font = build_font(&args.texture, &args.settings)?;

    if args.emit_material {
        let material_path = font.material.asset_path();
        let text = font.material.to_ron().context("failed to encode material descriptor")?;
        write_text(&material_path, &text)?;
        println!("Material written to {:?}", material_path);
    }

    let output = args.output.unwrap_or_else(|| font.asset_path());
    write_font(&font, &output)?;
    println!("Font asset written to {:?} ({} glyphs)", output, font.glyphs.len());
    Ok(())
}

fn batch(args: BatchArgs) -> Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create output directory {:?}", args.out_dir))?;

    let textures = collect_textures(&args.input)?;
    let progress = ProgressBar::new(textures.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} fonts",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    for texture in &textures {
        let font = build_font(texture, &args.settings)?;
        let output = args.out_dir.join(format!("{}.font.ron", font.name));
        write_font(&font, &output)?;
        log::debug!("{:?} -> {:?}", texture, output);
        progress.inc(1);
    }

    progress.finish_with_message(format!("{} fonts written to {:?}", textures.len(), args.out_dir));
    Ok(())
}

fn build_font(texture: &Path, settings: &GridSettings) -> Result<FontAsset> {
    let builder = FontBuilder::default();
    builder
        .build_from_texture(texture, settings.to_options())
        .with_context(|| format!("failed to build font from {:?}", texture))
}

fn write_font(font: &FontAsset, path: &Path) -> Result<()> {
    let text = font.to_ron().context("failed to encode font descriptor")?;
    write_text(path, &text)
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("failed to create {:?}", path))?;
    file.write_all(text.as_bytes()).with_context(|| format!("failed to write {:?}", path))?;
    file.write_all(b"\n")?;
    Ok(())
}

fn collect_textures(path: &Path) -> Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| TEXTURE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    entries.sort();
    if entries.is_empty() {
        anyhow::bail!("no texture files found in {:?}", path);
    }
    Ok(entries)
}

fn display_char(code: u32) -> char {
    char::from_u32(code).filter(|ch| !ch.is_control()).unwrap_or(' ')
}

fn format_rect(rect: &font_layout::Rect) -> String {
    format!("({:.3}, {:.3}, {:.3}, {:.3})", rect.x, rect.y, rect.width, rect.height)
}
