//! The `convert` subcommand.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use font_builder::{CollisionPolicy, FontOptions, Timestamp, build_font};
use font_raster::{BACKGROUND, GridSpec, Rgb, dump_cells, extract_cells, load_image};
use image::RgbaImage;
use log::info;

use crate::io::{ensure_parent_dir, require_extension};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimestampArg {
    /// Pinned creation date, for reproducible output
    #[default]
    Fixed,
    /// Current time
    Now,
}

impl From<TimestampArg> for Timestamp {
    fn from(arg: TimestampArg) -> Self {
        match arg {
            TimestampArg::Fixed => Timestamp::default(),
            TimestampArg::Now => Timestamp::Now,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Input spritesheet (.pcx)
    pub input: PathBuf,
    /// Output font (.ttf)
    pub output: PathBuf,
    #[arg(long, default_value_t = GridSpec::DEFAULT.columns)]
    pub columns: u32,
    #[arg(long, default_value_t = GridSpec::DEFAULT.rows)]
    pub rows: u32,
    /// Background color as RRGGBB; every other color is ink
    #[arg(long, default_value_t = BACKGROUND)]
    pub background: Rgb,
    #[arg(long, default_value = font_builder::config::DEFAULT_FAMILY)]
    pub family: String,
    #[arg(long, default_value = font_builder::config::DEFAULT_STYLE)]
    pub style: String,
    /// Fail on character code collisions instead of keeping the last claim
    #[arg(long)]
    pub strict: bool,
    /// Store glyph names in the post table
    #[arg(long)]
    pub glyph_names: bool,
    #[arg(long, value_enum, default_value_t = TimestampArg::Fixed)]
    pub timestamp: TimestampArg,
    /// Also write every cell as a PNG into this directory
    #[arg(long)]
    pub dump_cells: Option<PathBuf>,
}

impl ConvertArgs {
    pub fn grid(&self) -> GridSpec {
        GridSpec::new(self.columns, self.rows)
    }

    pub fn options(&self) -> FontOptions {
        let policy = if self.strict { CollisionPolicy::Reject } else { CollisionPolicy::LastWins };
        FontOptions::new()
            .family(&self.family)
            .style(&self.style)
            .background(self.background)
            .collision_policy(policy)
            .timestamp(self.timestamp.into())
            .glyph_names(self.glyph_names)
    }
}

pub fn convert(args: &ConvertArgs) -> Result<()> {
    require_extension(&args.input, "pcx", "input")?;
    require_extension(&args.output, "ttf", "output")?;

    let sheet = load_image(&args.input)?;
    convert_sheet(&sheet, args)
}

/// Run everything after decoding: slice, dump, build, write.
pub fn convert_sheet(sheet: &RgbaImage, args: &ConvertArgs) -> Result<()> {
    let cells = extract_cells(sheet, args.grid())
        .with_context(|| format!("Failed to slice {}", args.input.display()))?;
    info!("Extracted {} cells", cells.len());

    if let Some(dir) = &args.dump_cells {
        let written = dump_cells(&cells, dir)
            .with_context(|| format!("Failed to dump cells into {}", dir.display()))?;
        info!("Dumped {} cells into {}", written.len(), dir.display());
    }

    let font = build_font(&cells, &args.options()).map_err(stage_failure)?;
    ensure_parent_dir(&args.output)?;
    font.write(&args.output).map_err(stage_failure)?;
    Ok(())
}

fn stage_failure(err: font_builder::Error) -> anyhow::Error {
    let stage = err.stage();
    anyhow::Error::new(err).context(format!("Font {stage} failed"))
}

#[cfg(test)]
mod tests {
    use image::Rgba;
    use read_fonts::{FontRef, TableProvider};

    use super::*;

    fn args(input: &str, output: PathBuf) -> ConvertArgs {
        ConvertArgs {
            input: input.into(),
            output,
            columns: 16,
            rows: 6,
            background: BACKGROUND,
            family: "Sheet Font".to_string(),
            style: "Regular".to_string(),
            strict: false,
            glyph_names: false,
            timestamp: TimestampArg::Fixed,
            dump_cells: None,
        }
    }

    fn blank_sheet(width: u32, height: u32) -> RgbaImage {
        let [r, g, b] = BACKGROUND.to_array();
        RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]))
    }

    #[test]
    fn test_rejects_wrong_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert(&args("sheet.png", dir.path().join("out.ttf"))).unwrap_err();
        assert!(err.to_string().contains(".pcx"));
        let err = convert(&args("sheet.pcx", dir.path().join("out.otf"))).unwrap_err();
        assert!(err.to_string().contains(".ttf"));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.pcx");
        let mut args = args("", dir.path().join("out.ttf"));
        args.input = input;
        assert!(convert(&args).is_err());
        assert!(!dir.path().join("out.ttf").exists());
    }

    #[test]
    fn test_convert_sheet_writes_font() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("fonts/sheet.ttf");
        let mut args = args("sheet.pcx", output.clone());
        args.dump_cells = Some(dir.path().join("cells"));

        convert_sheet(&blank_sheet(128, 48), &args).unwrap();

        let data = std::fs::read(&output).unwrap();
        let font = FontRef::new(&data).unwrap();
        assert_eq!(font.maxp().unwrap().num_glyphs(), 98);
        assert!(dir.path().join("cells/cell_032.png").exists());
        assert!(dir.path().join("cells/cell_127.png").exists());
    }

    #[test]
    fn test_small_sheet_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sheet.ttf");
        let err = convert_sheet(&blank_sheet(64, 48), &args("sheet.pcx", output.clone()))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to slice"));
        assert!(!output.exists());
    }

    #[test]
    fn test_strict_builds_standard_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sheet.ttf");
        let mut args = args("sheet.pcx", output.clone());
        args.strict = true;
        convert_sheet(&blank_sheet(128, 48), &args).unwrap();
        assert!(output.is_file());
    }

    #[test]
    fn test_write_failure_names_stage() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("taken.ttf");
        std::fs::create_dir(&output).unwrap();
        let err = convert_sheet(&blank_sheet(128, 48), &args("sheet.pcx", output)).unwrap_err();
        assert_eq!(err.to_string(), "Font write failed");
    }

    #[test]
    fn test_huge_grid_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args("sheet.pcx", dir.path().join("sheet.ttf"));
        args.columns = u32::MAX;
        let err = convert_sheet(&blank_sheet(128, 48), &args).unwrap_err();
        assert!(err.to_string().contains("Failed to slice"));
    }

    #[test]
    fn test_options_from_args() {
        let mut args = args("sheet.pcx", "sheet.ttf".into());
        args.timestamp = TimestampArg::Now;
        args.glyph_names = true;
        let options = args.options();
        assert_eq!(options.family, "Sheet Font");
        assert_eq!(options.timestamp, Timestamp::Now);
        assert!(options.glyph_names);
        assert_eq!(options.collision_policy, CollisionPolicy::LastWins);
    }
}
