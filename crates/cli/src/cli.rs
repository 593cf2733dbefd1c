//! CLI definitions and command dispatch.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{
    convert::{ConvertArgs, convert},
    map::print_map,
};

#[derive(Parser)]
#[command(name = "spritefont")]
#[command(about = "Convert 8x8 PCX spritesheets into TrueType fonts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a PCX spritesheet into a TTF font
    Convert {
        #[command(flatten)]
        args: ConvertArgs,
    },
    /// Print the character code table for a sheet of N cells
    Map {
        #[arg(long, default_value_t = 96)]
        cells: usize,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Convert { args } => convert(&args)?,
            Commands::Map { cells } => print_map(cells)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_defaults() {
        let cli = Cli::try_parse_from(["spritefont", "convert", "font.pcx", "font.ttf"]).unwrap();
        let Commands::Convert { args } = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.columns, 16);
        assert_eq!(args.rows, 6);
        assert!(!args.strict);
        assert_eq!(args.background.to_string(), "#9F5B53");
    }

    #[test]
    fn test_convert_requires_output() {
        assert!(Cli::try_parse_from(["spritefont", "convert", "font.pcx"]).is_err());
    }

    #[test]
    fn test_bad_background_is_usage_error() {
        let parsed = Cli::try_parse_from([
            "spritefont",
            "convert",
            "font.pcx",
            "font.ttf",
            "--background",
            "nothex",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_map_cells() {
        let cli = Cli::try_parse_from(["spritefont", "map", "--cells", "4"]).unwrap();
        assert!(matches!(cli.command, Commands::Map { cells: 4 }));
    }
}
