use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use figr_lib::ImageFormat;

#[derive(Debug, Parser)]
#[command(
    name = "figr",
    version,
    about = "Inspect Figma files and export frame images from the command line"
)]
pub struct Cli {
    /// Env file holding FIGMA_ACCESS_TOKEN
    #[arg(long, global = true, default_value = ".env")]
    pub env_file: PathBuf,

    /// Print progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the tree of pages, frames and layers in a file
    File {
        /// Figma file key
        file_key: String,
        /// Depth of the tree to fetch
        #[arg(long, default_value_t = 2)]
        depth: u32,
    },
    /// List published components and the pages containing them
    Components {
        /// Figma file key
        file_key: String,
    },
    /// Extract colors, text styles and effects used in a file
    Styles {
        /// Figma file key
        file_key: String,
    },
    /// Render nodes to images and download them
    Frames {
        /// Figma file key
        file_key: String,
        /// Comma-separated node IDs to export
        #[arg(long)]
        node_ids: String,
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Png)]
        format: ExportFormat,
        /// Scale for PNG export
        #[arg(long, default_value_t = 2)]
        scale: u32,
        /// Output directory
        #[arg(long, default_value = "./exports")]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Png,
    Svg,
}

pub fn image_format_from_cli(format: ExportFormat) -> ImageFormat {
    match format {
        ExportFormat::Png => ImageFormat::Png,
        ExportFormat::Svg => ImageFormat::Svg,
    }
}

/// Split a comma-separated node ID list, trimming entries and dropping
/// empties.
pub fn parse_node_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_node_ids_trims_and_drops_empties() {
        assert_eq!(
            parse_node_ids(" 1:2 , 1:3 ,, "),
            vec!["1:2".to_string(), "1:3".to_string()]
        );
        assert!(parse_node_ids("").is_empty());
    }

    #[test]
    fn cli_parses_frames_flags() {
        let cli = Cli::try_parse_from([
            "figr", "frames", "KEY123", "--node-ids", "1:2,1:3", "--format", "svg", "--out",
            "shots",
        ])
        .expect("parse");
        match cli.command {
            Commands::Frames {
                file_key,
                node_ids,
                format,
                scale,
                out,
            } => {
                assert_eq!(file_key, "KEY123");
                assert_eq!(node_ids, "1:2,1:3");
                assert_eq!(format, ExportFormat::Svg);
                assert_eq!(scale, 2);
                assert_eq!(out, PathBuf::from("shots"));
            }
            other => panic!("expected frames, got {other:?}"),
        }
    }

    #[test]
    fn cli_defaults_depth_and_env_file() {
        let cli = Cli::try_parse_from(["figr", "file", "KEY123"]).expect("parse");
        assert_eq!(cli.env_file, PathBuf::from(".env"));
        assert!(!cli.verbose);
        match cli.command {
            Commands::File { file_key, depth } => {
                assert_eq!(file_key, "KEY123");
                assert_eq!(depth, 2);
            }
            other => panic!("expected file, got {other:?}"),
        }
    }
}
