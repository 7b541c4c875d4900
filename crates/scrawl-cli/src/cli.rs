//! CLI argument definitions using Clap v4

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Scrawl - turn typed text into handwriting-style documents
#[derive(Parser, Debug)]
#[command(name = "scrawl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display available renderers and output formats
    #[command(alias = "i")]
    Info,

    /// Render text to a handwriting-style PNG, SVG, or PDF
    #[command(alias = "r")]
    Render(Box<RenderArgs>),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Input text to render (reads from stdin if omitted)
    pub text: Option<String>,

    /// Input text (alternative to positional argument)
    #[arg(short = 't', long = "text", conflicts_with = "text_file")]
    pub text_arg: Option<String>,

    /// Read input text from file
    #[arg(short = 'T', long = "text-file", conflicts_with = "text_arg")]
    pub text_file: Option<PathBuf>,

    // Style options; unset flags fall back to the preset file or defaults
    /// Gap after each letter in pixels [2-20]
    #[arg(long)]
    pub letter_spacing: Option<f64>,

    /// Advance for a space character in pixels [10-40]
    #[arg(long)]
    pub word_spacing: Option<f64>,

    /// Glyph size in pixels [8-32]
    #[arg(long)]
    pub letter_size: Option<f64>,

    /// Vertical advance per line in pixels [16-48]
    #[arg(long)]
    pub line_spacing: Option<f64>,

    /// Pen thickness in pixels [1-5]
    #[arg(long)]
    pub stroke_width: Option<f64>,

    /// Messiness of the pen [0-2]
    #[arg(long)]
    pub jitter: Option<f64>,

    /// Load style parameters from a JSON preset file
    #[arg(long = "style")]
    pub style_file: Option<PathBuf>,

    /// Seed the jitter source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Paper: white, cream, yellow, lined, grid, dotted, or a #rrggbb color
    #[arg(long, default_value = "white")]
    pub paper: String,

    /// Ink color as #rrggbb (default: dark violet pen)
    #[arg(long)]
    pub ink: Option<String>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    pub canvas_width: u32,

    /// Output format (inferred from the output extension when omitted)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file
    #[arg(short = 'o', long, default_value = "scrawl.png")]
    pub output: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
    Pdf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_with_style_flags() {
        let cli = Cli::try_parse_from([
            "scrawl",
            "render",
            "hello",
            "--letter-size",
            "24",
            "--jitter",
            "1.5",
            "-o",
            "out.pdf",
        ])
        .unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.text.as_deref(), Some("hello"));
                assert_eq!(args.letter_size, Some(24.0));
                assert_eq!(args.jitter, Some(1.5));
                assert_eq!(args.output, PathBuf::from("out.pdf"));
                assert_eq!(args.format, None);
            },
            other => unreachable!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn text_flag_conflicts_with_text_file() {
        let result =
            Cli::try_parse_from(["scrawl", "render", "-t", "x", "-T", "file.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn info_alias() {
        let cli = Cli::try_parse_from(["scrawl", "i"]).unwrap();
        assert!(matches!(cli.command, Commands::Info));
    }
}
