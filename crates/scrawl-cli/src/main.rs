//! Scrawl command-line interface
//!
//! Wires the handwriting scribe, a renderer, and an exporter into a pipeline
//! and drives it from parsed arguments.

// this_file: crates/scrawl-cli/src/main.rs

mod cli;

use clap::Parser;
use cli::{Cli, Commands, OutputFormat, RenderArgs};
use scrawl_core::{
    error::{Result, ScrawlError},
    Backdrop, Color, Pipeline, RenderParams, StyleParams,
};
use scrawl_export::{PdfExporter, PngExporter, SvgExporter};
use scrawl_render_skia::SkiaRenderer;
use scrawl_render_svg::SvgRenderer;
use scrawl_script::HandwritingScribe;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Info => run_info(),
        Commands::Render(args) => run_render(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_info() -> Result<()> {
    println!("scrawl {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Renderers:");
    println!("  skia    raster output over a painted paper backdrop");
    println!("  svg     vector output with the backdrop as an SVG pattern");
    println!();
    println!("Export formats:");
    for exporter in [
        &PngExporter::new() as &dyn scrawl_core::Exporter,
        &SvgExporter::new(),
        &PdfExporter::new(),
    ] {
        println!(
            "  {:<4}    .{} ({})",
            exporter.name(),
            exporter.extension(),
            exporter.mime_type()
        );
    }
    println!();
    println!("Paper styles: white, cream, yellow, lined, grid, dotted, #rrggbb");
    Ok(())
}

fn run_render(args: &RenderArgs) -> Result<()> {
    let text = read_input(args)?;
    if text.trim().is_empty() {
        return Err(ScrawlError::ConfigError(
            "nothing to render: input text is empty".into(),
        ));
    }

    let style = resolve_style(args)?;
    let format = resolve_format(args)?;
    let backdrop = parse_paper(&args.paper)?;
    let ink = match &args.ink {
        Some(hex) => Color::from_hex(hex)
            .ok_or_else(|| ScrawlError::ConfigError(format!("invalid ink color: {hex}")))?,
        None => Color::INK,
    };

    let scribe = match args.seed {
        Some(seed) => HandwritingScribe::seeded(seed),
        None => HandwritingScribe::new(),
    }
    .with_ink(ink);

    let builder = Pipeline::builder().scribe(Arc::new(scribe));
    let pipeline = match format {
        OutputFormat::Png => builder
            .renderer(Arc::new(SkiaRenderer::new()))
            .exporter(Arc::new(PngExporter::new())),
        OutputFormat::Pdf => builder
            .renderer(Arc::new(SkiaRenderer::new()))
            .exporter(Arc::new(PdfExporter::new())),
        OutputFormat::Svg => builder
            .renderer(Arc::new(SvgRenderer::new()))
            .exporter(Arc::new(SvgExporter::new())),
    }
    .build()?;

    let render_params = RenderParams {
        backdrop,
        canvas_width: args.canvas_width,
        ..RenderParams::default()
    };

    let bytes = pipeline.process(&text, &style, &render_params)?;
    fs::write(&args.output, &bytes)?;
    log::info!("Wrote {} bytes to {}", bytes.len(), args.output.display());
    println!("Wrote {}", args.output.display());
    Ok(())
}

/// Positional text, then -t, then -T, then stdin.
fn read_input(args: &RenderArgs) -> Result<String> {
    if let Some(text) = args.text.as_ref().or(args.text_arg.as_ref()) {
        return Ok(text.clone());
    }
    if let Some(path) = &args.text_file {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Preset file first, individual flags layered on top, then clamped.
fn resolve_style(args: &RenderArgs) -> Result<StyleParams> {
    let mut style = match &args.style_file {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            serde_json::from_str(&json).map_err(|e| {
                ScrawlError::ConfigError(format!(
                    "invalid style file {}: {e}",
                    path.display()
                ))
            })?
        },
        None => StyleParams::default(),
    };

    if let Some(v) = args.letter_spacing {
        style.letter_spacing = v;
    }
    if let Some(v) = args.word_spacing {
        style.word_spacing = v;
    }
    if let Some(v) = args.letter_size {
        style.letter_size = v;
    }
    if let Some(v) = args.line_spacing {
        style.line_spacing = v;
    }
    if let Some(v) = args.stroke_width {
        style.stroke_width = v;
    }
    if let Some(v) = args.jitter {
        style.jitter = v;
    }

    Ok(style.clamped())
}

fn resolve_format(args: &RenderArgs) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match extension_of(&args.output) {
        Some("png") => Ok(OutputFormat::Png),
        Some("svg") => Ok(OutputFormat::Svg),
        Some("pdf") => Ok(OutputFormat::Pdf),
        _ => Err(ScrawlError::ConfigError(format!(
            "cannot infer format from output path {}; pass --format",
            args.output.display()
        ))),
    }
}

fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn parse_paper(paper: &str) -> Result<Backdrop> {
    match paper.to_ascii_lowercase().as_str() {
        "white" => Ok(Backdrop::Solid(Color::WHITE)),
        "cream" => Ok(Backdrop::Solid(Color::CREAM)),
        "yellow" => Ok(Backdrop::Solid(Color::YELLOW)),
        "lined" => Ok(Backdrop::lined()),
        "grid" => Ok(Backdrop::grid()),
        "dotted" => Ok(Backdrop::dotted()),
        other => Color::from_hex(other)
            .map(Backdrop::Solid)
            .ok_or_else(|| ScrawlError::ConfigError(format!("unknown paper style: {paper}"))),
    }
}
