mod config;
mod frames;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use ascii_effect::{
    AsciiEffect, Density, DisplaySink, EffectOptions, FrameSource, Palette, StaticFrame,
    WriteSink,
};
use clap::{Parser, Subcommand, ValueEnum};
use image::GenericImageView;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::config::{ConfigFile, DisplayConfig};

const PROGRESS_TEMPLATE: &str =
    "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} frames {msg}";

#[derive(Parser, Debug)]
#[command(author, version, about = "Render images and animations through the ASCII effect")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the glyph grid to stdout for a quick preview
    Preview(PreviewArgs),
    /// Convert an image to an HTML page
    Convert(ConvertArgs),
    /// Convert an animation (GIF or directory of frames) to one HTML page per frame
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input image path
    input: PathBuf,
    /// Print the markup fragment instead of plain glyph rows
    #[arg(long, default_value_t = false)]
    markup: bool,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image path
    input: PathBuf,
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Input animation path (GIF file or directory of images)
    input: PathBuf,
    /// Output directory for frame files
    #[arg(short, long)]
    out_dir: PathBuf,
    /// Frames per second reported for inputs without timing information
    #[arg(long, default_value_t = 12.0)]
    fps: f32,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// TOML file with `[effect]` and `[display]` sections
    #[arg(long)]
    config: Option<PathBuf>,
    /// Display width in pixels (defaults to the input width)
    #[arg(long)]
    width: Option<u32>,
    /// Display height in pixels (defaults to the input height)
    #[arg(long)]
    height: Option<u32>,
    /// Fraction of the display size that is sampled (0..1]
    #[arg(long)]
    resolution: Option<f64>,
    /// Glyph magnification
    #[arg(long)]
    scale: Option<u32>,
    /// Tint glyphs with their source color
    #[arg(long, default_value_t = false)]
    color: bool,
    /// Carry source alpha as glyph opacity
    #[arg(long, default_value_t = false)]
    alpha: bool,
    /// Fill glyph backgrounds with their source color
    #[arg(long, default_value_t = false)]
    block: bool,
    /// Map dark pixels to light glyphs
    #[arg(long, default_value_t = false)]
    invert: bool,
    /// Letter-spacing profile
    #[arg(long, value_enum)]
    density: Option<DensityChoice>,
    /// Built-in glyph ramp
    #[arg(long, value_enum, conflicts_with = "charset")]
    preset: Option<PalettePreset>,
    /// Custom glyph ramp, lightest glyph first
    #[arg(long)]
    charset: Option<String>,
    /// Convert input pixels from sRGB to linear before sampling
    #[arg(long, default_value_t = false)]
    linearize: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DensityChoice {
    Low,
    Medium,
    High,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PalettePreset {
    Grayscale,
    Colored,
    Classic,
    Bold,
    Blocks,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview(args),
        Commands::Convert(args) => convert(args),
        Commands::Animate(args) => animate(args),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let (options, display) = args.settings.resolve()?;
    let image = frames::load_image(&args.input)?;
    let effect = build_effect(options, display, image.dimensions())?;
    let mut source = StaticFrame::new(image).with_linearize(args.settings.linearize);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.markup {
        let mut sink = WriteSink::new(out);
        effect
            .render_to(&mut source, &mut sink)
            .with_context(|| format!("failed to render {:?}", args.input))?;
        return Ok(());
    }

    let (width, height) = effect.sample_size();
    let frame = source.next_frame(width, height).context("input produced no frame")?;
    let grid = effect
        .rasterize(frame.as_raw())
        .with_context(|| format!("failed to render {:?}", args.input))?;
    for row in grid.rows() {
        writeln!(out, "{}", row)?;
    }
    out.flush()?;
    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let (options, display) = args.settings.resolve()?;
    let image = frames::load_image(&args.input)?;
    let effect = build_effect(options, display, image.dimensions())?;
    let mut source = StaticFrame::new(image).with_linearize(args.settings.linearize);

    let markup = effect
        .render(&mut source)
        .with_context(|| format!("failed to render {:?}", args.input))?;
    write_page(&effect, &markup, &args.output)?;

    info!("wrote {}", args.output.display());
    Ok(())
}

fn animate(args: AnimateArgs) -> Result<()> {
    let (options, display) = args.settings.resolve()?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create output directory {:?}", args.out_dir))?;

    let frames = frames::load_frames(&args.input)?;
    let Some(first) = frames.first() else {
        anyhow::bail!("no frames found in {:?}", args.input);
    };
    let effect = build_effect(options, display, first.image.dimensions())?;

    let frame_count = frames.len();
    let progress = ProgressBar::new(frame_count as u64);
    progress.set_style(
        ProgressStyle::with_template(PROGRESS_TEMPLATE)?.progress_chars("=> "),
    );

    let mut total_delay = Duration::ZERO;
    for (index, frame) in frames.into_iter().enumerate() {
        total_delay += frame.delay;
        let mut source = StaticFrame::new(frame.image).with_linearize(args.settings.linearize);
        let markup = effect
            .render(&mut source)
            .with_context(|| format!("failed to render frame {}", index))?;

        let frame_path = args.out_dir.join(format!("frame_{:04}.html", index));
        write_page(&effect, &markup, &frame_path)?;
        progress.inc(1);
    }

    let fps = frames_per_second(frame_count, total_delay, args.fps);
    progress.finish_with_message(format!("Frames written to {:?} (fps {:.2})", args.out_dir, fps));
    info!("wrote {} frames to {} at {:.2} fps", frame_count, args.out_dir.display(), fps);
    Ok(())
}

/// Playback rate implied by the summed frame delays, or `fallback` when the input has no timing.
fn frames_per_second(frame_count: usize, total_delay: Duration, fallback: f32) -> f32 {
    if total_delay.is_zero() {
        fallback
    } else {
        frame_count as f32 / total_delay.as_secs_f32()
    }
}

fn build_effect(
    options: EffectOptions,
    display: DisplayConfig,
    (source_width, source_height): (u32, u32),
) -> Result<AsciiEffect> {
    let mut effect = AsciiEffect::new(options).context("invalid effect options")?;
    let width = display.width.unwrap_or(source_width);
    let height = display.height.unwrap_or(source_height);
    effect.resize(width, height);

    let (sample_width, sample_height) = effect.sample_size();
    if sample_width == 0 || sample_height < 2 {
        anyhow::bail!(
            "display {}x{} is too small to sample at resolution {}",
            width,
            height,
            effect.options().resolution
        );
    }
    Ok(effect)
}

fn write_page(effect: &AsciiEffect, markup: &str, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {:?}", path))?;
    let mut sink = WriteSink::new(BufWriter::new(file));
    sink.present(&effect.document(markup))
        .with_context(|| format!("failed to write {:?}", path))
}

impl RenderSettings {
    fn resolve(&self) -> Result<(EffectOptions, DisplayConfig)> {
        let file = match &self.config {
            Some(path) => config::load_config(path)?,
            None => ConfigFile::default(),
        };
        Ok(self.apply(file))
    }

    fn apply(&self, file: ConfigFile) -> (EffectOptions, DisplayConfig) {
        let ConfigFile { effect: mut options, display: mut display } = file;

        if let Some(resolution) = self.resolution {
            options.resolution = resolution;
        }
        if let Some(scale) = self.scale {
            options.scale = scale;
        }
        options.color |= self.color;
        options.alpha |= self.alpha;
        options.block |= self.block;
        options.invert |= self.invert;
        if let Some(density) = self.density {
            options.density = density.to_density();
        }
        if let Some(preset) = self.preset {
            options.charset = Some(preset.to_palette().chars().iter().collect());
        }
        if let Some(charset) = &self.charset {
            options.charset = Some(charset.clone());
        }

        if self.width.is_some() {
            display.width = self.width;
        }
        if self.height.is_some() {
            display.height = self.height;
        }

        (options, display)
    }
}

impl DensityChoice {
    fn to_density(self) -> Density {
        match self {
            DensityChoice::Low => Density::Low,
            DensityChoice::Medium => Density::Medium,
            DensityChoice::High => Density::High,
        }
    }
}

impl PalettePreset {
    fn to_palette(self) -> Palette {
        match self {
            PalettePreset::Grayscale => Palette::grayscale(),
            PalettePreset::Colored => Palette::colored(),
            PalettePreset::Classic => Palette::classic(),
            PalettePreset::Bold => Palette::bold(),
            PalettePreset::Blocks => Palette::blocks(),
        }
    }
}
