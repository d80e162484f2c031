use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use fractal_studio::controllers::cli::{
    CliController, Scene, SceneOverrides, load_scene, preset_listing, save_scene,
};
use fractal_studio::controllers::export::export_job::{DEFAULT_TILE_SIZE, ExportRequest};
use fractal_studio::controllers::renderer::fractal_renderer::RenderQuality;
use fractal_studio::core::colour_mapping::palette::presets::PalettePresetKind;
use fractal_studio::core::data::palette_config::Interpolation;
use fractal_studio::core::data::render_settings::{Detail, ScaleMode};
use fractal_studio::core::fractals::fractal_kinds::FractalKind;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "fractal-studio")]
#[command(version, about = "Render Mandelbrot, Julia and Burning Ship fractals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single frame
    Render {
        #[command(flatten)]
        scene: SceneArgs,

        /// Output width in pixels
        #[arg(long, default_value_t = 1280)]
        width: u32,

        /// Output height in pixels
        #[arg(long, default_value_t = 720)]
        height: u32,

        /// Render at half resolution without supersampling
        #[arg(long)]
        preview: bool,

        /// Output image (.png or .ppm)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: PathBuf,
    },
    /// Render a large image tile by tile
    Export {
        #[command(flatten)]
        scene: SceneArgs,

        /// Output width in pixels
        #[arg(long, default_value_t = 3840)]
        width: u32,

        /// Output height in pixels
        #[arg(long, default_value_t = 2160)]
        height: u32,

        /// Tile edge length in pixels
        #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
        tile_size: u32,

        /// Output image (.png or .ppm)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: PathBuf,
    },
    /// List the palette presets
    Presets,
}

#[derive(Args)]
struct SceneArgs {
    /// Scene file (JSON) to start from
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    scene: Option<PathBuf>,

    /// Write the effective scene to this file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    save_scene: Option<PathBuf>,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// mandelbrot, julia or burning-ship
    #[arg(long, value_parser = parse_fractal)]
    fractal: Option<FractalKind>,

    #[arg(long, allow_hyphen_values = true)]
    centre_re: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    centre_im: Option<f64>,

    /// Half-height of the view in the complex plane
    #[arg(long)]
    scale: Option<f64>,

    /// Zoom factor applied after --scale
    #[arg(long)]
    zoom: Option<f64>,

    /// Maximum iterations
    #[arg(short, long)]
    iterations: Option<u32>,

    /// Supersampling factor: 1, 2 or 4
    #[arg(long, value_parser = parse_detail)]
    detail: Option<Detail>,

    #[arg(long)]
    power: Option<f64>,

    #[arg(long)]
    bailout: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    julia_re: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    julia_im: Option<f64>,

    /// linear, log or sqrt
    #[arg(long, value_parser = parse_scale_mode)]
    scale_mode: Option<ScaleMode>,

    /// Palette preset id (see `presets`)
    #[arg(short, long, value_parser = parse_palette)]
    palette: Option<PalettePresetKind>,

    /// Palette cycles across the iteration range
    #[arg(long)]
    palette_length: Option<u32>,

    #[arg(long, allow_hyphen_values = true)]
    cycle_offset: Option<f64>,

    /// Reverse the palette
    #[arg(long)]
    reverse: bool,

    /// linear, cosine or perceptual
    #[arg(long, value_parser = parse_interpolation)]
    interpolation: Option<Interpolation>,
}

impl SceneArgs {
    fn overrides(&self) -> SceneOverrides {
        SceneOverrides {
            fractal: self.fractal,
            centre_re: self.centre_re,
            centre_im: self.centre_im,
            scale: self.scale,
            zoom: self.zoom,
            iterations: self.iterations,
            detail: self.detail,
            power: self.power,
            bailout: self.bailout,
            julia_re: self.julia_re,
            julia_im: self.julia_im,
            scale_mode: self.scale_mode,
            palette: self.palette,
            palette_length: self.palette_length,
            cycle_offset: self.cycle_offset,
            reverse: self.reverse,
            interpolation: self.interpolation,
        }
    }

    /// Loads the base scene, applies overrides and saves the result if asked.
    fn resolve(&self) -> anyhow::Result<Scene> {
        let mut scene = match &self.scene {
            Some(path) => load_scene(path)?,
            None => Scene::default(),
        };
        scene.frame = self.overrides().apply(scene.frame);
        if let Some(threads) = self.threads {
            scene.renderer.threads = Some(threads);
        }

        if let Some(path) = &self.save_scene {
            save_scene(path, &scene)?;
            info!(path = %path.display(), "scene saved");
        }

        Ok(scene)
    }
}

fn parse_fractal(value: &str) -> Result<FractalKind, String> {
    FractalKind::from_id(value).ok_or_else(|| format!("unknown fractal '{value}'"))
}

fn parse_palette(value: &str) -> Result<PalettePresetKind, String> {
    PalettePresetKind::from_id(value).ok_or_else(|| format!("unknown palette '{value}'"))
}

fn parse_detail(value: &str) -> Result<Detail, String> {
    value
        .parse()
        .ok()
        .and_then(Detail::from_factor)
        .ok_or_else(|| format!("detail must be 1, 2 or 4, got '{value}'"))
}

fn parse_scale_mode(value: &str) -> Result<ScaleMode, String> {
    match value {
        "linear" => Ok(ScaleMode::Linear),
        "log" => Ok(ScaleMode::Log),
        "sqrt" => Ok(ScaleMode::Sqrt),
        _ => Err(format!("unknown scale mode '{value}'")),
    }
}

fn parse_interpolation(value: &str) -> Result<Interpolation, String> {
    match value {
        "linear" => Ok(Interpolation::Linear),
        "cosine" => Ok(Interpolation::Cosine),
        "perceptual" => Ok(Interpolation::Perceptual),
        _ => Err(format!("unknown interpolation '{value}'")),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "fractal_studio=info".into()))
        .with(fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            scene,
            width,
            height,
            preview,
            output,
        } => {
            let scene = scene.resolve()?;
            let quality = if preview {
                RenderQuality::Preview
            } else {
                RenderQuality::Full
            };

            let mut controller = CliController::new(scene.renderer)?;
            let frame = controller
                .render(&scene.frame, width, height, quality)
                .context("render failed")?
                .clone();
            controller.write(&frame, &output)?;
            controller.dispose();
        }
        Commands::Export {
            scene,
            width,
            height,
            tile_size,
            output,
        } => {
            let scene = scene.resolve()?;
            let request = ExportRequest {
                width,
                height,
                tile_size,
            };

            let mut controller = CliController::new(scene.renderer)?;
            let image = controller
                .export(&scene.frame, request)
                .context("export failed")?;
            controller.write(&image, &output)?;
            controller.dispose();
        }
        Commands::Presets => {
            for line in preset_listing() {
                println!("{line}");
            }
        }
    }

    Ok(())
}
