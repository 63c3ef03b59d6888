use anyhow::{Context, Result, bail};
use bezelshot::batch::{self, RenderJob};
use bezelshot::config::FontWeightSpec;
use bezelshot::device::{self, DeviceCategory};
use bezelshot::output::{self, FileSaveConfig};
use bezelshot::{Config, PangoMeasurer, RasterImage, SourceImage, compositor};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "bezelshot")]
#[command(
    version,
    about = "Composite app screenshots into device mock-ups for store listings"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one mock-up per screenshot and save them as PNG
    Render(RenderArgs),

    /// List supported devices and their canvas sizes
    Devices,

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Screenshot to place in the device frame (PNG or JPEG); repeatable
    #[arg(long, short = 'i', value_name = "FILE", required = true)]
    image: Vec<PathBuf>,

    /// Config file to use instead of ~/.config/bezelshot/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Target device id (see `bezelshot devices`)
    #[arg(long, short = 'd', value_name = "ID")]
    device: Option<String>,

    /// Marketing message; a literal `\n` starts a new paragraph
    #[arg(long, short = 'm', value_name = "TEXT")]
    message: Option<String>,

    /// Directory for the rendered PNGs
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Accept screenshots whose size differs from the device canvas
    #[arg(long, action = ArgAction::SetTrue)]
    allow_any_size: bool,

    #[command(flatten)]
    style: StyleArgs,
}

/// Per-run overrides of the configured style.
#[derive(Args, Debug)]
struct StyleArgs {
    /// Background color (6-digit hex)
    #[arg(long, value_name = "HEX")]
    background_color: Option<String>,

    /// Bezel color (6-digit hex)
    #[arg(long, value_name = "HEX")]
    bezel_color: Option<String>,

    /// Text color (6-digit hex)
    #[arg(long, value_name = "HEX")]
    text_color: Option<String>,

    /// Bezel thickness in pixels
    #[arg(long, value_name = "PX")]
    bezel_width: Option<f64>,

    /// Y of the bezel's top edge in pixels (may be negative)
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    bezel_top: Option<f64>,

    /// Multiplier on the auto-fit device size
    #[arg(long, value_name = "FACTOR")]
    size_factor: Option<f64>,

    /// Outer corner radius of the bezel in pixels
    #[arg(long, value_name = "PX")]
    border_radius: Option<f64>,

    /// Font family fallback list, e.g. "Inter, sans-serif"
    #[arg(long, value_name = "FAMILIES")]
    font_family: Option<String>,

    /// Font size in pixels
    #[arg(long, value_name = "PX")]
    font_size: Option<f64>,

    /// Font weight: normal, bold or 100-900
    #[arg(long, value_name = "WEIGHT")]
    font_weight: Option<String>,

    /// Baseline of the first text line in pixels
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    text_top: Option<f64>,
}

impl StyleArgs {
    fn apply(self, config: &mut Config) {
        if let Some(color) = self.background_color {
            config.theme.background_color = color;
        }
        if let Some(color) = self.bezel_color {
            config.theme.bezel_color = color;
        }
        if let Some(color) = self.text_color {
            config.theme.text_color = color;
        }
        if self.bezel_width.is_some() {
            config.bezel.width = self.bezel_width;
        }
        if self.bezel_top.is_some() {
            config.bezel.top_distance = self.bezel_top;
        }
        if self.size_factor.is_some() {
            config.bezel.size_factor = self.size_factor;
        }
        if self.border_radius.is_some() {
            config.bezel.border_radius = self.border_radius;
        }
        if let Some(family) = self.font_family {
            config.text.font_family = family;
        }
        if self.font_size.is_some() {
            config.text.font_size = self.font_size;
        }
        if let Some(weight) = self.font_weight {
            config.text.font_weight = FontWeightSpec::Name(weight);
        }
        if self.text_top.is_some() {
            config.text.top_distance = self.text_top;
        }
    }
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Print the fully resolved configuration as TOML
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["path", "init"])]
    export: bool,

    /// Print the location of the configuration file
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "init")]
    path: bool,

    /// Write a default configuration file
    #[arg(long, action = ArgAction::SetTrue)]
    init: bool,

    /// Config file to read instead of the default location
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Resolve presets for this device instead of the configured one
    #[arg(long, short = 'd', value_name = "ID")]
    device: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => run_render(args),
        Command::Devices => {
            print_devices();
            Ok(())
        }
        Command::Config(args) => run_config(args),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    args.style.apply(&mut config);
    if let Some(device) = args.device {
        config.device = device;
    }
    if let Some(message) = args.message {
        config.text.message = message.replace("\\n", "\n");
    }
    if let Some(dir) = args.output_dir {
        config.output.directory = dir.display().to_string();
    }
    config.validate_and_clamp();

    let device = config.device_spec()?;
    let render_config = config.render_config(device);
    log::info!(
        "Target device: {} ({} x {})",
        device.name,
        device.width,
        device.height
    );

    let mut images = Vec::with_capacity(args.image.len());
    for path in &args.image {
        let image = SourceImage::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        if args.allow_any_size {
            if image.check_device(device).is_err() {
                log::warn!(
                    "{} is {} x {}, not the {} x {} canvas of {}",
                    path.display(),
                    image.width(),
                    image.height(),
                    device.width,
                    device.height,
                    device.id
                );
            }
        } else {
            image
                .check_device(device)
                .with_context(|| format!("Rejected {}", path.display()))?;
        }
        images.push(Arc::new(image));
    }

    let results: Vec<bezelshot::error::Result<RasterImage>> = if images.len() == 1 {
        let measurer = PangoMeasurer::new()?;
        vec![compositor::render(&render_config, &images[0], &measurer)]
    } else {
        let jobs = images
            .iter()
            .map(|image| RenderJob::new(render_config.clone(), Arc::clone(image)))
            .collect();
        batch::render_batch_blocking(jobs, PangoMeasurer::new)?
    };

    let mut save_config = config.output.to_save_config();
    if results.len() > 1 && !save_config.filename_template.contains("{index}") {
        save_config.filename_template.push_str("-{index}");
    }

    let total = results.len();
    let mut failures = 0;
    for (index, (result, path)) in results.into_iter().zip(&args.image).enumerate() {
        let saved = result
            .and_then(|raster| raster.encode_png())
            .map_err(anyhow::Error::from)
            .and_then(|png| save(&png, &save_config, device.id, index + 1));
        match saved {
            Ok(saved) => println!("{}", saved.display()),
            Err(e) => {
                failures += 1;
                eprintln!("{}: {:#}", path.display(), e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} mock-ups failed", failures, total);
    }
    Ok(())
}

fn save(png: &[u8], config: &FileSaveConfig, device: &str, index: usize) -> Result<PathBuf> {
    output::save_png(png, config, device, index).with_context(|| {
        format!(
            "Failed to save mock-up into {}",
            config.save_directory.display()
        )
    })
}

fn print_devices() {
    for category in DeviceCategory::ALL {
        println!("{}:", category);
        for device in device::by_category(category) {
            println!(
                "  {:<20} {:>5} x {:<5} {} ({})",
                device.id, device.width, device.height, device.name, device.display_size
            );
        }
        println!();
    }
    println!("Default: {}", device::DEFAULT_DEVICE);
}

fn run_config(args: ConfigArgs) -> Result<()> {
    if args.init {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }

    if args.path {
        let path = match args.config {
            Some(path) => path,
            None => Config::get_config_path()?,
        };
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = load_config(args.config.as_deref())?;
    if let Some(device) = args.device {
        config.device = device;
    }
    let device = config.device_spec()?;
    if args.export {
        print!("{}", config.resolved_for(device).to_toml()?);
    } else {
        let source = match args.config {
            Some(path) => path,
            None => Config::get_config_path()?,
        };
        println!("Config: {}", source.display());
        println!(
            "Device: {} ({} x {})",
            device.id, device.width, device.height
        );
        println!("Run with --export to print the resolved settings.");
    }
    Ok(())
}
