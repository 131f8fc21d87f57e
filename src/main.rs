use clap::{Parser, ValueEnum};
use sketch_fit::modules::export::{svg, svg_path::ToSvgPath};
use sketch_fit::modules::parse::json::points_from_reader;
use sketch_fit::{BezierCurve, FitConfig, FitSegments};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Array of segments, each an array of four {"x", "y"} points
    Json,
    /// SVG path data (M/C commands)
    Path,
    /// Standalone SVG document with the stroke samples overlaid
    Svg,
}

#[derive(Parser)]
#[command(name = "sketch-fit", about = "Fit cubic bezier curves to a freehand stroke")]
struct Cli {
    /// Stroke as a JSON array of {"x", "y"} points (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with fitting parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum squared distance between a sample and the fitted curve
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Newton-Raphson rounds before a region is split
    #[arg(long)]
    max_iterations: Option<usize>,

    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// SVG canvas width
    #[arg(long, default_value = "800")]
    width: u32,

    /// SVG canvas height
    #[arg(long, default_value = "600")]
    height: u32,
}

fn load_config(cli: &Cli) -> Result<FitConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => FitConfig::default(),
    };
    if let Some(tolerance) = cli.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_iterations) = cli.max_iterations {
        config.max_iterations = max_iterations;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let points = match &cli.input {
        Some(path) => points_from_reader(BufReader::new(File::open(path)?))?,
        None => points_from_reader(io::stdin().lock())?,
    };
    log::info!("read {} points, tolerance {}", points.len(), config.tolerance);

    let mut segments = Vec::new();
    for fitted in FitSegments::new(&points, config)? {
        log::debug!(
            "segment over points {}..={}, max squared error {:.4}",
            fitted.first,
            fitted.last,
            fitted.max_error
        );
        segments.push(fitted.segment);
    }
    let curve = BezierCurve::new(segments);
    log::info!("fitted {} segments", curve.len());

    let rendered = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&curve)?,
        OutputFormat::Path => curve.to_svg_path(),
        OutputFormat::Svg => svg::overlay_to_svg(&curve, &points, cli.width, cli.height),
    };

    match &cli.output {
        Some(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{}", rendered)?;
            eprintln!("Wrote {} segments to {}", curve.len(), path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
