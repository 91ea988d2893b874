use std::fs;
use std::path::PathBuf;

use bar_chart_rs::api::{ChartEngine, ChartEngineConfig};
use bar_chart_rs::core::{DataPoint, Viewport};
use bar_chart_rs::render::SvgRenderer;

const USAGE: &str = "usage: render_bar_chart_svg --input <series.json> --output <chart.svg> [--config <config.json>] [--width <px>] [--height <px>] [--at-ms <ms>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    width: u32,
    height: u32,
    /// Clock position to paint; `None` paints the settled chart.
    at_ms: Option<f64>,
}

fn main() {
    let _ = bar_chart_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("failed to read `{}`: {e}", path.display()))?;
            ChartEngineConfig::from_json_str(&raw).map_err(|e| e.to_string())?
        }
        None => ChartEngineConfig::default(),
    };

    let raw = fs::read_to_string(&args.input)
        .map_err(|e| format!("failed to read `{}`: {e}", args.input.display()))?;
    let series: Vec<DataPoint> = serde_json::from_str(&raw)
        .map_err(|e| format!("failed to parse series `{}`: {e}", args.input.display()))?;

    let mut engine =
        ChartEngine::new(SvgRenderer::new(), config).map_err(|e| e.to_string())?;
    engine.set_data(series).map_err(|e| e.to_string())?;
    engine
        .mount(Viewport::new(args.width, args.height))
        .map_err(|e| e.to_string())?;
    match args.at_ms {
        Some(at_ms) => engine.advance_time(at_ms),
        None => engine.settle(),
    }
    .map_err(|e| e.to_string())?;
    engine.render().map_err(|e| e.to_string())?;

    let document = engine.into_renderer().into_document();
    fs::write(&args.output, document)
        .map_err(|e| format!("failed to write `{}`: {e}", args.output.display()))?;
    Ok(())
}

fn parse_args<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut width = 960_u32;
    let mut height = 400_u32;
    let mut at_ms = None::<f64>;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value("--input")?)),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--width" => {
                width = value("--width")?
                    .parse()
                    .map_err(|e| format!("invalid --width: {e}"))?;
            }
            "--height" => {
                height = value("--height")?
                    .parse()
                    .map_err(|e| format!("invalid --height: {e}"))?;
            }
            "--at-ms" => {
                at_ms = Some(
                    value("--at-ms")?
                        .parse()
                        .map_err(|e| format!("invalid --at-ms: {e}"))?,
                );
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        output: output.ok_or_else(|| USAGE.to_owned())?,
        config,
        width,
        height,
        at_ms,
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{USAGE, parse_args};

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_owned()).collect()
    }

    #[test]
    fn input_and_output_are_enough() {
        let args = parse_args(argv(&["--input", "series.json", "--output", "chart.svg"]))
            .expect("valid arguments");
        assert_eq!(args.input, Path::new("series.json"));
        assert_eq!(args.output, Path::new("chart.svg"));
        assert!(args.config.is_none());
        assert_eq!((args.width, args.height), (960, 400));
        assert!(args.at_ms.is_none());
    }

    #[test]
    fn optional_flags_override_defaults() {
        let args = parse_args(argv(&[
            "--output", "out.svg", "--width", "640", "--height", "320", "--at-ms", "125.5",
            "--config", "config.json", "--input", "in.json",
        ]))
        .expect("valid arguments");
        assert_eq!((args.width, args.height), (640, 320));
        assert_eq!(args.at_ms, Some(125.5));
        assert_eq!(args.config.as_deref(), Some(Path::new("config.json")));
    }

    #[test]
    fn missing_input_reports_usage() {
        let err = parse_args(argv(&["--output", "chart.svg"])).expect_err("input is required");
        assert_eq!(err, USAGE);
    }

    #[test]
    fn malformed_width_is_rejected() {
        let err = parse_args(argv(&[
            "--input", "a.json", "--output", "b.svg", "--width", "wide",
        ]))
        .expect_err("width must be numeric");
        assert!(err.starts_with("invalid --width:"), "{err}");
    }

    #[test]
    fn flag_without_value_and_unknown_flags_are_rejected() {
        let err = parse_args(argv(&["--input"])).expect_err("value missing");
        assert_eq!(err, "missing value for --input");
        let err = parse_args(argv(&["--colour", "red"])).expect_err("unknown flag");
        assert_eq!(err, "unknown argument `--colour`");
    }
}
