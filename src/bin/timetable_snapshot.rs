use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use timetable_chart::api::{TimetableChart, TimetableConfig, UpdateOptions};
use timetable_chart::core::{ZoomLevel, appointments_from_json_str};
use timetable_chart::render::NullRenderer;

const USAGE: &str = "usage: timetable_snapshot [--zoom <day|week|month>] [--width <px>] [--height <px>] [--at <YYYY-MM-DD[THH:MM:SS]>] [--data <path>]";

#[derive(Debug, Default)]
struct CliArgs {
    zoom: Option<ZoomLevel>,
    width: Option<u32>,
    height: Option<u32>,
    at: Option<NaiveDateTime>,
    data: Option<PathBuf>,
}

fn main() {
    let _ = timetable_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let data = match &args.data {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            appointments_from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => Vec::new(),
    };

    let mut chart = TimetableChart::with_reference_time(
        NullRenderer::default(),
        TimetableConfig::default(),
        args.at,
    )
    .map_err(|err| err.to_string())?;

    let mut options = UpdateOptions::new();
    if let Some(zoom) = args.zoom {
        options = options.with_zoom(zoom);
    }
    if let Some(width) = args.width {
        options = options.with_width(width);
    }
    if let Some(height) = args.height {
        options = options.with_height(height);
    }
    chart
        .update(&data, options)
        .map_err(|err| err.to_string())?;

    let json = chart
        .snapshot_json_pretty()
        .map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut cli = CliArgs::default();

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--zoom" => {
                let raw = value("--zoom")?;
                cli.zoom = Some(raw.parse().map_err(|err| format!("{err}"))?);
            }
            "--width" => cli.width = Some(parse_pixels("--width", &value("--width")?)?),
            "--height" => cli.height = Some(parse_pixels("--height", &value("--height")?)?),
            "--at" => cli.at = Some(parse_reference(&value("--at")?)?),
            "--data" => cli.data = Some(PathBuf::from(value("--data")?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    Ok(cli)
}

fn parse_pixels(flag: &str, raw: &str) -> Result<u32, String> {
    raw.parse::<u32>()
        .map_err(|err| format!("invalid value for {flag} `{raw}`: {err}"))
}

fn parse_reference(raw: &str) -> Result<NaiveDateTime, String> {
    if let Ok(instant) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(instant);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid value for --at `{raw}`"))
}
