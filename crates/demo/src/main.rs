// File: crates/demo/src/main.rs
// Summary: Demo streams synthetic stereo spectra into a semi-log plot, or renders one spectrum from CSV, to PNGs.

use anyhow::{Context, Result};
use clap::Parser;
use plot_core::{theme, Color, FrameHandoff, PointF32, SemiLogX};
use plot_render_skia::{render_to_png, RenderOptions, Trace};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

const MIN_FREQ: f64 = 20.0;
const MAX_FREQ: f64 = 22_000.0;
const MIN_DB: f64 = -60.0;
const MAX_DB: f64 = 10.0;
const BINS: usize = 512;
/// Producer cadence, about 30 frames per second.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// One analysis frame: magnitude in dB per frequency bin, both channels.
struct SpectrumFrame {
    seq: u64,
    left: Vec<(f64, f64)>,
    right: Vec<(f64, f64)>,
}

#[derive(Parser)]
#[command(name = "plot-demo")]
#[command(about = "Stream synthetic spectra into a semi-log plot and render PNG frames")]
struct Args {
    /// Render a single spectrum from a CSV with freq/db columns instead of streaming
    csv: Option<String>,

    /// Number of frames the producer synthesizes
    #[arg(short, long, default_value = "12")]
    frames: u64,

    /// Output directory for PNGs
    #[arg(short, long = "out", default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset (dark, light, solarized-dark, ...)
    #[arg(short, long, default_value = "dark")]
    theme: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&args.theme);
    log::info!("theme: {}", opts.theme.name);

    match &args.csv {
        Some(raw) => render_csv(raw, &args, &opts),
        None => stream(&args, &opts),
    }
}

fn new_plot() -> Result<SemiLogX> {
    let mut grid = SemiLogX::new();
    grid.set_x_lim(MIN_FREQ, MAX_FREQ)?;
    grid.set_y_lim(MIN_DB, MAX_DB)?;
    grid.set_grid_on(true, true);
    grid.set_on_invalidate(|| log::trace!("grid invalidated"));
    Ok(grid)
}

/// Producer thread publishes frames; this thread takes the newest and renders it.
fn stream(args: &Args, opts: &RenderOptions) -> Result<()> {
    let handoff: FrameHandoff<SpectrumFrame> = FrameHandoff::new();
    let producer = {
        let handoff = handoff.clone();
        let frames = args.frames;
        thread::spawn(move || {
            for seq in 0..frames {
                handoff.publish(synthesize(seq));
                thread::sleep(FRAME_INTERVAL);
            }
        })
    };

    let mut grid = new_plot()?;
    let left_color = opts.theme.trace;
    let right_color = Color::from_rgb(255, 140, 60);
    let mut rendered = 0usize;

    loop {
        let finished = producer.is_finished();
        if let Some(frame) = handoff.take() {
            let traces = [
                Trace::new(frame.left).with_color(left_color),
                Trace::new(frame.right).with_color(right_color),
            ];
            let out = args.out_dir.join(format!("spectrum_{:03}.png", frame.seq));
            render_to_png(&mut grid, &traces, opts, &out)
                .with_context(|| format!("rendering {}", out.display()))?;
            rendered += 1;
            log::info!("wrote {}", out.display());

            // Fixed cursor in the middle of the plot area
            let area = opts.grid_area();
            let cursor = PointF32::new(
                (area.left + area.right) as f32 * 0.5,
                (area.top + area.bottom) as f32 * 0.5,
            );
            if let Some(i) = grid.transform().trace_point(&traces[0].points, cursor) {
                let (f, db) = traces[0].points[i];
                log::debug!("frame {}: cursor nearest bin {i} at {f:.1} Hz, {db:.1} dB", frame.seq);
            }
        } else if finished {
            break;
        } else {
            thread::sleep(Duration::from_millis(5));
        }
    }

    if producer.join().is_err() {
        anyhow::bail!("producer thread panicked");
    }
    log::info!("rendered {rendered} of {} produced frames", args.frames);
    Ok(())
}

/// Deterministic test signal: two drifting peaks over a sloped noise floor.
fn synthesize(seq: u64) -> SpectrumFrame {
    let t = seq as f64 * FRAME_INTERVAL.as_secs_f64();
    let lo = MIN_FREQ.log10();
    let hi = MAX_FREQ.log10();
    let channel = |phase: f64| -> Vec<(f64, f64)> {
        let peak_a = 2.0 + 0.6 * (t * 0.7 + phase).sin();
        let peak_b = 3.7 + 0.3 * (t * 1.3 + phase).cos();
        (0..BINS)
            .map(|i| {
                let lf = lo + (hi - lo) * i as f64 / (BINS as f64 - 1.0);
                let floor = -48.0 - 6.0 * (lf - lo) + 2.0 * (i as f64 * 1.7 + t * 11.0 + phase).sin();
                let a = -6.0 - 400.0 * (lf - peak_a).powi(2);
                let b = -12.0 - 900.0 * (lf - peak_b).powi(2);
                (10f64.powf(lf), floor.max(a).max(b))
            })
            .collect()
    };
    SpectrumFrame { seq, left: channel(0.0), right: channel(1.1) }
}

fn render_csv(raw: &str, args: &Args, opts: &RenderOptions) -> Result<()> {
    let path = resolve_path(raw)?;
    log::info!("using input file: {}", path.display());
    let points = load_spectrum_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if points.is_empty() {
        anyhow::bail!("no spectrum rows loaded; check headers/delimiter.");
    }
    log::info!("loaded {} bins", points.len());

    let mut grid = new_plot()?;
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("spectrum");
    let out = args.out_dir.join(format!("{stem}.png"));
    render_to_png(&mut grid, &[Trace::new(points)], opts, &out)?;
    log::info!("wrote {}", out.display());
    Ok(())
}

fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load `freq,db` rows; header names are matched case-insensitively.
fn load_spectrum_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };
    let i_freq = idx(&["freq", "frequency", "hz", "f"]).context("no frequency column")?;
    let i_db = idx(&["db", "magnitude", "mag", "level"]).context("no dB column")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        match (parse(i_freq), parse(i_db)) {
            (Some(f), Some(db)) => out.push((f, db)),
            _ => log::warn!("skipping unparsable row {:?}", rec.position().map(|p| p.line())),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_default_to_streaming() {
        let args = Args::try_parse_from(["plot-demo"]).unwrap();
        assert!(args.csv.is_none());
        assert_eq!(args.frames, 12);
        assert_eq!(args.out_dir, PathBuf::from("target/out"));
    }

    #[test]
    fn args_take_flags_and_csv_path() {
        let args = Args::try_parse_from(["plot-demo", "--frames", "3", "--out", "frames", "-t", "light", "sweep.csv"]).unwrap();
        assert_eq!(args.csv.as_deref(), Some("sweep.csv"));
        assert_eq!(args.frames, 3);
        assert_eq!(args.out_dir, PathBuf::from("frames"));
        assert_eq!(args.theme, "light");
        assert!(Args::try_parse_from(["plot-demo", "--bogus"]).is_err());
    }

    #[test]
    fn synthesized_frames_cover_the_audio_band() {
        let frame = synthesize(4);
        assert_eq!(frame.left.len(), BINS);
        let first = frame.left.first().map(|p| p.0).unwrap_or_default();
        let last = frame.left.last().map(|p| p.0).unwrap_or_default();
        assert!((first - MIN_FREQ).abs() < 1e-6 && (last - MAX_FREQ).abs() < 1e-3);
        assert!(frame.right.iter().all(|&(_, db)| db.is_finite()));
    }
}
