// File: crates/plot-core/src/ticks.rs
// Summary: Tick generation (linear and log10 policies), label formatting and user overrides.

use crate::axis::{AxisLimits, ScaleKind};
use crate::types::{
    LINEAR_MAJOR_TICKS, LINEAR_MINOR_PER_INTERVAL, LOG_SUBDIVISIONS_PER_DECADE, MAX_TICKS,
    MIN_MAJOR_SPACING_PX,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickLevel {
    Major,
    /// Tiny-grid subdivision; never labeled.
    Minor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub level: TickLevel,
    pub label: Option<String>,
}

impl Tick {
    pub fn major(value: f64, label: impl Into<String>) -> Self {
        Self { value, level: TickLevel::Major, label: Some(label.into()) }
    }

    pub fn minor(value: f64) -> Self {
        Self { value, level: TickLevel::Minor, label: None }
    }

    pub fn is_major(&self) -> bool { self.level == TickLevel::Major }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
    // pin the far end so the last tick sits exactly on `end`
    if let Some(last) = out.last_mut() { *last = end; }
    out
}

/// Number of linear major ticks that fit on `pixel_len` pixels.
pub fn linear_major_count(pixel_len: f64) -> usize {
    if !(pixel_len > 0.0) { return 0; }
    let fit = (pixel_len / MIN_MAJOR_SPACING_PX).floor() as usize + 1;
    fit.clamp(2, LINEAR_MAJOR_TICKS)
}

/// Ticks a linear axis of `pixel_len` pixels reserves room for.
pub fn linear_capacity(pixel_len: f64, tiny: bool) -> usize {
    let n = linear_major_count(pixel_len);
    if tiny && n > 1 { n + (n - 1) * LINEAR_MINOR_PER_INTERVAL } else { n }
}

/// Evenly spaced ticks from `limits.min` to `limits.max`, both included.
///
/// With `tiny` set, [`LINEAR_MINOR_PER_INTERVAL`] unlabeled ticks are placed
/// between each pair of majors. An empty pixel span yields no ticks.
pub fn linear_ticks(limits: AxisLimits, pixel_len: f64, tiny: bool) -> Vec<Tick> {
    let n = linear_major_count(pixel_len);
    if n == 0 || limits.validate(ScaleKind::Linear).is_err() {
        return Vec::new();
    }
    let majors = linspace(limits.min, limits.max, n);
    let step = limits.span() / (n as f64 - 1.0);
    let cap = if tiny { n + (n - 1) * LINEAR_MINOR_PER_INTERVAL } else { n };
    let mut ticks = Vec::with_capacity(cap);

    for (i, &v) in majors.iter().enumerate() {
        ticks.push(Tick::major(v, format_value(v, step)));
        if tiny && i + 1 < majors.len() {
            let sub = step / (LINEAR_MINOR_PER_INTERVAL as f64 + 1.0);
            for k in 1..=LINEAR_MINOR_PER_INTERVAL {
                ticks.push(Tick::minor(v + sub * k as f64));
            }
        }
    }
    ticks
}

/// One labeled tick per decade inside `limits`; with `tiny`, unlabeled ticks at
/// 2..9 x 10^k as well.
///
/// Invalid log limits yield no ticks. If the limits span less than one decade
/// and contain no power of ten, the in-range 1..9 x 10^k values become the
/// labeled ticks; if there are none of those either, `min` and `max` are
/// labeled so the axis is never left bare.
pub fn log_ticks(limits: AxisLimits, tiny: bool) -> Vec<Tick> {
    if limits.validate(ScaleKind::Log10).is_err() {
        return Vec::new();
    }
    let (lo_exp, hi_exp) = limits.exponent_range();
    let decades = (hi_exp - lo_exp).max(0) as usize;
    let stride = ((decades + 1) + MAX_TICKS - 1) / MAX_TICKS;
    let minors_fit = stride == 1 && decades * (LOG_SUBDIVISIONS_PER_DECADE + 1) + 1 <= MAX_TICKS;
    if tiny && !minors_fit {
        log::warn!("log axis spans {decades} decades; tiny grid skipped");
    }

    let mut ticks = Vec::with_capacity(log_capacity(lo_exp, hi_exp, tiny && minors_fit));
    for exp in lo_exp..=hi_exp {
        let decade = 10f64.powi(exp);
        if (exp - lo_exp) as usize % stride == 0 && limits.contains(decade) {
            ticks.push(Tick::major(decade, format_decade(exp)));
        }
        if tiny && minors_fit && exp < hi_exp {
            for k in 2..=9 {
                let v = decade * k as f64;
                if limits.contains(v) {
                    ticks.push(Tick::minor(v));
                }
            }
        }
    }

    if !ticks.iter().any(Tick::is_major) {
        return sub_decade_ticks(limits, lo_exp, hi_exp);
    }
    ticks
}

/// Ticks a log axis reserves room for over `[lo_exp, hi_exp]`.
pub fn log_capacity(lo_exp: i32, hi_exp: i32, tiny: bool) -> usize {
    let decades = (hi_exp - lo_exp).max(0) as usize;
    let n = if tiny { decades * LOG_SUBDIVISIONS_PER_DECADE + decades + 1 } else { decades + 1 };
    n.min(MAX_TICKS)
}

fn sub_decade_ticks(limits: AxisLimits, lo_exp: i32, hi_exp: i32) -> Vec<Tick> {
    let mut ticks = Vec::new();
    for exp in lo_exp..=hi_exp {
        let decade = 10f64.powi(exp);
        for k in 1..=9 {
            let v = decade * k as f64;
            if limits.contains(v) {
                ticks.push(Tick::major(v, format_value(v, decade)));
            }
        }
    }
    if ticks.is_empty() {
        let step = limits.span();
        ticks.push(Tick::major(limits.min, format_value(limits.min, step)));
        ticks.push(Tick::major(limits.max, format_value(limits.max, step)));
    }
    ticks
}

/// User-supplied tick positions, sanitized for the axis.
///
/// Non-finite values, values the scale cannot show and values outside
/// `limits` are dropped; the rest are sorted, de-duplicated and capped at
/// [`MAX_TICKS`]. Every tick gets a default numeric label.
pub fn custom_ticks(values: &[f64], limits: AxisLimits, kind: ScaleKind) -> Vec<Tick> {
    let mut kept: Vec<f64> = values
        .iter()
        .copied()
        .filter(|&v| kind.is_valid_value(v) && limits.contains(v))
        .collect();
    kept.sort_by(f64::total_cmp);
    kept.dedup();
    if kept.len() > MAX_TICKS {
        log::warn!("{} custom ticks requested; keeping the first {MAX_TICKS}", kept.len());
        kept.truncate(MAX_TICKS);
    }
    let step = match kind {
        ScaleKind::Linear => limits.span() / (LINEAR_MAJOR_TICKS as f64 - 1.0),
        ScaleKind::Log10 => 0.0,
    };
    kept.into_iter()
        .map(|v| match (kind, decade_exponent(v)) {
            (ScaleKind::Log10, Some(exp)) => Tick::major(v, format_decade(exp)),
            _ => {
                let s = if step > 0.0 { step } else { v.abs() };
                Tick::major(v, format_value(v, s))
            }
        })
        .collect()
}

/// `Some(k)` when `value` is 10^k up to rounding.
fn decade_exponent(value: f64) -> Option<i32> {
    if !(value > 0.0) {
        return None;
    }
    let exp = value.log10().round() as i32;
    ((10f64.powi(exp) - value).abs() <= value * 1e-12).then_some(exp)
}

/// Overwrite labels of the labeled ticks, in order.
///
/// Fewer labels than labeled ticks: the remaining ticks keep their generated
/// label. More labels than labeled ticks: the excess is ignored.
pub fn apply_labels(ticks: &mut [Tick], labels: &[String]) {
    for (tick, text) in ticks.iter_mut().filter(|t| t.label.is_some()).zip(labels) {
        tick.label = Some(text.clone());
    }
}

/// Label for `value` on an axis whose ticks are `step` apart.
pub fn format_value(value: f64, step: f64) -> String {
    let step = step.abs();
    let v = if value.abs() <= step * 1e-9 { 0.0 } else { value };
    if v == 0.0 {
        return "0".to_string();
    }
    if v.abs() >= 1e6 || (step > 0.0 && step < 1e-4) || (step == 0.0 && v.abs() < 1e-4) {
        return trim_scientific(&format!("{v:.3e}"));
    }
    trim_fraction(&format!("{v:.6}"))
}

/// Label for the decade 10^exp.
pub fn format_decade(exp: i32) -> String {
    match exp {
        0..=5 => 10i64.pow(exp as u32).to_string(),
        -3..=-1 => format!("{:.*}", (-exp) as usize, 10f64.powi(exp)),
        _ => format!("1e{exp}"),
    }
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

fn trim_scientific(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) => format!("{}e{}", trim_fraction(mantissa), exp),
        None => s.to_string(),
    }
}
