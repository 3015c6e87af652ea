//! Discrete colour ramps used to heat-map time values.

use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Integer mean of the three channels.
    pub fn channel_mean(&self) -> u32 {
        (self.r as u32 + self.g as u32 + self.b as u32) / 3
    }

    /// Black on light colours, white on dark ones.
    ///
    /// A plain channel average, not perceptual luminance: mean 128 is
    /// still "dark".
    pub fn contrasting_text(&self) -> Rgb {
        if self.channel_mean() > 128 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Build a ramp of exactly `steps` colours through the given anchors.
///
/// The ramp is split into `colors.len() - 1` equal sections of
/// `steps / sections` slots, each a linear RGB interpolation starting at its
/// anchor. Slots left over by the integer division repeat the last anchor,
/// and with two or more steps the final slot is always the last anchor.
pub fn build(colors: &[Rgb], steps: usize) -> AppResult<Vec<Rgb>> {
    if colors.len() < 2 {
        return Err(AppError::InvalidArgument(format!(
            "a gradient needs at least 2 colors, got {}",
            colors.len()
        )));
    }

    let sections = colors.len() - 1;
    let per_section = steps / sections;
    let last = colors[colors.len() - 1];

    let mut ramp = Vec::with_capacity(steps);
    for pair in colors.windows(2) {
        ramp.extend(interpolate(pair[0], pair[1], per_section));
    }
    ramp.resize(steps, last);

    if steps >= 2 {
        ramp[steps - 1] = last;
    }

    Ok(ramp)
}

fn interpolate(one: Rgb, two: Rgb, steps: usize) -> Vec<Rgb> {
    let channel = |a: u8, b: u8, norm: f64| -> u8 {
        // `as` truncates toward zero; the result always lies between a and b.
        (a as f64 + norm * (b as f64 - a as f64)) as u8
    };

    (0..steps)
        .map(|i| {
            let norm = i as f64 / steps as f64;
            Rgb::new(
                channel(one.r, two.r, norm),
                channel(one.g, two.g, norm),
                channel(one.b, two.b, norm),
            )
        })
        .collect()
}

/// Pick the ramp bucket for `value` within `[min, max]`.
///
/// `min == max` (and an empty ramp) yield white.
pub fn color_for(value: f64, min: f64, max: f64, ramp: &[Rgb]) -> Rgb {
    if min == max || ramp.is_empty() {
        return Rgb::WHITE;
    }

    let last = (ramp.len() - 1) as f64;
    let norm = (value - min) / (max - min);
    let index = (norm * last).floor().clamp(0.0, last);

    // NaN clamps to NaN and casts to 0.
    ramp[index as usize]
}

/// Readable text colour for the bucket `value` maps to.
pub fn text_color_for(value: f64, min: f64, max: f64, ramp: &[Rgb]) -> Rgb {
    color_for(value, min, max, ramp).contrasting_text()
}

/// A precomputed ramp bound to a value range.
#[derive(Debug, Clone)]
pub struct Gradient {
    colors: Vec<Rgb>,
    min: f64,
    max: f64,
}

impl Gradient {
    /// Interpolate `steps` colours between `anchors` over `[min, max]`.
    pub fn new(anchors: &[Rgb], steps: usize, min: f64, max: f64) -> AppResult<Self> {
        let colors = build(anchors, steps)?;
        Self::from_ramp(colors, min, max)
    }

    /// Use an already computed ramp as-is.
    pub fn from_ramp(colors: Vec<Rgb>, min: f64, max: f64) -> AppResult<Self> {
        if colors.len() < 2 {
            return Err(AppError::InvalidArgument(format!(
                "a gradient needs at least 2 colors, got {}",
                colors.len()
            )));
        }
        Ok(Self { colors, min, max })
    }

    /// White to black in ten steps, as used by the history report.
    pub fn heat(max: f64) -> AppResult<Self> {
        Self::new(&[Rgb::WHITE, Rgb::BLACK], 10, 0.0, max)
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn set_max(&mut self, max: f64) {
        self.max = max;
    }

    pub fn color_for(&self, value: f64) -> Rgb {
        color_for(value, self.min, self.max, &self.colors)
    }

    pub fn text_color_for(&self, value: f64) -> Rgb {
        text_color_for(value, self.min, self.max, &self.colors)
    }
}
