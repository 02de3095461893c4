use crate::error::{Error, Result};

use super::{Palette, Rgb};

/// One equal-width slice of the observed range and its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBucket {
    pub color: Rgb,
    pub low: f64,
    pub high: f64,
}

/// Quantize scale: splits `[min, max]` into one equal-width bucket per palette color.
///
/// When every observed value is identical the range has zero width and the scale
/// collapses to a single bucket holding the first palette color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    min: f64,
    max: f64,
    colors: &'static [Rgb],
}

impl ColorScale {
    /// Build from the observed values; non-finite values are ignored.
    pub fn new(values: impl IntoIterator<Item = f64>, palette: Palette) -> Result<Self> {
        let (min, max) = values.into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .ok_or(Error::EmptyStatistics)?;
        Ok(Self::from_domain(min, max, palette))
    }

    pub fn from_domain(min: f64, max: f64, palette: Palette) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self { min, max, colors: palette.colors() }
    }

    #[inline] pub fn domain(&self) -> (f64, f64) { (self.min, self.max) }

    #[inline] pub fn is_degenerate(&self) -> bool { self.max == self.min }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        if self.is_degenerate() { 1 } else { self.colors.len() }
    }

    /// Lower edge of bucket `k`; `k == bucket_count()` is the top of the range.
    fn boundary(&self, k: usize) -> f64 {
        let n = self.bucket_count();
        if k >= n { return self.max }
        self.min + k as f64 * (self.max - self.min) / n as f64
    }

    /// Bucket boundaries `min + k * (max - min) / N` for `k = 0..=N`.
    pub fn thresholds(&self) -> Vec<f64> {
        (0..=self.bucket_count()).map(|k| self.boundary(k)).collect()
    }

    /// Index of the bucket holding `value`; values outside the domain clamp to the end buckets.
    pub fn bucket_of(&self, value: f64) -> usize {
        let n = self.bucket_count();
        if n == 1 { return 0 }

        let t = (value - self.min) / (self.max - self.min);
        let mut k = ((t * n as f64).floor().max(0.0) as usize).min(n - 1);

        // settle rounding at the edges so the bucket always agrees with `boundary`
        while k > 0 && value < self.boundary(k) { k -= 1 }
        while k + 1 < n && value >= self.boundary(k + 1) { k += 1 }
        k
    }

    pub fn color_of(&self, value: f64) -> Rgb {
        self.colors[self.bucket_of(value)]
    }

    /// Inverse lookup: the closed interval covered by `color`, if the scale uses it.
    pub fn bucket_bounds_of(&self, color: Rgb) -> Option<(f64, f64)> {
        let k = self.colors[..self.bucket_count()].iter().position(|&c| c == color)?;
        Some((self.boundary(k), self.boundary(k + 1)))
    }

    pub fn buckets(&self) -> impl Iterator<Item = ColorBucket> + '_ {
        (0..self.bucket_count()).map(|k| ColorBucket {
            color: self.colors[k],
            low: self.boundary(k),
            high: self.boundary(k + 1),
        })
    }
}
