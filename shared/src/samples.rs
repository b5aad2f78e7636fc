use std::ops::Range;

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Two equal-length sequences where `y[i] == x[i] * x[i]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SamplePair {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SamplePair {
    pub const DEFAULT_LEN: usize = 100;

    pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let x = (0..len)
            .map(|_| -> f64 { StandardNormal.sample(&mut *rng) })
            .collect::<Vec<_>>();
        Self::squares_of(x)
    }

    pub fn squares_of(x: Vec<f64>) -> Self {
        let y = x.iter().map(|v| v * v).collect();
        Self { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Plot ranges covering every point with 5% padding on each side.
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        (padded_range(&self.x), padded_range(&self.y))
    }
}

fn padded_range(values: &[f64]) -> Range<f64> {
    let (lo, hi) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return 0.0..1.0;
    }
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { 0.5 };
    (lo - pad)..(hi + pad)
}
