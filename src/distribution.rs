use std::fmt;

use rand::Rng;
use rand_distr::{Distribution, Exp, Normal, Uniform};

use crate::error::{Result, SampleError};

pub const NORMAL_MEAN: f64 = 100.0;
pub const NORMAL_STD_DEV: f64 = 10.0;
pub const UNIFORM_LOCATION: f64 = 75.0;
pub const UNIFORM_SCALE: f64 = 50.0;
pub const EXPONENTIAL_OFFSET: f64 = 0.0;
pub const EXPONENTIAL_SCALE: f64 = 100.0;

/// Probability law a sample set is drawn from, with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Kind {
    Normal { mean: f64, std_dev: f64 },
    /// Half-open range `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// `offset + Exp(1 / scale)`.
    Exponential { offset: f64, scale: f64 },
}

impl Kind {
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Normal { .. } => "normal",
            Kind::Uniform { .. } => "uniform",
            Kind::Exponential { .. } => "exponential",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named distribution. The name doubles as the output file stem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistributionSpec {
    pub name: &'static str,
    pub kind: Kind,
}

impl DistributionSpec {
    pub fn normal(mean: f64, std_dev: f64) -> Self {
        Self {
            name: "normal",
            kind: Kind::Normal { mean, std_dev },
        }
    }

    pub fn uniform(low: f64, high: f64) -> Self {
        Self {
            name: "uniform",
            kind: Kind::Uniform { low, high },
        }
    }

    /// Uniform over `[location, location + scale)`.
    pub fn uniform_from_location_scale(location: f64, scale: f64) -> Self {
        Self::uniform(location, location + scale)
    }

    pub fn exponential(offset: f64, scale: f64) -> Self {
        Self {
            name: "exponential",
            kind: Kind::Exponential { offset, scale },
        }
    }

    /// The three sample sets produced by a default run, in run order.
    pub fn defaults() -> [Self; 3] {
        [
            Self::normal(NORMAL_MEAN, NORMAL_STD_DEV),
            Self::uniform_from_location_scale(UNIFORM_LOCATION, UNIFORM_SCALE),
            Self::exponential(EXPONENTIAL_OFFSET, EXPONENTIAL_SCALE),
        ]
    }
}

/// Validated, ready-to-draw form of a [`DistributionSpec`].
///
/// Build one with [`Sampler::new`]; it implements [`Distribution<f64>`] so
/// `sampler.sample_iter(&mut rng)` yields a lazy, unbounded sequence.
#[derive(Clone, Debug)]
pub enum Sampler {
    Normal(Normal<f64>),
    Uniform(Uniform<f64>),
    Exponential { offset: f64, exp: Exp<f64> },
}

impl Sampler {
    pub fn new(spec: &DistributionSpec) -> Result<Self> {
        let invalid = |parameter, value| SampleError::InvalidParameter {
            distribution: spec.kind.label(),
            parameter,
            value,
        };
        match spec.kind {
            Kind::Normal { mean, std_dev } => {
                if !mean.is_finite() {
                    return Err(invalid("mean", mean));
                }
                if !std_dev.is_finite() || std_dev < 0.0 {
                    return Err(invalid("std_dev", std_dev));
                }
                let normal = Normal::new(mean, std_dev).map_err(|_| invalid("std_dev", std_dev))?;
                Ok(Sampler::Normal(normal))
            }
            Kind::Uniform { low, high } => {
                if !low.is_finite() {
                    return Err(invalid("low", low));
                }
                // Uniform::new panics on an empty or infinite range
                if !high.is_finite() || low >= high || !(high - low).is_finite() {
                    return Err(invalid("high", high));
                }
                Ok(Sampler::Uniform(Uniform::new(low, high)))
            }
            Kind::Exponential { offset, scale } => {
                if !offset.is_finite() {
                    return Err(invalid("offset", offset));
                }
                if !scale.is_finite() || scale <= 0.0 {
                    return Err(invalid("scale", scale));
                }
                let exp = Exp::new(scale.recip()).map_err(|_| invalid("scale", scale))?;
                Ok(Sampler::Exponential { offset, exp })
            }
        }
    }
}

impl Distribution<f64> for Sampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Sampler::Normal(normal) => normal.sample(rng),
            Sampler::Uniform(uniform) => uniform.sample(rng),
            Sampler::Exponential { offset, exp } => offset + exp.sample(rng),
        }
    }
}

/// Draws `sample_size` independent values from `spec`, in generation order.
pub fn generate<R: Rng + ?Sized>(
    spec: &DistributionSpec,
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let sampler = Sampler::new(spec)?;
    Ok(sampler.sample_iter(rng).take(sample_size).collect())
}
