use crate::error::MinigradError;
use crate::ops::traits::Numeric;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Strategy used to draw the initial value of a parameter.
///
/// Randomness always comes from the caller-supplied generator, so seeding it
/// (e.g. `StdRng::seed_from_u64`) makes module construction reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Fills with 0.
    Zeros,
    /// Fills with a fixed value.
    Constant(f64),
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Glorot/Xavier uniform on `[-l, l)` with `l = sqrt(6 / (fan_in + fan_out))`.
    XavierUniform,
}

/// Bound of the Xavier uniform distribution for a layer with the given fans.
pub fn xavier_limit(fan_in: usize, fan_out: usize) -> f64 {
    (6.0 / (fan_in + fan_out) as f64).sqrt()
}

impl Init {
    /// Checks the initializer's parameters without drawing anything.
    pub fn validate(&self) -> Result<(), MinigradError> {
        match *self {
            Init::Zeros | Init::XavierUniform => Ok(()),
            Init::Constant(value) if value.is_finite() => Ok(()),
            Init::Constant(value) => Err(MinigradError::InvalidConfiguration(format!(
                "constant initializer must be finite, got {}",
                value
            ))),
            // The width must be finite too: `Uniform::new` panics when `high - low` overflows.
            Init::Uniform { low, high } if low < high && (high - low).is_finite() => Ok(()),
            Init::Uniform { low, high } => Err(MinigradError::InvalidConfiguration(format!(
                "uniform initializer needs finite low < high with a finite width, got [{}, {})",
                low, high
            ))),
            Init::Normal { mean, std } if mean.is_finite() && std.is_finite() && std >= 0.0 => {
                Ok(())
            }
            Init::Normal { mean, std } => Err(MinigradError::InvalidConfiguration(format!(
                "normal initializer needs a finite mean and std >= 0, got mean={} std={}",
                mean, std
            ))),
        }
    }

    /// Draws one value for a parameter of a layer with `fan_in` inputs and `fan_out` outputs.
    ///
    /// Parameters are validated first, so an invalid initializer returns
    /// `InvalidConfiguration` instead of reaching the distribution constructors.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        fan_in: usize,
        fan_out: usize,
        rng: &mut R,
    ) -> Result<f64, MinigradError> {
        self.validate()?;
        match *self {
            Init::Zeros => Ok(0.0),
            Init::Constant(value) => Ok(value),
            Init::Uniform { low, high } => Ok(Uniform::new(low, high).sample(rng)),
            Init::Normal { mean, std } => {
                let normal = Normal::new(mean, std)
                    .map_err(|e| MinigradError::InvalidConfiguration(e.to_string()))?;
                Ok(normal.sample(rng))
            }
            Init::XavierUniform => {
                if fan_in + fan_out == 0 {
                    return Err(MinigradError::InvalidConfiguration(
                        "xavier initializer needs fan_in + fan_out > 0".to_string(),
                    ));
                }
                let limit = xavier_limit(fan_in, fan_out);
                Ok(Uniform::new(-limit, limit).sample(rng))
            }
        }
    }

    /// Like [`Init::sample`], converted to the graph's value type.
    pub fn sample_as<T: Numeric, R: Rng + ?Sized>(
        &self,
        fan_in: usize,
        fan_out: usize,
        rng: &mut R,
    ) -> Result<T, MinigradError> {
        let value = self.sample(fan_in, fan_out, rng)?;
        T::from_literal(value).ok_or_else(|| {
            MinigradError::InternalError(format!("initial value {} is not representable", value))
        })
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
