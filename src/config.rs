use std::error::Error;
use std::fmt;

use crate::core::fractals::mandelbrot::kernels::kinds::KernelKind;

pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;
pub const DEFAULT_MAX_ITERATIONS: u32 = 48;
pub const DEFAULT_CONTRAST: u32 = 1;

/// Pan distance per key press, in unscaled pixels.
pub const PAN_STEP: f32 = 10.0;
pub const ZOOM_FACTOR: f32 = 1.01;

pub const WINDOW_TITLE: &str = "Mandelbrot!";

pub const ENV_WIDTH: &str = "MANDELBROT_WIDTH";
pub const ENV_HEIGHT: &str = "MANDELBROT_HEIGHT";
pub const ENV_MAX_ITERATIONS: &str = "MANDELBROT_MAX_ITER";
pub const ENV_KERNEL: &str = "MANDELBROT_KERNEL";
pub const ENV_CONTRAST: &str = "MANDELBROT_CONTRAST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    ZeroMaxIterations,
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "width must be greater than zero"),
            Self::ZeroHeight => write!(f, "height must be greater than zero"),
            Self::ZeroMaxIterations => write!(f, "Maximum iterations must be greater than zero"),
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value '{}' for {}", value, key)
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub kernel: KernelKind,
    pub contrast: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            kernel: KernelKind::default(),
            contrast: DEFAULT_CONTRAST,
        }
    }
}

fn parse_override<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
    }
}

impl RenderConfig {
    /// Defaults overridden by any `MANDELBROT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(width) = parse_override(&lookup, ENV_WIDTH)? {
            config.width = width;
        }
        if let Some(height) = parse_override(&lookup, ENV_HEIGHT)? {
            config.height = height;
        }
        if let Some(max_iterations) = parse_override(&lookup, ENV_MAX_ITERATIONS)? {
            config.max_iterations = max_iterations;
        }
        if let Some(kernel) = parse_override(&lookup, ENV_KERNEL)? {
            config.kernel = kernel;
        }
        if let Some(contrast) = parse_override(&lookup, ENV_CONTRAST)? {
            config.contrast = contrast;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_matches_production_constants() {
        let config = RenderConfig::default();

        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 1080);
        assert_eq!(config.max_iterations, 48);
        assert_eq!(config.kernel, KernelKind::Vectorized8);
        assert_eq!(config.contrast, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_overrides_yields_default() {
        let config = RenderConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = RenderConfig::from_lookup(lookup_from(&[
            (ENV_WIDTH, "640"),
            (ENV_HEIGHT, " 480 "),
            (ENV_MAX_ITERATIONS, "100"),
            (ENV_KERNEL, "grouped4"),
            (ENV_CONTRAST, "5"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            RenderConfig {
                width: 640,
                height: 480,
                max_iterations: 100,
                kernel: KernelKind::Grouped4,
                contrast: 5,
            }
        );
    }

    #[test]
    fn test_unparsable_override_is_reported() {
        let result = RenderConfig::from_lookup(lookup_from(&[(ENV_KERNEL, "avx512")]));

        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                key: ENV_KERNEL.to_string(),
                value: "avx512".to_string(),
            })
        );
    }

    #[test]
    fn test_zero_dimensions_fail_validation() {
        let zero_width = RenderConfig {
            width: 0,
            ..RenderConfig::default()
        };
        let zero_height = RenderConfig {
            height: 0,
            ..RenderConfig::default()
        };
        let zero_iterations = RenderConfig {
            max_iterations: 0,
            ..RenderConfig::default()
        };

        assert_eq!(zero_width.validate(), Err(ConfigError::ZeroWidth));
        assert_eq!(zero_height.validate(), Err(ConfigError::ZeroHeight));
        assert_eq!(zero_iterations.validate(), Err(ConfigError::ZeroMaxIterations));
    }

    #[test]
    fn test_override_to_zero_fails_validation() {
        let result = RenderConfig::from_lookup(lookup_from(&[(ENV_HEIGHT, "0")]));

        assert_eq!(result, Err(ConfigError::ZeroHeight));
    }
}
