use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// sign, integer digits, optional fraction after '.' or ','
static NUMBER_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)(\d+)([.,](\d+))?$").expect("valid regex")
});

#[derive(Debug, PartialEq, Eq, Error)]
pub enum NumberValidatorError {
    #[error("Precision must be a positive number, got {0}")]
    NonPositivePrecision(i32),
    #[error("Scale must be non-negative and less than precision {precision}, got {scale}")]
    InvalidScale { precision: i32, scale: i32 },
}

/// Checks decimal strings against an `N(precision, scale)` format.
///
/// `precision` bounds the total digit count, with a sign counted as an
/// integer digit; `scale` bounds the fractional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberValidator {
    precision: usize,
    scale: usize,
    only_positive: bool,
}

impl NumberValidator {
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> Result<Self, NumberValidatorError> {
        if precision <= 0 {
            return Err(NumberValidatorError::NonPositivePrecision(precision));
        }
        if scale < 0 || scale >= precision {
            return Err(NumberValidatorError::InvalidScale { precision, scale });
        }

        tracing::debug!(
            "Number validator ::> precision: {}, scale: {}, only_positive: {}",
            precision,
            scale,
            only_positive
        );

        Ok(Self {
            precision: precision as usize,
            scale: scale as usize,
            only_positive,
        })
    }

    /// Integers only, signed values allowed.
    pub fn with_precision(precision: i32) -> Result<Self, NumberValidatorError> {
        Self::new(precision, 0, false)
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn only_positive(&self) -> bool {
        self.only_positive
    }

    pub fn is_valid_number(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }

        let Some(caps) = NUMBER_FORMAT.captures(value) else {
            tracing::debug!("Not a number: {:?}", value);
            return false;
        };

        let sign = caps.get(1).map_or("", |m| m.as_str());
        let int_digits = caps.get(2).map_or(0, |m| m.as_str().chars().count());
        let frac_digits = caps.get(4).map_or(0, |m| m.as_str().chars().count());

        let int_part = sign.len() + int_digits;
        if int_part + frac_digits > self.precision || frac_digits > self.scale {
            tracing::debug!(
                "Number {:?} exceeds N({}, {})",
                value,
                self.precision,
                self.scale
            );
            return false;
        }

        !(self.only_positive && sign == "-")
    }
}
