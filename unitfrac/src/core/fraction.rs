//! Validated proper fractions and unit fractions.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::{DecomposeError, ParseFractionError};

/// A proper fraction `numerator/denominator` with `0 < numerator < denominator`.
///
/// Stored exactly as given; the constructor does not reduce to lowest terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: BigUint,
    denominator: BigUint,
}

impl Fraction {
    /// Validate and build a fraction.
    ///
    /// A non-positive numerator is reported before an out-of-range denominator.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, DecomposeError> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if numerator.sign() != Sign::Plus {
            return Err(DecomposeError::NumeratorNotPositive { numerator });
        }
        if numerator >= denominator {
            return Err(DecomposeError::NumeratorNotLessThanDenominator {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator: numerator.magnitude().clone(),
            denominator: denominator.magnitude().clone(),
        })
    }

    pub fn numerator(&self) -> &BigUint {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    /// Exact rational value (reduced).
    pub fn to_rational(&self) -> BigRational {
        BigRational::new(
            BigInt::from(self.numerator.clone()),
            BigInt::from(self.denominator.clone()),
        )
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numerator, denominator) = s
            .split_once('/')
            .ok_or_else(|| ParseFractionError::MissingSlash(s.to_string()))?;
        let numerator = parse_part("numerator", numerator)?;
        let denominator = parse_part("denominator", denominator)?;
        Ok(Self::new(numerator, denominator)?)
    }
}

fn parse_part(part: &'static str, raw: &str) -> Result<BigInt, ParseFractionError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<BigInt>()
        .map_err(|_| ParseFractionError::InvalidInteger {
            part,
            input: trimmed.to_string(),
        })
}

/// The unit fraction `1/denominator`.
///
/// Any denominator is representable so that user-supplied terms can be
/// checked; strategies only ever produce denominators of 2 or more.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitFraction {
    denominator: BigUint,
}

impl UnitFraction {
    pub fn new(denominator: impl Into<BigUint>) -> Self {
        Self {
            denominator: denominator.into(),
        }
    }

    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    /// Exact rational value, or `None` for the degenerate `1/0`.
    pub fn to_rational(&self) -> Option<BigRational> {
        if self.denominator.is_zero() {
            return None;
        }
        Some(BigRational::new(
            BigInt::one(),
            BigInt::from(self.denominator.clone()),
        ))
    }
}

impl fmt::Display for UnitFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1/{}", self.denominator)
    }
}
