//! Dice expressions such as `2d6+1`, `3d10x10` or `1d6/3`.
//!
//! An expression is parsed once into a [`DiceExpr`] and then rolled as
//! often as needed. The accepted notation is
//!
//! ```text
//! [count]d<sides>[x<mult> | /<div>][+<add> | -<sub>]
//! ```
//!
//! or a bare integer constant. The count defaults to one. Scaling is applied
//! to the raw dice sum before the additive modifier: `xN` multiplies, while
//! `/N` splits the sum into `N`-wide bands numbered from one, i.e.
//! `(sum - 1) / N + 1`, so `1d6/3` yields 1 or 2 with equal odds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::roller::DiceRoller;

/// Most dice a parsed expression may roll.
pub const MAX_DICE: u32 = 100;

/// Most sides a parsed die may have.
pub const MAX_SIDES: u32 = 1000;

/// Largest multiplier or divisor a parsed expression may use.
pub const MAX_SCALE: u32 = 1000;

/// How the raw dice sum is scaled before the modifier is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    /// Multiply the sum by this factor.
    Multiply(u32),
    /// Band the sum into groups of this width: `(sum - 1) / n + 1`.
    Divide(u32),
}

impl Default for Scale {
    fn default() -> Self {
        Self::Multiply(1)
    }
}

impl Scale {
    fn apply(self, sum: i64) -> i64 {
        match self {
            Self::Multiply(n) => sum.saturating_mul(i64::from(n)),
            Self::Divide(n) => (sum - 1).div_euclid(i64::from(n)) + 1,
        }
    }
}

/// A parsed dice expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiceExpr {
    /// Number of dice rolled. Zero for a constant expression.
    pub count: u32,
    /// Sides on each die. Zero for a constant expression.
    pub sides: u32,
    /// Scaling applied to the dice sum.
    pub scale: Scale,
    /// Flat modifier added after scaling.
    pub modifier: i64,
}

impl DiceExpr {
    /// `count` dice of `sides` sides, unscaled and unmodified.
    pub fn new(count: u32, sides: u32) -> Self {
        Self {
            count,
            sides,
            scale: Scale::default(),
            modifier: 0,
        }
    }

    /// An expression that always yields `value`.
    pub fn constant(value: i64) -> Self {
        Self {
            count: 0,
            sides: 0,
            scale: Scale::default(),
            modifier: value,
        }
    }

    /// Replace the scaling.
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Replace the flat modifier.
    pub fn with_modifier(mut self, modifier: i64) -> Self {
        self.modifier = modifier;
        self
    }

    /// Returns true if no dice are rolled.
    pub fn is_constant(&self) -> bool {
        self.count == 0
    }

    fn adjust(&self, sum: i64) -> i64 {
        if self.is_constant() {
            return self.modifier;
        }
        self.scale.apply(sum).saturating_add(self.modifier)
    }

    /// Returns true if count, sides and scale are within the parse limits.
    pub fn is_within_limits(&self) -> bool {
        let factor = match self.scale {
            Scale::Multiply(n) | Scale::Divide(n) => n,
        };
        self.count <= MAX_DICE && self.sides <= MAX_SIDES && factor <= MAX_SCALE
    }

    /// Roll the expression.
    pub fn roll<R: DiceRoller + ?Sized>(&self, roller: &mut R) -> i64 {
        let sum = (0..self.count)
            .map(|_| i64::from(roller.roll_die(self.sides)))
            .fold(0i64, i64::saturating_add);
        self.adjust(sum)
    }

    /// Roll the expression, raising any result below `floor` to `floor`.
    pub fn roll_at_least<R: DiceRoller + ?Sized>(&self, roller: &mut R, floor: i64) -> i64 {
        self.roll(roller).max(floor)
    }

    /// The smallest possible result.
    pub fn min(&self) -> i64 {
        self.adjust(i64::from(self.count))
    }

    /// The largest possible result.
    pub fn max(&self) -> i64 {
        self.adjust(i64::from(self.count).saturating_mul(i64::from(self.sides)))
    }

    /// The expected value of a roll.
    ///
    /// Exact for expressions within the parse limits. A divided expression
    /// beyond them is approximated from the raw mean.
    pub fn mean(&self) -> f64 {
        if self.is_constant() {
            return self.modifier as f64;
        }
        let raw = f64::from(self.count) * (f64::from(self.sides) + 1.0) / 2.0;
        match self.scale {
            Scale::Multiply(n) => raw * f64::from(n) + self.modifier as f64,
            Scale::Divide(n) if !self.is_within_limits() => {
                let n = f64::from(n);
                (raw - 1.0) / n - (n - 1.0) / (2.0 * n) + 1.0 + self.modifier as f64
            }
            Scale::Divide(_) => self
                .sum_distribution()
                .into_iter()
                .enumerate()
                .map(|(sum, p)| p * self.adjust(sum as i64) as f64)
                .sum(),
        }
    }

    /// Probability of each raw dice sum, indexed by the sum itself.
    fn sum_distribution(&self) -> Vec<f64> {
        let sides = self.sides as usize;
        let face = 1.0 / f64::from(self.sides);
        let mut dist = vec![1.0];
        for _ in 0..self.count {
            let mut next = vec![0.0; dist.len() + sides];
            for (sum, p) in dist.iter().enumerate() {
                for roll in 1..=sides {
                    next[sum + roll] += p * face;
                }
            }
            dist = next;
        }
        dist
    }
}

fn digits(text: &str, source: &str) -> DiceResult<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DiceError::InvalidExpression(source.to_string()));
    }
    text.parse()
        .map_err(|_| DiceError::InvalidExpression(source.to_string()))
}

/// Split `text` after its leading run of ASCII digits.
fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

impl FromStr for DiceExpr {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        let text = s.trim().to_ascii_lowercase();
        let invalid = || DiceError::InvalidExpression(s.to_string());

        if let Ok(value) = text.parse::<i64>() {
            return Ok(Self::constant(value));
        }

        let (count, rest) = text.split_once('d').ok_or_else(invalid)?;
        let count = if count.is_empty() { 1 } else { digits(count, s)? };
        if count == 0 {
            return Err(invalid());
        }

        let (sides, mut rest) = split_digits(rest);
        let sides = digits(sides, s)?;
        if sides == 0 {
            return Err(DiceError::ZeroSides(s.to_string()));
        }

        let mut scale = Scale::default();
        if let Some(op) = rest.chars().next().filter(|c| matches!(c, 'x' | '/')) {
            let (factor, tail) = split_digits(&rest[1..]);
            let factor = digits(factor, s)?;
            if factor == 0 {
                return Err(DiceError::ZeroScale(s.to_string()));
            }
            scale = if op == 'x' {
                Scale::Multiply(factor)
            } else {
                Scale::Divide(factor)
            };
            rest = tail;
        }

        let modifier = if rest.is_empty() {
            0
        } else if let Some(add) = rest.strip_prefix('+') {
            i64::from(digits(add, s)?)
        } else if let Some(sub) = rest.strip_prefix('-') {
            -i64::from(digits(sub, s)?)
        } else {
            return Err(invalid());
        };

        let parsed = Self {
            count,
            sides,
            scale,
            modifier,
        };
        if !parsed.is_within_limits() {
            return Err(DiceError::TooLarge(s.to_string()));
        }
        Ok(parsed)
    }
}

impl TryFrom<String> for DiceExpr {
    type Error = DiceError;

    fn try_from(value: String) -> DiceResult<Self> {
        value.parse()
    }
}

impl From<DiceExpr> for String {
    fn from(value: DiceExpr) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_constant() {
            return write!(f, "{}", self.modifier);
        }
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.scale {
            Scale::Multiply(1) => {}
            Scale::Multiply(n) => write!(f, "x{n}")?,
            Scale::Divide(n) => write!(f, "/{n}")?,
        }
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}
