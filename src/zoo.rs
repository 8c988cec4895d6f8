//! A small object modeling exercise: an animal trait, a cat with a validated paw count and an
//! ordered point that only accepts a positive `x`.

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZooError {
    #[error("the animal is not born yet (age {age})")]
    NotBorn { age: i64 },
    #[error("age {age} is out of range")]
    AgeOutOfRange { age: i64 },
    #[error("a cat without paws is not allowed")]
    NoPaws,
    #[error("x must be greater than zero, got {x}")]
    NonPositiveX { x: i64 },
}

/// Picks the Russian plural form for `n`: `one` for 1, 21, 31.., `few` for 2-4, 22-24.. and `many`
/// for everything else, including 11-14.
///
/// This is the standard grammar rule, so 21 years reads "год" and 4 paws read "лапки".
pub fn plural_ru(
    n: u64,
    one: &'static str,
    few: &'static str,
    many: &'static str,
) -> &'static str {
    match (n % 10, n % 100) {
        (1, rem) if rem != 11 => one,
        (2..=4, rem) if !(12..=14).contains(&rem) => few,
        _ => many,
    }
}

pub trait Animal {
    fn name(&self) -> &str;

    fn age(&self) -> u32;

    fn make_sound(&self) -> &'static str;

    fn movement(&self) -> &'static str;

    fn info(&self) -> String {
        let years = plural_ru(self.age() as u64, "год", "года", "лет");
        format!("{} живет уже {} {}", self.name(), self.age(), years)
    }
}

const DEFAULT_PAWS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    name: String,
    age: u32,
    paws_count: u32,
}

impl Cat {
    pub fn new(name: impl Into<String>, age: i64) -> Result<Self, ZooError> {
        if age < 0 {
            return Err(ZooError::NotBorn { age });
        }
        let age = u32::try_from(age).map_err(|_| ZooError::AgeOutOfRange { age })?;

        Ok(Self {
            name: name.into(),
            age,
            paws_count: DEFAULT_PAWS,
        })
    }

    pub fn paws_count(&self) -> u32 {
        self.paws_count
    }

    /// Zero paws is rejected. Any other count is accepted, but anything other than four is
    /// logged as a warning.
    pub fn set_paws_count(&mut self, paws_count: u32) -> Result<(), ZooError> {
        if paws_count == 0 {
            return Err(ZooError::NoPaws);
        }

        let paws = Self::paws_text(paws_count);
        if paws_count > DEFAULT_PAWS {
            warn!(cat = %self.name, paws_count, "a cat with {paws_count} {paws}? really?");
        } else if paws_count < DEFAULT_PAWS {
            warn!(cat = %self.name, paws_count, "the cat is left with only {paws_count} {paws}");
        }

        self.paws_count = paws_count;
        Ok(())
    }

    pub fn paws_text(paws_count: u32) -> &'static str {
        plural_ru(paws_count as u64, "лапка", "лапки", "лапок")
    }
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn make_sound(&self) -> &'static str {
        "МЯУ"
    }

    fn movement(&self) -> &'static str {
        "Котик скачет"
    }
}

/// A point compared lexicographically by `x`, then `y`, then `z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositivePoint {
    x: i64,
    y: i64,
    z: i64,
}

impl PositivePoint {
    pub fn new(x: i64, y: i64, z: i64) -> Result<Self, ZooError> {
        if x <= 0 {
            return Err(ZooError::NonPositiveX { x });
        }

        Ok(Self { x, y, z })
    }

    /// Same as [`PositivePoint::new`] with `z` set to zero.
    pub fn new_xy(x: i64, y: i64) -> Result<Self, ZooError> {
        Self::new(x, y, 0)
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn z(&self) -> i64 {
        self.z
    }
}
