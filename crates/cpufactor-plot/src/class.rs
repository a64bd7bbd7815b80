//! Color classes for factors.

use cpufactor_core::Factor;

/// Color class of a file's factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorClass {
    /// Factor of exactly 1
    Unit,
    /// Integer factor of 2 or more
    Multiple,
    /// Anything below 1: half-core files and the empty-file sentinel
    Half,
}

impl FactorClass {
    pub const ALL: [FactorClass; 3] = [Self::Unit, Self::Multiple, Self::Half];

    pub fn of(factor: Factor) -> Self {
        let value = factor.value();
        if value == 1.0 {
            Self::Unit
        } else if value > 1.0 {
            Self::Multiple
        } else {
            Self::Half
        }
    }

    /// CSS color used by the HTML chart.
    pub fn css_color(&self) -> &'static str {
        match self {
            Self::Unit => "rgb(222,0,0)",
            Self::Multiple => "rgb(0,222,0)",
            Self::Half => "rgb(0,0,222)",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unit => "factor 1",
            Self::Multiple => "factor 2+",
            Self::Half => "factor .5",
        }
    }
}
