use crate::board::DrawingId;
use crate::error::{ConfigError, Result};
use crate::math::{MM_PER_INCH, NM_PER_MM};

/// Smallest size accepted from a user, in the chosen unit.
pub const MIN_USER_SIZE: f64 = 0.01;

/// Largest size accepted from a user, in the chosen unit.
pub const MAX_USER_SIZE: f64 = 1000.0;

/// Length unit of user-entered sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Millimetres,
    Inches,
}

impl Units {
    /// Board length units per one of this unit.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Millimetres => NM_PER_MM,
            Self::Inches => NM_PER_MM * MM_PER_INCH,
        }
    }

    /// Converts a value in this unit to millimetres.
    #[must_use]
    pub fn to_mm(self, value: f64) -> f64 {
        match self {
            Self::Millimetres => value,
            Self::Inches => value * MM_PER_INCH,
        }
    }
}

/// How a corner is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerMode {
    /// Circular arc tangent to both segments.
    #[default]
    Fillet,
    /// Straight cut between points at equal distance from the corner.
    Chamfer,
}

/// Which edge drawings take part in a pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every drawing on the edge layer.
    #[default]
    All,
    /// Only drawings whose `selected` flag is set.
    Selected,
    /// Only the listed drawings.
    Only(Vec<DrawingId>),
}

/// Parameters of one corner treatment pass.
///
/// `size` is the fillet radius or chamfer leg length in board units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilletParams {
    pub size: i64,
    pub mode: CornerMode,
    pub selection: Selection,
}

impl Default for FilletParams {
    fn default() -> Self {
        Self::fillet(2_000_000)
    }
}

impl FilletParams {
    /// Creates fillet parameters for all edge drawings.
    #[must_use]
    pub fn fillet(radius: i64) -> Self {
        Self {
            size: radius,
            mode: CornerMode::Fillet,
            selection: Selection::All,
        }
    }

    /// Creates chamfer parameters for all edge drawings.
    #[must_use]
    pub fn chamfer(distance: i64) -> Self {
        Self {
            size: distance,
            mode: CornerMode::Chamfer,
            selection: Selection::All,
        }
    }

    /// Creates parameters from a user-entered size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SizeOutOfRange`] if `value` falls outside
    /// `MIN_USER_SIZE..=MAX_USER_SIZE` in the chosen unit.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_user(value: f64, units: Units, mode: CornerMode) -> Result<Self> {
        if !(MIN_USER_SIZE..=MAX_USER_SIZE).contains(&value) {
            return Err(ConfigError::SizeOutOfRange {
                value,
                min: MIN_USER_SIZE,
                max: MAX_USER_SIZE,
            }
            .into());
        }
        Ok(Self {
            size: (value * units.multiplier()).round() as i64,
            mode,
            selection: Selection::All,
        })
    }

    /// Restricts the pass to a subset of drawings.
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Checks that the parameters can be applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveSize`] if the size is zero or negative.
    pub fn validate(&self) -> Result<()> {
        if self.size <= 0 {
            return Err(ConfigError::NonPositiveSize(self.size).into());
        }
        Ok(())
    }
}

/// Supplies corner treatment parameters to a pass.
///
/// Front ends (command line, dialogs, batch tools) implement this to hand
/// their collected settings to the outline processor.
pub trait ParameterSource {
    /// Returns the parameters for the next pass.
    fn params(&self) -> FilletParams;
}

impl ParameterSource for FilletParams {
    fn params(&self) -> FilletParams {
        self.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FilletError;

    #[test]
    fn millimetre_conversion() {
        let p = FilletParams::from_user(2.0, Units::Millimetres, CornerMode::Fillet).unwrap();
        assert_eq!(p.size, 2_000_000);
        assert_eq!(p.mode, CornerMode::Fillet);
    }

    #[test]
    fn inch_conversion() {
        let p = FilletParams::from_user(0.1, Units::Inches, CornerMode::Chamfer).unwrap();
        assert_eq!(p.size, 2_540_000);
        assert_eq!(p.mode, CornerMode::Chamfer);
    }

    #[test]
    fn out_of_range_user_size() {
        let err = FilletParams::from_user(0.001, Units::Millimetres, CornerMode::Fillet);
        assert!(matches!(
            err,
            Err(FilletError::Config(ConfigError::SizeOutOfRange { .. }))
        ));
        assert!(FilletParams::from_user(1000.5, Units::Inches, CornerMode::Fillet).is_err());
    }

    #[test]
    fn range_applies_in_chosen_unit() {
        let p = FilletParams::from_user(50.0, Units::Inches, CornerMode::Fillet).unwrap();
        assert_eq!(p.size, 1_270_000_000);
        assert!(FilletParams::from_user(0.005, Units::Inches, CornerMode::Fillet).is_err());
    }

    #[test]
    fn validate_rejects_non_positive() {
        assert!(FilletParams::fillet(0).validate().is_err());
        assert!(FilletParams::chamfer(-5).validate().is_err());
        assert!(FilletParams::default().validate().is_ok());
    }

    #[test]
    fn default_is_two_millimetre_fillet() {
        let p = FilletParams::default();
        assert_eq!(p.size, 2_000_000);
        assert_eq!(p.mode, CornerMode::Fillet);
        assert_eq!(p.selection, Selection::All);
    }

    #[test]
    fn parameter_source_hands_out_copy() {
        let source = FilletParams::chamfer(10).with_selection(Selection::Selected);
        let p = source.params();
        assert_eq!(p, source);
    }
}
