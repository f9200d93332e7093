/// A raw TEMP_H_LIMIT/TEMP_L_LIMIT value. Zero disables the threshold; anything else
/// encodes `(raw - 63) * 0.64` °C.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Default, Clone, Copy)]
pub struct Limit(u8);

/// Low and high thresholds, in that order.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy)]
pub struct Limits(pub(crate) Limit, pub(crate) Limit);

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LimitError {
    /// The requested temperature can't be encoded in a threshold register.
    OutOfRange,
    /// Both thresholds are enabled and the low one is not below the high one.
    LowExceedsHigh,
}

impl Limit {
    const OFFSET: i16 = 63;
    const CELSIUS_PER_STEP: f64 = 0.64;

    /// A threshold that never trips.
    pub const DISABLED: Limit = Limit(0);

    pub const fn from_raw(raw: u8) -> Self {
        Limit(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_enabled(self) -> bool {
        self.0 != 0
    }

    /// Threshold in degrees Celsius, or `None` when disabled.
    pub fn celsius(self) -> Option<f64> {
        if self.is_enabled() {
            Some(f64::from(i16::from(self.0) - Self::OFFSET) * Self::CELSIUS_PER_STEP)
        } else {
            None
        }
    }
}

impl TryFrom<f64> for Limit {
    type Error = LimitError;

    /// Rounds to the nearest 0.64 °C step. Representable range is -39.68 °C to 122.88 °C.
    fn try_from(celsius: f64) -> Result<Self, Self::Error> {
        let steps = celsius / Self::CELSIUS_PER_STEP + f64::from(Self::OFFSET);

        if (0.5..255.5).contains(&steps) {
            Ok(Limit((steps + 0.5) as u8))
        } else {
            Err(LimitError::OutOfRange)
        }
    }
}

impl Limits {
    pub const fn low(&self) -> Limit {
        self.0
    }

    pub const fn high(&self) -> Limit {
        self.1
    }
}

impl TryFrom<(Limit, Limit)> for Limits {
    type Error = LimitError;

    fn try_from(val: (Limit, Limit)) -> Result<Self, Self::Error> {
        if val.0.is_enabled() && val.1.is_enabled() && val.0 >= val.1 {
            Err(LimitError::LowExceedsHigh)
        } else {
            Ok(Limits(val.0, val.1))
        }
    }
}

impl TryFrom<(f64, f64)> for Limits {
    type Error = LimitError;

    fn try_from(val: (f64, f64)) -> Result<Self, Self::Error> {
        (Limit::try_from(val.0)?, Limit::try_from(val.1)?).try_into()
    }
}

impl From<Limits> for (Limit, Limit) {
    fn from(limits: Limits) -> (Limit, Limit) {
        (limits.0, limits.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_has_no_temperature() {
        assert_eq!(Limit::DISABLED.celsius(), None);
        assert!(!Limit::from_raw(0).is_enabled());
    }

    #[test]
    fn raw_to_celsius() {
        assert_eq!(Limit::from_raw(63).celsius(), Some(0.0));
        assert_eq!(Limit::from_raw(1).celsius(), Some(-62.0 * 0.64));
        assert_eq!(Limit::from_raw(255).celsius(), Some(192.0 * 0.64));
    }

    #[test]
    fn celsius_to_raw() {
        assert_eq!(Limit::try_from(0.0), Ok(Limit::from_raw(63)));
        assert_eq!(Limit::try_from(25.0), Ok(Limit::from_raw(102)));
        assert_eq!(Limit::try_from(-10.0), Ok(Limit::from_raw(47)));
        assert_eq!(Limit::try_from(122.88), Ok(Limit::from_raw(255)));
        assert_eq!(Limit::try_from(-39.68), Ok(Limit::from_raw(1)));
    }

    #[test]
    fn celsius_out_of_range() {
        assert_eq!(Limit::try_from(123.3), Err(LimitError::OutOfRange));
        assert_eq!(Limit::try_from(-40.1), Err(LimitError::OutOfRange));
        assert_eq!(Limit::try_from(f64::NAN), Err(LimitError::OutOfRange));
    }

    #[test]
    fn low_must_be_below_high() {
        let lo = Limit::from_raw(100);
        let hi = Limit::from_raw(110);

        assert_eq!(Limits::try_from((lo, hi)), Ok(Limits(lo, hi)));
        assert_eq!(Limits::try_from((hi, lo)), Err(LimitError::LowExceedsHigh));
        assert_eq!(Limits::try_from((lo, lo)), Err(LimitError::LowExceedsHigh));
        assert_eq!(
            Limits::try_from((Limit::DISABLED, lo)),
            Ok(Limits(Limit::DISABLED, lo))
        );
        assert_eq!(
            Limits::try_from((hi, Limit::DISABLED)),
            Ok(Limits(hi, Limit::DISABLED))
        );
    }

    #[test]
    fn limits_from_celsius() {
        let limits = Limits::try_from((20.0, 30.0)).unwrap();

        assert_eq!(limits.low(), Limit::from_raw(94));
        assert_eq!(limits.high(), Limit::from_raw(110));
        assert_eq!(Limits::try_from((30.0, 20.0)), Err(LimitError::LowExceedsHigh));
        assert_eq!(Limits::try_from((20.0, 200.0)), Err(LimitError::OutOfRange));
    }
}
