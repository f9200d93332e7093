use core::fmt;

/* Invariant: the wrapped value is exactly what the chip put in TEMP_H_OUT:TEMP_L_OUT,
no scaling or clamping applied. */

/// A temperature sample as read from the output registers. One count is 0.01 °C.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Default, Clone, Copy)]
pub struct Temperature(pub(crate) i16);

impl Temperature {
    /// Counts per degree Celsius.
    pub const COUNTS_PER_CELSIUS: f64 = 100.0;

    /// Wrap a raw two's-complement register value.
    pub const fn from_raw(raw: i16) -> Self {
        Temperature(raw)
    }

    /// Build a sample from the bytes of TEMP_L_OUT and TEMP_H_OUT, in that order.
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Temperature(i16::from_le_bytes(bytes))
    }

    /// The raw register value.
    pub const fn raw(self) -> i16 {
        self.0
    }

    /// Degrees Celsius.
    pub fn celsius(self) -> f64 {
        f64::from(self.0) / Self::COUNTS_PER_CELSIUS
    }
}

impl From<Temperature> for i16 {
    fn from(temp: Temperature) -> Self {
        temp.0
    }
}

impl From<Temperature> for f64 {
    fn from(temp: Temperature) -> Self {
        temp.celsius()
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();

        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
