/// Strapping of the STTS22H ADDR pin, which selects the 7-bit bus address.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddrPin {
    /// ADDR tied to VDD.
    Vdd,
    /// ADDR pulled up through 15 kΩ (default on most breakout boards).
    #[default]
    Pullup15k,
    /// ADDR pulled up through 56 kΩ.
    Pullup56k,
    /// ADDR tied to GND.
    Gnd,
}

impl From<AddrPin> for u8 {
    fn from(pin: AddrPin) -> Self {
        match pin {
            AddrPin::Vdd => 0x38,
            AddrPin::Pullup15k => 0x3C,
            AddrPin::Pullup56k => 0x3D,
            AddrPin::Gnd => 0x3F,
        }
    }
}

/// Largest address representable in 7 bits.
pub(crate) const MAX_ADDRESS: u8 = 0x7F;
