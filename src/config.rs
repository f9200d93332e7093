//! Register map and bit-field layouts.

use modular_bitfield::prelude::*;

/// Register addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    WhoAmI,
    TempHighLimit,
    TempLowLimit,
    Control,
    Status,
    TempLow,
    TempHigh,
    SoftwareReset,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        match reg {
            Register::WhoAmI => 0x01,
            Register::TempHighLimit => 0x02,
            Register::TempLowLimit => 0x03,
            Register::Control => 0x04,
            Register::Status => 0x05,
            Register::TempLow => 0x06,
            Register::TempHigh => 0x07,
            Register::SoftwareReset => 0x0C,
        }
    }
}

/// What WHOAMI reads back on an STTS22H.
pub const DEVICE_ID: u8 = 0xA0;

/// Averaging window, which fixes the output data rate while free-running.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(BitfieldSpecifier, Debug, Clone, Copy, PartialEq, Eq)]
#[bits = 2]
pub enum OutputDataRate {
    Hz25 = 0b00,
    Hz50 = 0b01,
    Hz100 = 0b10,
    Hz200 = 0b11,
}

impl OutputDataRate {
    pub const ALL: [OutputDataRate; 4] = [
        OutputDataRate::Hz25,
        OutputDataRate::Hz50,
        OutputDataRate::Hz100,
        OutputDataRate::Hz200,
    ];

    pub const fn hertz(self) -> u16 {
        match self {
            OutputDataRate::Hz25 => 25,
            OutputDataRate::Hz50 => 50,
            OutputDataRate::Hz100 => 100,
            OutputDataRate::Hz200 => 200,
        }
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    /// Idle until [`crate::Stts22h::trigger_one_shot`] requests a single conversion.
    OneShot,
    /// Free-run at the configured [`OutputDataRate`].
    Continuous,
}

/** CTRL register. The driver keeps a copy of this as its view of the chip's configuration.

`one_shot` is cleared by the chip once the conversion finishes, so the driver never keeps it
set in its copy. */
#[bitfield]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub one_shot: bool,
    pub time_out_dis: bool,
    pub freerun: bool,
    pub if_add_inc: bool,
    #[bits = 2]
    pub avg: OutputDataRate,
    pub bdu: bool,
    pub low_odr_start: bool,
}

impl Control {
    /// CTRL contents after power-on or a software reset.
    pub fn power_on() -> Self {
        Control::from(0x00)
    }

    pub fn operating_mode(&self) -> OperatingMode {
        if self.freerun() {
            OperatingMode::Continuous
        } else {
            OperatingMode::OneShot
        }
    }

    pub fn output_data_rate(&self) -> OutputDataRate {
        self.avg()
    }

    pub fn low_power(&self) -> bool {
        self.low_odr_start()
    }

    pub fn block_data_update(&self) -> bool {
        self.bdu()
    }

    /// Whether the chip converts on its own, either free-running or in 1 Hz low-power mode.
    pub fn is_running(&self) -> bool {
        self.freerun() || self.low_odr_start()
    }
}

/// STATUS register. Reading it clears `over_thh` and `under_thl` on the chip.
#[bitfield]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub busy: bool,
    pub over_thh: bool,
    pub under_thl: bool,
    #[skip]
    __: B5,
}

/// SOFTWARE_RESET register.
#[bitfield]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftwareReset {
    #[skip]
    __0: B1,
    pub sw_reset: bool,
    #[skip]
    __1: B4,
    pub low_odr_enable: bool,
    #[skip]
    __2: B1,
}

/// Snapshot of STATUS.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFlags {
    /// A conversion is in progress.
    pub busy: bool,
    /// Temperature went above TEMP_H_LIMIT since the last STATUS read.
    pub over_high: bool,
    /// Temperature went below TEMP_L_LIMIT since the last STATUS read.
    pub under_low: bool,
}

impl StatusFlags {
    /// The chip has no dedicated data-ready flag; a sample is ready once it stops being busy.
    pub fn data_ready(&self) -> bool {
        !self.busy
    }
}

impl From<Status> for StatusFlags {
    fn from(status: Status) -> Self {
        StatusFlags {
            busy: status.busy(),
            over_high: status.over_thh(),
            under_low: status.under_thl(),
        }
    }
}

impl From<u8> for StatusFlags {
    fn from(raw: u8) -> Self {
        Status::from(raw).into()
    }
}
