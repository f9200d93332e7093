/*! `stts22h` is an [`embedded_hal`](https://github.com/rust-embedded/embedded-hal) crate for
accessing [ST STTS22H](https://www.st.com/en/mems-and-sensors/stts22h.html) temperature sensors
over an I2C bus.

The STTS22H is driven through a handful of 8-bit registers:

* CTRL, which selects one-shot or free-running conversion, the output data rate, low-power
  (1 Hz) mode, block data update and address auto-increment ([`Control`]).
* STATUS, which reports whether a conversion is in progress and whether the temperature crossed
  a threshold ([`StatusFlags`]).
* TEMP_L_OUT/TEMP_H_OUT, a little-endian `i16` in units of 0.01 °C ([`Temperature`]).
* TEMP_H_LIMIT/TEMP_L_LIMIT, the alarm thresholds ([`Limits`]).
* SOFTWARE_RESET.

The driver keeps a copy of CTRL so that it can reject requests that make no sense in the
current mode without touching the bus. Every change to CTRL is still a read-modify-write of the
whole register, and the copy is only updated once the write has gone through.

Nothing in this crate waits. After [`Stts22h::reset`] or [`Stts22h::trigger_one_shot`], poll
[`Stts22h::is_busy`] (or sleep) before reading a temperature; a read issued too early returns
whatever the output registers held, which is not an error.

A [`Stts22h`] takes its bus handle by value; pass `&mut bus` (or a bus-sharing proxy) to put
several sensors on one bus. The driver does no locking, so callers on
multi-threaded hosts must serialize access themselves.

## Features

* `defmt`: derive `defmt::Format` on public types and log register traffic through `defmt`.
* `log`: log register traffic through the `log` crate. */
#![doc(html_root_url = "https://docs.rs/stts22h/0.1.0")]
#![no_std]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

use core::fmt;
use core::result::Result;
use embedded_hal::i2c::I2c;

mod macros;
use macros::{debug, trace};

mod addr;
mod config;
mod limit;
mod temp;

pub use addr::AddrPin;
pub use config::*;
pub use limit::*;
pub use temp::Temperature;

/** A struct for describing how to read and write an STTS22H temperature sensor's registers via an
[`embedded_hal`] I2C implementation.

Internally, the struct mirrors the CTRL register so that mode checks don't cost a bus
transaction. The mirror starts out at the power-on value; call [`Stts22h::sync`] if the chip may
already have been configured by someone else. */
pub struct Stts22h<T>
where
    T: I2c,
{
    ctx: T,
    address: u8,
    ctrl: Control,
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq)]
/// Enum for describing possible error conditions when reading/writing an STTS22H temperature sensor.
pub enum Stts22hError<E> {
    /// The requested bus address does not fit in 7 bits.
    InvalidAddress(u8),
    /** The request does not make sense in the current operating mode, e.g. triggering a one-shot
    conversion while the chip is free-running. No bus transaction was issued. */
    InvalidState,
    /// WHOAMI did not read back as an STTS22H. Contains the value that was read.
    WrongDeviceId(u8),
    /** A register transaction failed. Contains the error propagated from the [`embedded_hal`]
    implementation. */
    Bus(E),
}

/// Shorthand for the error type of a [`Stts22h`] on bus `T`.
pub type Error<T> = Stts22hError<<T as embedded_hal::i2c::ErrorType>::Error>;

impl<E> fmt::Display for Stts22hError<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stts22hError::InvalidAddress(addr) => {
                write!(f, "address {:#04x} is not a 7-bit I2C address", addr)
            }
            Stts22hError::InvalidState => {
                write!(f, "operation not allowed in the current operating mode")
            }
            Stts22hError::WrongDeviceId(id) => {
                write!(f, "expected device id {:#04x}, read {:#04x}", DEVICE_ID, id)
            }
            Stts22hError::Bus(e) => write!(f, "I2C transaction failed: {:?}", e),
        }
    }
}

impl<T> Stts22h<T>
where
    T: I2c,
{
    /// Wrap a bus handle. No bus traffic happens until a method is called.
    pub fn new(ctx: T, address: u8) -> Result<Self, Error<T>> {
        if address > addr::MAX_ADDRESS {
            return Err(Stts22hError::InvalidAddress(address));
        }

        Ok(Stts22h {
            ctx,
            address,
            ctrl: Control::power_on(),
        })
    }

    pub fn with_addr_pin(ctx: T, pin: AddrPin) -> Self {
        Stts22h {
            ctx,
            address: pin.into(),
            ctrl: Control::power_on(),
        }
    }

    /// Use the address of a board with ADDR pulled up through 15 kΩ (`0x3C`).
    pub fn with_default_address(ctx: T) -> Self {
        Self::with_addr_pin(ctx, AddrPin::default())
    }

    /** Wrap a bus handle, check that an STTS22H answers at `address` and start it
    free-running at the power-on output data rate.

    On failure the bus handle is dropped; pass `&mut bus` if you need it back. */
    pub fn probe(ctx: T, address: u8) -> Result<Self, Error<T>> {
        let mut stts = Self::new(ctx, address)?;

        let id = stts.device_id()?;
        if id != DEVICE_ID {
            return Err(Stts22hError::WrongDeviceId(id));
        }

        stts.set_operating_mode(OperatingMode::Continuous)?;
        Ok(stts)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// The driver's copy of CTRL.
    pub fn control(&self) -> Control {
        self.ctrl
    }

    pub fn operating_mode(&self) -> OperatingMode {
        self.ctrl.operating_mode()
    }

    pub fn device_id(&mut self) -> Result<u8, Error<T>> {
        self.read_reg(Register::WhoAmI)
    }

    /// Replace the driver's copy of CTRL with what the chip currently holds.
    pub fn sync(&mut self) -> Result<Control, Error<T>> {
        let ctrl = Control::from(self.read_reg(Register::Control)?).with_one_shot(false);

        self.ctrl = ctrl;
        Ok(ctrl)
    }

    /** Pulse SW_RESET. Returns as soon as the writes complete; wait for the chip to settle (or
    until [`Stts22h::is_busy`] reads `false`) before issuing further register operations.

    On success the copy of CTRL goes back to the power-on value without reading the chip, since
    CTRL can't be trusted until the reset has settled. Call [`Stts22h::sync`] once it has if the
    copy must match the chip exactly. */
    pub fn reset(&mut self) -> Result<(), Error<T>> {
        let pulse = SoftwareReset::new().with_sw_reset(true);

        self.write_reg(Register::SoftwareReset, pulse.into())?;
        self.write_reg(Register::SoftwareReset, SoftwareReset::new().into())?;
        self.ctrl = Control::power_on();

        debug!("stts22h: reset {:#x}", self.address);
        Ok(())
    }

    /// Switch between one-shot and free-running conversion. Either mode leaves low-power mode.
    pub fn set_operating_mode(&mut self, mode: OperatingMode) -> Result<(), Error<T>> {
        let low_power = self.ctrl.low_power();

        self.leave_low_power(low_power, |ctrl| {
            ctrl.set_freerun(mode == OperatingMode::Continuous)
        })
    }

    pub fn set_output_data_rate(&mut self, rate: OutputDataRate) -> Result<(), Error<T>> {
        self.modify_control(|ctrl| ctrl.set_avg(rate))
    }

    /** Enter or leave 1 Hz low-power mode. Entering it stops free-running, so
    [`Stts22h::operating_mode`] reads [`OperatingMode::OneShot`] afterwards, although
    [`Stts22h::trigger_one_shot`] stays unavailable until low-power mode is left. */
    pub fn set_low_power(&mut self, enabled: bool) -> Result<(), Error<T>> {
        let low_odr = SoftwareReset::new().with_low_odr_enable(true);

        if enabled {
            self.write_reg(Register::SoftwareReset, low_odr.into())?;
            self.modify_control(|ctrl| {
                ctrl.set_freerun(false);
                ctrl.set_low_odr_start(true);
            })
        } else {
            self.leave_low_power(true, |_| ())
        }
    }

    pub fn set_block_data_update(&mut self, enabled: bool) -> Result<(), Error<T>> {
        self.modify_control(|ctrl| ctrl.set_bdu(enabled))
    }

    pub fn set_auto_increment(&mut self, enabled: bool) -> Result<(), Error<T>> {
        self.modify_control(|ctrl| ctrl.set_if_add_inc(enabled))
    }

    /** Start a single conversion. Only valid while the chip is idle in one-shot mode; otherwise
    fails with [`Stts22hError::InvalidState`] without touching the bus. */
    pub fn trigger_one_shot(&mut self) -> Result<(), Error<T>> {
        if self.ctrl.is_running() {
            return Err(Stts22hError::InvalidState);
        }

        self.modify_control(|ctrl| ctrl.set_one_shot(true))
    }

    /// Read STATUS. This clears the threshold flags on the chip.
    pub fn status(&mut self) -> Result<StatusFlags, Error<T>> {
        self.read_reg(Register::Status).map(StatusFlags::from)
    }

    pub fn is_busy(&mut self) -> Result<bool, Error<T>> {
        Ok(self.status()?.busy)
    }

    pub fn is_data_ready(&mut self) -> Result<bool, Error<T>> {
        Ok(self.status()?.data_ready())
    }

    /** Read the output registers. Always hits the bus and never waits: if a conversion is still
    running the previous sample comes back. */
    pub fn temperature(&mut self) -> Result<Temperature, Error<T>> {
        let lo = self.read_reg(Register::TempLow)?;
        let hi = self.read_reg(Register::TempHigh)?;

        Ok(Temperature::from_le_bytes([lo, hi]))
    }

    pub fn read_temperature_celsius(&mut self) -> Result<f64, Error<T>> {
        self.temperature().map(Temperature::celsius)
    }

    pub fn high_limit(&mut self) -> Result<Limit, Error<T>> {
        self.read_reg(Register::TempHighLimit).map(Limit::from_raw)
    }

    pub fn set_high_limit(&mut self, limit: Limit) -> Result<(), Error<T>> {
        self.write_reg(Register::TempHighLimit, limit.raw())
    }

    pub fn low_limit(&mut self) -> Result<Limit, Error<T>> {
        self.read_reg(Register::TempLowLimit).map(Limit::from_raw)
    }

    pub fn set_low_limit(&mut self, limit: Limit) -> Result<(), Error<T>> {
        self.write_reg(Register::TempLowLimit, limit.raw())
    }

    /// Read both thresholds as stored on the chip, without checking their order.
    pub fn limits(&mut self) -> Result<Limits, Error<T>> {
        let low = self.low_limit()?;
        let high = self.high_limit()?;

        Ok(Limits(low, high))
    }

    pub fn set_limits(&mut self, limits: Limits) -> Result<(), Error<T>> {
        self.set_low_limit(limits.low())?;
        self.set_high_limit(limits.high())
    }

    pub fn free(self) -> T {
        self.ctx
    }

    /* Clear LOW_ODR_START, then apply `f`. When `clear_enable` is set, LOW_ODR_ENABLE is dropped
    first so the CTRL write stays the last transaction and the copy is committed last. */
    fn leave_low_power<F>(&mut self, clear_enable: bool, f: F) -> Result<(), Error<T>>
    where
        F: FnOnce(&mut Control),
    {
        if clear_enable {
            self.write_reg(Register::SoftwareReset, SoftwareReset::new().into())?;
        }

        self.modify_control(|ctrl| {
            ctrl.set_low_odr_start(false);
            f(ctrl);
        })
    }

    /* All CTRL changes go through here: read the whole register, apply `f`, write the whole
    register back, and only then update the copy. `one_shot` is masked on the way in so a
    pending trigger never gets replayed, and on the way out since the chip clears it. */
    fn modify_control<F>(&mut self, f: F) -> Result<(), Error<T>>
    where
        F: FnOnce(&mut Control),
    {
        let mut ctrl = Control::from(self.read_reg(Register::Control)?).with_one_shot(false);

        f(&mut ctrl);
        self.write_reg(Register::Control, ctrl.into())?;

        ctrl.set_one_shot(false);
        self.ctrl = ctrl;

        debug!("stts22h: ctrl <- {:#x}", u8::from(ctrl));
        Ok(())
    }

    fn read_reg(&mut self, reg: Register) -> Result<u8, Error<T>> {
        let mut buf = [0u8; 1];
        let ptr = u8::from(reg);

        self.ctx
            .write_read(self.address, &[ptr], &mut buf)
            .map_err(Stts22hError::Bus)?;

        trace!("stts22h: read {:#x} -> {:#x}", ptr, buf[0]);
        Ok(buf[0])
    }

    fn write_reg(&mut self, reg: Register, val: u8) -> Result<(), Error<T>> {
        let ptr = u8::from(reg);

        self.ctx
            .write(self.address, &[ptr, val])
            .map_err(Stts22hError::Bus)?;

        trace!("stts22h: write {:#x} <- {:#x}", ptr, val);
        Ok(())
    }
}
