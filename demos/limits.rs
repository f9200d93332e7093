use cfg_if::cfg_if;
use std::io::{stdout, Write};

cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        use crossterm::{cursor, ExecutableCommand};
        use linux_embedded_hal::I2cdev;
        use stts22h::*;
        use argh::FromArgs;
        use eyre::{eyre, Result};
        use std::convert::TryInto;
        use std::thread::sleep;
        use std::time::Duration;

        #[derive(FromArgs)]
        #[argh(description = "watch the stts22h threshold flags")]
        struct InputArgs {
            #[argh(positional)]
            bus: String,
            #[argh(positional, from_str_fn(from_base_16))]
            addr: u8,
        }

        fn from_base_16(val: &str) -> Result<u8, String> {
            let no_prefix = val.trim_start_matches("0x");

            match u8::from_str_radix(no_prefix, 16) {
                Ok(v) => Ok(v),
                Err(_) => {
                    Err("Unable to convert address from base 16".into())
                }
            }
        }
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn main() -> Result<()> {
    let args: InputArgs = argh::from_env();

    let i2c: I2cdev = I2cdev::new(args.bus)?;
    let mut stts = Stts22h::probe(i2c, args.addr).map_err(|e| eyre!("{}", e))?;

    stts.set_block_data_update(true)
        .map_err(|e| eyre!("failed to set block data update: {}", e))?;
    sleep(Duration::from_millis(50)); // One 25 Hz conversion.

    let temp = stts
        .read_temperature_celsius()
        .map_err(|e| eyre!("failed to read a temperature: {}", e))?;

    let limits: Limits = (temp - 1.0, temp + 2.0)
        .try_into()
        .map_err(|e| eyre!("temperature out of threshold range: {:?}", e))?;
    stts.set_limits(limits)
        .map_err(|e| eyre!("failed to set temperature sensor limits: {}", e))?;

    // Thresholds are quantized to 0.64 C, so report what the chip will actually compare against.
    let temp_lo = limits.low().celsius().unwrap_or(f64::NEG_INFINITY);
    let temp_hi = limits.high().celsius().unwrap_or(f64::INFINITY);

    // Flags latch until STATUS is read; start from a clean slate.
    stts.status().map_err(|e| eyre!("failed to read status: {}", e))?;

    println!(
        "Target temp is {:.2} C! Press your finger against the sensor!",
        temp_hi
    );

    let mut stdout = stdout();

    loop {
        let temp = stts
            .temperature()
            .map_err(|e| eyre!("failed to read a temperature: {}", e))?;
        let status = stts.status().map_err(|e| eyre!("failed to read status: {}", e))?;

        stdout.execute(cursor::SavePosition)?;
        stdout.write_all(format!("Current temp is {} C.\r", temp).as_bytes())?;
        stdout.execute(cursor::RestorePosition)?;
        stdout.flush()?;

        sleep(Duration::from_millis(40)); // One 25 Hz conversion.

        if status.over_high {
            break;
        }
    }

    println!("\nRelease finger from sensor! Waiting for {:.2} C!", temp_lo);

    loop {
        let temp = stts
            .temperature()
            .map_err(|e| eyre!("failed to read a temperature: {}", e))?;
        let status = stts.status().map_err(|e| eyre!("failed to read status: {}", e))?;

        stdout.execute(cursor::SavePosition)?;
        stdout.write_all(format!("Current temp is {} C.\r", temp).as_bytes())?;
        stdout.execute(cursor::RestorePosition)?;
        stdout.flush()?;

        sleep(Duration::from_millis(40));

        if status.under_low {
            break;
        }
    }

    println!("\nLimits demo done!");

    stts.set_limits(Limits::default())
        .map_err(|e| eyre!("failed to clear temperature sensor limits: {}", e))?;
    let _i2c_old = stts.free();

    Ok(())
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn main() {}
