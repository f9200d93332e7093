use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        use linux_embedded_hal::I2cdev;
        use stts22h::*;
        use argh::FromArgs;
        // no_std crates don't have access to the Error trait. However, because stts22h crate
        // error types impl Display, we can use the eyre crate to ad-hoc convert our error types
        // to ones that impl Error via the eyre! macro.
        use eyre::{eyre, Result};
        use std::thread::sleep;
        use std::time::Duration;

        #[derive(FromArgs)]
        #[argh(description = "print stts22h temperature twice a second")]
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

    loop {
        let temp = stts
            .temperature()
            .map_err(|e| eyre!("failed to read a temperature: {}", e))?;

        println!("Temperature: {} C", temp);
        sleep(Duration::from_millis(500));
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn main() {}
