use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        use linux_embedded_hal::I2cdev;
        use stts22h::*;
        use argh::FromArgs;
        use eyre::{eyre, Result};
        use std::thread::sleep;
        use std::time::Duration;

        #[derive(FromArgs)]
        #[argh(description = "cycle the stts22h through its output data rates")]
        struct InputArgs {
            #[argh(positional)]
            bus: String,
            #[argh(positional, from_str_fn(from_base_16))]
            addr: u8,
            #[argh(option, short='n', default = "10", description = "samples per data rate")]
            num: u32,
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
        for rate in OutputDataRate::ALL {
            stts.set_output_data_rate(rate)
                .map_err(|e| eyre!("failed to set output data rate: {}", e))?;
            println!("Current output data rate setting: {} Hz", rate.hertz());

            for _ in 0..args.num {
                let temp = stts
                    .temperature()
                    .map_err(|e| eyre!("failed to read a temperature: {}", e))?;

                println!("Temperature: {} C", temp);
                sleep(Duration::from_millis(500));
            }
        }
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn main() {}
