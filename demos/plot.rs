use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        use linux_embedded_hal::{I2cdev, i2cdev::linux::LinuxI2CError};
        use stts22h::*;
        use argh::FromArgs;
        use textplots::{Chart, Plot, Shape};
        use std::thread::sleep;
        use std::time::Duration;
        use indicatif::{ProgressBar, ProgressStyle};
        use std::fs::File;
        use std::io::Write;
        use std::error::Error as ErrorTrait;

        #[derive(FromArgs)]
        #[argh(description = "plot stts22h data")]
        struct InputArgs {
            #[argh(positional)]
            bus: String,
            #[argh(positional, from_str_fn(from_base_16))]
            addr: u8,
            #[argh(option, short='n', default = "default_num_samples()", description = "number of samples to take")]
            num: u32,
            #[argh(option, short='p', default = "default_period()", description = "milliseconds between one-shot conversions")]
            period: u64,
            #[argh(option, short='o', description = "out json file")]
            out_file: Option<String>
        }

        #[derive(Debug)]
        #[allow(dead_code)]
        enum PlotError {
            I2c(LinuxI2CError),
            Stts22h(stts22h::Error<I2cdev>),
            OutputError(Box<dyn ErrorTrait>)
        }

        impl From<LinuxI2CError> for PlotError {
            fn from(i2c_err: LinuxI2CError) -> PlotError {
                PlotError::I2c(i2c_err)
            }
        }

        impl From<stts22h::Error<I2cdev>> for PlotError {
            fn from(stts22h_err: stts22h::Error<I2cdev>) -> PlotError {
                PlotError::Stts22h(stts22h_err)
            }
        }

        fn default_num_samples() -> u32 {
            100
        }

        fn default_period() -> u64 {
            100
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

        /* One-shot conversion: trigger, then poll STATUS until the chip is idle again. The
        driver never waits on its own. */
        fn sample(stts: &mut Stts22h<I2cdev>) -> Result<f64, PlotError> {
            stts.trigger_one_shot()?;

            while stts.is_busy()? {
                sleep(Duration::from_millis(1));
            }

            Ok(stts.read_temperature_celsius()?)
        }
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn main() -> Result<(), PlotError> {
    let args: InputArgs = argh::from_env();

    let i2c: I2cdev = I2cdev::new(args.bus)?;
    let mut stts = Stts22h::new(i2c, args.addr)?;
    let mut points: Vec<(f32, f32)> = Vec::new();
    let mut data: Vec<f64> = Vec::new();

    let bar = ProgressBar::new(args.num as u64);
    bar.set_style(ProgressStyle::default_bar().progress_chars("#>-"));

    stts.reset()?;
    while stts.is_busy()? {
        sleep(Duration::from_millis(1));
    }

    stts.set_block_data_update(true)?;
    stts.set_operating_mode(OperatingMode::OneShot)?;

    println!(
        "Capturing data (1 sample every {} milliseconds)",
        args.period
    );

    for i in 0..args.num {
        let temp = sample(&mut stts)?;

        points.push((i as f32, temp as f32));
        data.push(temp);

        sleep(Duration::from_millis(args.period));
        bar.inc(1);
    }

    bar.finish();

    println!(
        "\ny = {} temperature samples (1 every {} milliseconds)",
        args.num, args.period
    );
    Chart::new(120, 60, 0.0, args.num as f32)
        .lineplot(&Shape::Steps(&points))
        .display();

    let json_str = serde_json::to_string(&data).map_err(|e| PlotError::OutputError(Box::new(e)))?;

    if let Some(out) = args.out_file {
        let mut file = File::create(out).map_err(|e| PlotError::OutputError(Box::new(e)))?;
        file.write_all(json_str.as_bytes())
            .map_err(|e| PlotError::OutputError(Box::new(e)))?;
    } else {
        println!("\n{}", json_str);
    }

    let _i2c_old = stts.free();

    Ok(())
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn main() {}
