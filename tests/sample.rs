use embedded_hal::i2c::I2c;
use std::thread::sleep;
use std::time::Duration;
use stts22h::*;

mod common;

#[test]
fn test_sample() {
    let Some(mut hal) = common::setup() else {
        return;
    };

    // No sensor on this bus; nothing to check.
    let Ok(stts) = Stts22h::probe(&mut hal, AddrPin::default().into()) else {
        return;
    };

    sample(stts);
}

fn sample<T>(mut stts: Stts22h<T>)
where
    T: I2c,
{
    assert_eq!(stts.operating_mode(), OperatingMode::Continuous);

    // One 25 Hz conversion period, plus slack.
    sleep(Duration::from_millis(50));

    // This test only works if you're in a room with temperature between 0C and 50C!
    let temp = stts.read_temperature_celsius().unwrap_or(-1.0);
    assert!(temp > 0.0 && temp < 50.0);
}
