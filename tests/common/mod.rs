use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

#[allow(dead_code)]
pub struct UnimplementedHal;

impl ErrorType for UnimplementedHal {
    type Error = ErrorKind;
}

impl I2c for UnimplementedHal {
    fn transaction(&mut self, _address: u8, _operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        use linux_embedded_hal::I2cdev;
        pub type HalImpl = I2cdev;
    } else {
        pub type HalImpl = UnimplementedHal;
    }
}

/// Open the bus named by `STTS22H_I2C_BUS` (default `/dev/i2c-1`). `None` when there is no
/// bus to talk to, so hardware tests can bow out on machines without one.
pub fn setup() -> Option<HalImpl> {
    cfg_if::cfg_if! {
        if #[cfg(any(target_os = "linux", target_os = "android"))] {
            let bus = std::env::var("STTS22H_I2C_BUS").unwrap_or_else(|_| "/dev/i2c-1".into());
            I2cdev::new(bus).ok()
        } else {
            Some(UnimplementedHal {})
        }
    }
}
