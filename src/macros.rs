//! Logging shims. Routes to `defmt` or `log` depending on which feature is enabled, and
//! to nothing otherwise. Arguments must format under both backends, so stick to integers
//! and `bool`s with `{}` or `{:#x}`.

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)+);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)+);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        {
            let _ = ($($arg)+);
        }
    }};
}

macro_rules! debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)+);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)+);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        {
            let _ = ($($arg)+);
        }
    }};
}

pub(crate) use debug;
pub(crate) use trace;
