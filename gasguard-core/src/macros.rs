//! Optional logging
//!
//! Expands to `log` on hosts, `defmt` on embedded targets and to nothing
//! when neither feature is enabled. Only configuration paths log.

#[cfg(feature = "log")]
macro_rules! gas_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! gas_debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! gas_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! gas_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! gas_warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! gas_warn {
    ($($arg:tt)*) => {};
}
