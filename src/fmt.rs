//! Logging macros.
//!
//! On the ARM target these forward to `defmt`. Host builds (unit tests) have
//! no global logger, so the arguments are only borrowed and nothing is
//! emitted.

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::info!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}
