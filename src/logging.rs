#![allow(unused_macros)]

// Both macros expand to nothing unless the `logging` feature is enabled;
// arguments are still type checked so they don't rot.

macro_rules! debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        log::debug!(target: "growable", $($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)+);
    }};
}

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        log::trace!(target: "growable", $($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)+);
    }};
}
