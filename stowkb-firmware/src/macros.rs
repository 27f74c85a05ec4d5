#[allow(unused)]
#[cfg(all(not(test), not(feature = "defmt"), not(feature = "test-utils")))]
mod silent {
    #[macro_export]
    macro_rules! fixme {
        ($a:expr) => {{
            let _ = $a;
        }};
    }

    #[macro_export]
    macro_rules! info {
    ($($arg:expr),*) => {{let _ = ($($arg),*);}};
}

    #[macro_export]
    macro_rules! debug {
    ($($arg:expr),*) => {{let _ = ($($arg),*);}};
}

    #[macro_export]
    macro_rules! warn {
    ($($arg:expr),*) => {{let _ = ($($arg),*);}};
}

    #[macro_export]
    macro_rules! error {
    ($($arg:expr),*) => {{let _ = ($($arg),*);}};
}
}

#[cfg(all(not(test), feature = "defmt", not(feature = "test-utils")))]
mod defmt {
    /// Convenience macro to use whilst debugging code. It will call the [defmt::debug] macro.
    ///
    /// When testing on the host `eprintln!` is called instead, so the argument must derive `Debug`.
    #[macro_export]
    macro_rules! fixme {
        ($a:expr) => {
            defmt::debug!("FIXME: at {}:{}:{}\n{:?}", file!(), line!(), column!(), $a,)
        };
    }

    /// Log debug messages. It will call the [defmt::debug] macro.
    ///
    /// Only format specifiers understood by both `defmt` and `core::fmt` may be used (`{}`, `{:?}`,
    /// `{:#x}`), since host tests print the same message with `eprintln!`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[macro_use] extern crate stowkb_firmware;
    /// # fn main() {
    /// let raw = 0x95u8;
    /// debug!("scancode {:#x}", raw);
    /// # }
    /// ```
    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),*) => {
            defmt::debug!($($arg,)*)
        };
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:expr),*) => {
            defmt::info!($($arg,)*)
        };
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),*) => {
            defmt::warn!($($arg,)*)
        };
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:expr),*) => {
            defmt::error!($($arg,)*)
        };
    }
}

#[cfg(any(test, feature = "test-utils"))]
mod host {
    #[macro_export]
    macro_rules! fixme {
        ($a:expr) => {{
            extern crate std;
            std::eprintln!(
                // split so that not found when looking for the word in an editor
                "FIXME\
             ! at ./{}:{}:{}\n{:?}",
                file!(),
                line!(),
                column!(),
                $a,
            )
        }};
    }

    #[macro_export]
    macro_rules! debug {
    ($($arg:expr),*) => {{
        extern crate std;
        std::eprintln!("DEBUG: {}",  format_args!($($arg,)*))
    }};
}

    #[macro_export]
    macro_rules! info {
    ($($arg:expr),*) => {{
        extern crate std;
        std::eprintln!("INFO: {}",  std::format!($($arg,)*))
    }};
}

    #[macro_export]
    macro_rules! warn {
    ($($arg:expr),*) => {{
        extern crate std;
        std::eprintln!("WARN: {}",  std::format!($($arg,)*))
    }};
}

    #[macro_export]
    macro_rules! error {
    ($($arg:expr),*) => {{
        extern crate std;
        if cfg!(test) {
            panic!("{}", std::format!($($arg,)*));
        } else {
            std::eprintln!("\nERROR: at ./{}:{}:{}:\n{}", file!(), line!(), column!(), std::format!($($arg,)*));
        }
    }};
}
}
