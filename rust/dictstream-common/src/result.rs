//! The crate-wide `Result` alias and the validation macros used at every
//! argument and decoding boundary in the dictstream crates.

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Validates a caller-supplied argument, returning
/// [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
/// from the enclosing function when the condition does not hold.
///
/// The first token names the offending argument and is captured verbatim
/// into the error; the condition text becomes the message.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $cond:expr) => {{
        if !$cond {
            return Err($crate::result::arg_rejected(
                stringify!($name),
                stringify!($cond),
            ));
        }
    }};
}

/// Validates serialized data during decoding, returning
/// [`ErrorKind::InvalidFormat`](crate::error::ErrorKind::InvalidFormat)
/// from the enclosing function when the condition does not hold.
///
/// The first token names the serialized element being decoded.
#[macro_export]
macro_rules! verify_data {
    ($name:expr, $cond:expr) => {{
        if !$cond {
            return Err($crate::result::data_rejected(
                stringify!($name),
                stringify!($cond),
            ));
        }
    }};
}

#[cold]
pub fn arg_rejected(name: &str, condition: &str) -> Error {
    Error::invalid_arg(name, condition)
}

#[cold]
pub fn data_rejected(element: &str, condition: &str) -> Error {
    Error::invalid_format(element, condition)
}
