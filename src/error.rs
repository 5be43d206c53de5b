use core::fmt;

use crate::constants::{WIFI_PASSWORD_MAX_LEN, WIFI_PASSWORD_MIN_LEN};

/// A configuration value that breaks one of the validation rules.
///
/// `field` is the dotted path of the offending key in `cfg.toml`, e.g. `mqtt.port`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Empty { field: &'static str },
    TooLong { field: &'static str, max: usize },
    OutOfRange { field: &'static str, min: i64, max: i64 },
    InvalidCharacter { field: &'static str },
    Wildcard { field: &'static str },
    WifiPasswordLength,
    InvalidMd5Hash,
    PasswordWithoutLogin,
    TopicOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty { field } => write!(f, "{field} must not be empty"),
            Error::TooLong { field, max } => write!(f, "{field} is longer than {max} bytes"),
            Error::OutOfRange { field, min, max } => {
                write!(f, "{field} must be between {min} and {max}")
            }
            Error::InvalidCharacter { field } => {
                write!(f, "{field} contains whitespace or control characters")
            }
            Error::Wildcard { field } => {
                write!(f, "{field} must not contain MQTT wildcards ('+' or '#')")
            }
            Error::WifiPasswordLength => write!(
                f,
                "wifi.password must be empty or {WIFI_PASSWORD_MIN_LEN} to {WIFI_PASSWORD_MAX_LEN} bytes long"
            ),
            Error::InvalidMd5Hash => {
                write!(f, "ota.password_hash must be 32 hexadecimal digits")
            }
            Error::PasswordWithoutLogin => {
                write!(f, "mqtt.password is set but mqtt.login is empty")
            }
            Error::TopicOverflow => write!(f, "MQTT topic does not fit the topic buffer"),
        }
    }
}
