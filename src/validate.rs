//! Validation rules for every configuration value.
//!
//! This module is compiled twice: by the build script, which rejects a bad
//! `cfg.toml` before any firmware is produced, and by the library, where
//! [`Config::validate`](crate::config::Config::validate) applies the same rules
//! to values built in code. It must therefore stay `core`-only.

use crate::constants::*;
use crate::error::Error;

/// TCP/UDP port in `1..=65535`.
pub fn port(field: &'static str, value: i64) -> Result<u16, Error> {
    in_range(field, value, 1, u16::MAX as i64).map(|v| v as u16)
}

/// Strictly positive number of seconds.
pub fn interval_secs(field: &'static str, value: i64) -> Result<u32, Error> {
    in_range(field, value, 1, u32::MAX as i64).map(|v| v as u32)
}

pub fn utc_offset_secs(value: i64) -> Result<i32, Error> {
    in_range(
        "ntp.utc_offset_secs",
        value,
        UTC_OFFSET_MIN_SECS,
        UTC_OFFSET_MAX_SECS,
    )
    .map(|v| v as i32)
}

pub fn dst_offset_secs(value: i64) -> Result<i32, Error> {
    in_range("ntp.dst_offset_secs", value, 0, DST_OFFSET_MAX_SECS).map(|v| v as i32)
}

/// DNS name or IP literal.
pub fn hostname(field: &'static str, value: &str) -> Result<(), Error> {
    non_empty(field, value)?;
    max_len(field, value, HOSTNAME_MAX_LEN)?;
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(Error::InvalidCharacter { field });
    }
    Ok(())
}

pub fn ssid(value: &str) -> Result<(), Error> {
    non_empty("wifi.ssid", value)?;
    max_len("wifi.ssid", value, SSID_MAX_LEN)
}

/// Empty means an open network, anything else must be a WPA2 passphrase.
pub fn wifi_password(value: &str) -> Result<(), Error> {
    if value.is_empty() || (WIFI_PASSWORD_MIN_LEN..=WIFI_PASSWORD_MAX_LEN).contains(&value.len())
    {
        Ok(())
    } else {
        Err(Error::WifiPasswordLength)
    }
}

/// Free-form human label such as the installation location.
pub fn label(field: &'static str, value: &str) -> Result<(), Error> {
    non_empty(field, value)?;
    max_len(field, value, LABEL_MAX_LEN)?;
    if value.chars().any(char::is_control) {
        return Err(Error::InvalidCharacter { field });
    }
    Ok(())
}

/// Publishable MQTT topic name. Trailing slashes are dropped when joining, so
/// a base made only of slashes counts as empty.
pub fn topic(field: &'static str, value: &str) -> Result<(), Error> {
    non_empty(field, value.trim_end_matches('/'))?;
    max_len(field, value, TOPIC_MAX_LEN)?;
    topic_chars(field, value)
}

/// Character rules of a topic without the emptiness check, for leaves.
pub fn topic_chars(field: &'static str, value: &str) -> Result<(), Error> {
    if value.contains(['+', '#']) {
        return Err(Error::Wildcard { field });
    }
    if value.contains('\0') {
        return Err(Error::InvalidCharacter { field });
    }
    Ok(())
}

/// Decode a 32-digit hex MD5 digest, upper or lower case.
pub fn md5_hex(value: &str) -> Result<[u8; 16], Error> {
    let bytes = value.as_bytes();
    if bytes.len() != MD5_HEX_LEN {
        return Err(Error::InvalidMd5Hash);
    }

    let mut digest = [0u8; 16];
    for (out, pair) in digest.iter_mut().zip(bytes.chunks_exact(2)) {
        let hi = hex_nibble(pair[0]).ok_or(Error::InvalidMd5Hash)?;
        let lo = hex_nibble(pair[1]).ok_or(Error::InvalidMd5Hash)?;
        *out = (hi << 4) | lo;
    }
    Ok(digest)
}

/// MQTT 3.1.1 does not allow a password without a user name.
pub fn mqtt_credentials(login: &str, password: &str) -> Result<(), Error> {
    if login.is_empty() && !password.is_empty() {
        return Err(Error::PasswordWithoutLogin);
    }
    Ok(())
}

fn in_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<i64, Error> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(Error::OutOfRange { field, min, max })
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::Empty { field });
    }
    Ok(())
}

fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), Error> {
    if value.len() > max {
        return Err(Error::TooLong { field, max });
    }
    Ok(())
}

fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
