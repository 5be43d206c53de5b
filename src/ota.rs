use core::fmt;

use crate::config::{Ota, Redacted};
use crate::validate;

/// How the OTA listener authenticates an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtaAuth<'a> {
    None,
    Password(&'a str),
    /// Hex MD5 of the password, passed to the listener as-is
    Md5(&'a str),
}

impl Ota {
    /// Resolve the authentication scheme. A hash wins over a plain password.
    pub fn auth(&self) -> OtaAuth<'static> {
        if !self.password_hash.is_empty() {
            OtaAuth::Md5(self.password_hash)
        } else if !self.password.is_empty() {
            OtaAuth::Password(self.password)
        } else {
            OtaAuth::None
        }
    }
}

impl OtaAuth<'_> {
    pub fn is_required(&self) -> bool {
        !matches!(self, OtaAuth::None)
    }

    /// Raw digest bytes, `None` unless this is a well-formed hash.
    pub fn digest(&self) -> Option<[u8; 16]> {
        match self {
            OtaAuth::Md5(hex) => validate::md5_hex(hex).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for OtaAuth<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OtaAuth::None => "none",
            OtaAuth::Password(_) => "password",
            OtaAuth::Md5(_) => "md5",
        })
    }
}

impl fmt::Debug for Ota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ota")
            .field("port", &self.port)
            .field("password", &Redacted(self.password))
            .field("password_hash", &Redacted(self.password_hash))
            .finish()
    }
}
