use core::fmt;
use core::str::FromStr;

use heapless::String;

use crate::config::{Redacted, Wifi};
use crate::constants::{SSID_MAX_LEN, WIFI_PASSWORD_MAX_LEN};
use crate::error::Error;

/// Capacity of the password buffer handed to the radio driver.
pub const PASSWORD_BUF_LEN: usize = WIFI_PASSWORD_MAX_LEN + 1;

impl Wifi {
    /// No passphrase configured, join without authentication.
    pub fn is_open(&self) -> bool {
        self.password.is_empty()
    }

    /// SSID in the fixed-size buffer the station client config takes.
    pub fn ssid_string(&self) -> Result<String<SSID_MAX_LEN>, Error> {
        String::from_str(self.ssid).map_err(|_| Error::TooLong {
            field: "wifi.ssid",
            max: SSID_MAX_LEN,
        })
    }

    pub fn password_string(&self) -> Result<String<PASSWORD_BUF_LEN>, Error> {
        String::from_str(self.password).map_err(|_| Error::WifiPasswordLength)
    }
}

impl fmt::Debug for Wifi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wifi")
            .field("ssid", &self.ssid)
            .field("password", &Redacted(self.password))
            .finish()
    }
}
