use core::fmt;

use crate::error::Error;
use crate::validate;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    // Installation label (used in telemetry payloads)
    pub location: &'static str,

    pub wifi: Wifi,
    pub ntp: Ntp,
    pub ota: Ota,
    pub mqtt: Mqtt,
}

#[derive(Clone, Copy)]
pub struct Wifi {
    // SSID to join
    pub ssid: &'static str,

    // WPA2 pre-shared key, empty for an open network
    pub password: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Ntp {
    // NTP server hostname
    pub server: &'static str,

    // Standard time offset from UTC in seconds
    pub utc_offset_secs: i32,

    // Additional offset while daylight saving time is active
    pub dst_offset_secs: i32,

    // Resync interval in seconds
    pub update_interval_secs: u32,
}

#[derive(Clone, Copy)]
pub struct Ota {
    // Port the OTA listener binds to (ArduinoOTA default is 3232)
    pub port: u16,

    // Plain OTA password, empty when unused
    pub password: &'static str,

    // MD5 of the OTA password as 32 hex digits, empty when unused.
    // Takes precedence over `password`.
    pub password_hash: &'static str,
}

#[derive(Clone, Copy)]
pub struct Mqtt {
    // MQTT broker hostname or IP address
    pub server: &'static str,

    // MQTT port (usually 1883, or 8883 for TLS)
    pub port: u16,

    // MQTT username, empty for anonymous access
    pub login: &'static str,

    // MQTT password, requires a login
    pub password: &'static str,

    // Prefix of every topic the controller publishes to
    pub topic_base: &'static str,

    // Telemetry publish interval in seconds
    pub interval_secs: u32,
}

impl Config {
    /// Check every value against the same rules the build script enforces.
    pub fn validate(&self) -> Result<(), Error> {
        validate::label("location", self.location)?;

        validate::ssid(self.wifi.ssid)?;
        validate::wifi_password(self.wifi.password)?;

        validate::hostname("ntp.server", self.ntp.server)?;
        validate::utc_offset_secs(self.ntp.utc_offset_secs.into())?;
        validate::dst_offset_secs(self.ntp.dst_offset_secs.into())?;
        validate::interval_secs("ntp.update_interval_secs", self.ntp.update_interval_secs.into())?;

        validate::port("ota.port", self.ota.port.into())?;
        if !self.ota.password_hash.is_empty() {
            validate::md5_hex(self.ota.password_hash)?;
        }

        validate::hostname("mqtt.server", self.mqtt.server)?;
        validate::port("mqtt.port", self.mqtt.port.into())?;
        validate::mqtt_credentials(self.mqtt.login, self.mqtt.password)?;
        validate::topic("mqtt.topic_base", self.mqtt.topic_base)?;
        validate::interval_secs("mqtt.interval_secs", self.mqtt.interval_secs.into())?;

        Ok(())
    }

    /// Log the effective configuration at startup. Secrets are never printed.
    pub fn log_summary(&self) {
        log::info!(
            "Boiler controller config v{} at '{}'",
            crate::constants::VERSION,
            self.location
        );
        log::info!(
            "WiFi: ssid={} security={}",
            self.wifi.ssid,
            if self.wifi.is_open() { "open" } else { "wpa2" }
        );
        log::info!(
            "NTP: server={} offset={}s dst={}s every {}s",
            self.ntp.server,
            self.ntp.utc_offset_secs,
            self.ntp.dst_offset_secs,
            self.ntp.update_interval_secs
        );
        log::info!("OTA: port={} auth={}", self.ota.port, self.ota.auth());
        log::info!(
            "MQTT: {}:{} topic={} every {}s{}",
            self.mqtt.server,
            self.mqtt.port,
            self.mqtt.topic_base,
            self.mqtt.interval_secs,
            if self.mqtt.credentials().is_some() {
                " (authenticated)"
            } else {
                ""
            }
        );
        if !self.ota.password.is_empty() && !self.ota.password_hash.is_empty() {
            log::warn!("OTA: both password and password_hash set, using the hash");
        }
    }
}

/// Debug wrapper that hides a secret but still shows whether one is set.
pub(crate) struct Redacted<'a>(pub &'a str);

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("\"\"")
        } else {
            f.write_str("\"<redacted>\"")
        }
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
