/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file read by the build script, relative to the package root
pub const CONFIG_FILE: &str = "cfg.toml";
/// Committed sample used when `CONFIG_FILE` is absent
pub const CONFIG_EXAMPLE_FILE: &str = "cfg.toml.example";
/// Environment variable overriding the config file path
pub const CONFIG_PATH_ENV: &str = "BOILER_CONFIG";

/// Default NTP pool
pub const DEFAULT_NTP_SERVER: &str = "pool.ntp.org";
/// Default clock resync interval in seconds
pub const DEFAULT_NTP_UPDATE_SECS: u32 = 60;
/// Default ArduinoOTA port
pub const DEFAULT_OTA_PORT: u16 = 3232;
/// Default plaintext MQTT port
pub const DEFAULT_MQTT_PORT: u16 = 1883;
/// Default telemetry interval in seconds
pub const DEFAULT_MQTT_INTERVAL_SECS: u32 = 60;

/// Maximum SSID length in bytes (802.11)
pub const SSID_MAX_LEN: usize = 32;
/// WPA2-PSK passphrase bounds in bytes
pub const WIFI_PASSWORD_MIN_LEN: usize = 8;
pub const WIFI_PASSWORD_MAX_LEN: usize = 63;

/// Maximum DNS name length
pub const HOSTNAME_MAX_LEN: usize = 253;
/// Maximum length of the location label
pub const LABEL_MAX_LEN: usize = 32;
/// Maximum length of a full MQTT topic, base and leaf included
pub const TOPIC_MAX_LEN: usize = 128;

/// Length of an MD5 digest written as hex
pub const MD5_HEX_LEN: usize = 32;

/// Accepted UTC offsets, UTC-12:00 to UTC+14:00
pub const UTC_OFFSET_MIN_SECS: i64 = -12 * 3600;
pub const UTC_OFFSET_MAX_SECS: i64 = 14 * 3600;
/// Largest daylight saving shift in use anywhere
pub const DST_OFFSET_MAX_SECS: i64 = 2 * 3600;
