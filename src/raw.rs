//! `cfg.toml` as written on disk, before validation.
//!
//! Used by the build script to produce `$OUT_DIR/config.rs`. The library only
//! compiles it for tests since it needs `std`, `serde` and `toml`.

use std::format;
use std::path::PathBuf;
use std::string::String;
use std::vec;
use std::vec::Vec;

use serde::Deserialize;

use crate::constants::*;
use crate::error::Error;
use crate::validate;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub location: String,
    pub wifi: RawWifi,
    #[serde(default)]
    pub ntp: RawNtp,
    #[serde(default)]
    pub ota: RawOta,
    pub mqtt: RawMqtt,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawWifi {
    pub ssid: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawNtp {
    pub server: String,
    pub utc_offset_secs: i64,
    pub dst_offset_secs: i64,
    pub update_interval_secs: i64,
}

impl Default for RawNtp {
    fn default() -> Self {
        Self {
            server: DEFAULT_NTP_SERVER.into(),
            utc_offset_secs: 0,
            dst_offset_secs: 0,
            update_interval_secs: DEFAULT_NTP_UPDATE_SECS.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawOta {
    pub port: i64,
    pub password: String,
    pub password_hash: String,
}

impl Default for RawOta {
    fn default() -> Self {
        Self {
            port: DEFAULT_OTA_PORT.into(),
            password: String::new(),
            password_hash: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawMqtt {
    pub server: String,
    #[serde(default = "default_mqtt_port")]
    pub port: i64,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
    pub topic_base: String,
    #[serde(default = "default_mqtt_interval")]
    pub interval_secs: i64,
}

fn default_mqtt_port() -> i64 {
    DEFAULT_MQTT_PORT.into()
}

fn default_mqtt_interval() -> i64 {
    DEFAULT_MQTT_INTERVAL_SECS.into()
}

impl RawConfig {
    pub fn parse(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Validate every value and emit the `CONFIG` constant as Rust source.
    pub fn render(&self) -> Result<String, Error> {
        validate::label("location", &self.location)?;
        validate::ssid(&self.wifi.ssid)?;
        validate::wifi_password(&self.wifi.password)?;

        validate::hostname("ntp.server", &self.ntp.server)?;
        let utc_offset = validate::utc_offset_secs(self.ntp.utc_offset_secs)?;
        let dst_offset = validate::dst_offset_secs(self.ntp.dst_offset_secs)?;
        let ntp_update =
            validate::interval_secs("ntp.update_interval_secs", self.ntp.update_interval_secs)?;

        let ota_port = validate::port("ota.port", self.ota.port)?;
        if !self.ota.password_hash.is_empty() {
            validate::md5_hex(&self.ota.password_hash)?;
        }

        validate::hostname("mqtt.server", &self.mqtt.server)?;
        let mqtt_port = validate::port("mqtt.port", self.mqtt.port)?;
        validate::mqtt_credentials(&self.mqtt.login, &self.mqtt.password)?;
        validate::topic("mqtt.topic_base", &self.mqtt.topic_base)?;
        let mqtt_interval = validate::interval_secs("mqtt.interval_secs", self.mqtt.interval_secs)?;

        Ok(format!(
            r#"
        pub const CONFIG: Config = Config {{
            location: {loc:?},
            wifi: Wifi {{
                ssid: {ssid:?},
                password: {psk:?},
            }},
            ntp: Ntp {{
                server: {ns:?},
                utc_offset_secs: {utc},
                dst_offset_secs: {dst},
                update_interval_secs: {nu},
            }},
            ota: Ota {{
                port: {op},
                password: {opw:?},
                password_hash: {oh:?},
            }},
            mqtt: Mqtt {{
                server: {ms:?},
                port: {mp},
                login: {ml:?},
                password: {mpw:?},
                topic_base: {mt:?},
                interval_secs: {mi},
            }},
        }};
    "#,
            loc = self.location,
            ssid = self.wifi.ssid,
            psk = self.wifi.password,
            ns = self.ntp.server,
            utc = utc_offset,
            dst = dst_offset,
            nu = ntp_update,
            op = ota_port,
            opw = self.ota.password,
            oh = self.ota.password_hash,
            ms = self.mqtt.server,
            mp = mqtt_port,
            ml = self.mqtt.login,
            mpw = self.mqtt.password,
            mt = self.mqtt.topic_base,
            mi = mqtt_interval,
        ))
    }
}

/// Which file the build reads and which paths Cargo should watch.
#[derive(Debug, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub fallback: bool,
    pub watch: Vec<PathBuf>,
}

/// Pick the config file: the env override, then `cfg.toml`, then the example.
///
/// While `cfg.toml` is absent it stays on the watch list so that creating it is
/// picked up. Cargo treats a missing watched file as stale, so until then the
/// build script reruns on every build.
pub fn config_source(override_path: Option<PathBuf>, cfg_exists: bool) -> ConfigSource {
    if let Some(path) = override_path {
        return ConfigSource {
            watch: vec![path.clone()],
            path,
            fallback: false,
        };
    }

    if cfg_exists {
        return ConfigSource {
            path: PathBuf::from(CONFIG_FILE),
            fallback: false,
            watch: vec![PathBuf::from(CONFIG_FILE)],
        };
    }

    ConfigSource {
        path: PathBuf::from(CONFIG_EXAMPLE_FILE),
        fallback: true,
        watch: vec![PathBuf::from(CONFIG_EXAMPLE_FILE), PathBuf::from(CONFIG_FILE)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        location = "Home"

        [wifi]
        ssid = "Engrie"

        [mqtt]
        server = "mqtt.home"
        topic_base = "engrie111/bc"
    "#;

    #[test]
    fn minimal_file_gets_defaults() {
        let raw = RawConfig::parse(MINIMAL).unwrap();

        assert_eq!(raw.wifi.password, "");
        assert_eq!(raw.ntp.server, "pool.ntp.org");
        assert_eq!(raw.ntp.utc_offset_secs, 0);
        assert_eq!(raw.ntp.dst_offset_secs, 0);
        assert_eq!(raw.ntp.update_interval_secs, 60);
        assert_eq!(raw.ota.port, 3232);
        assert_eq!(raw.ota.password, "");
        assert_eq!(raw.ota.password_hash, "");
        assert_eq!(raw.mqtt.port, 1883);
        assert_eq!(raw.mqtt.login, "");
        assert_eq!(raw.mqtt.password, "");
        assert_eq!(raw.mqtt.interval_secs, 60);
    }

    #[test]
    fn partial_section_keeps_remaining_defaults() {
        let raw = RawConfig::parse(&format!("{MINIMAL}\n[ntp]\nutc_offset_secs = 3600\n")).unwrap();
        assert_eq!(raw.ntp.utc_offset_secs, 3600);
        assert_eq!(raw.ntp.server, "pool.ntp.org");
        assert_eq!(raw.ntp.update_interval_secs, 60);
    }

    #[test]
    fn defaults_reach_generated_code() {
        let code = RawConfig::parse(MINIMAL).unwrap().render().unwrap();

        assert!(code.contains(r#"server: "pool.ntp.org","#));
        assert!(code.contains("update_interval_secs: 60,"));
        assert!(code.contains("port: 3232,"));
        assert!(code.contains("port: 1883,"));
        assert!(code.contains("interval_secs: 60,"));
        assert!(code.contains(r#"topic_base: "engrie111/bc","#));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(RawConfig::parse(&format!("hostname = \"boiler\"\n{MINIMAL}")).is_err());

        let in_mqtt = format!("{MINIMAL}qos = 1\n");
        assert!(RawConfig::parse(&in_mqtt).is_err());

        let section = format!("{MINIMAL}\n[ota]\nport = 3232\npasword = \"admin\"\n");
        assert!(RawConfig::parse(&section).is_err());
    }

    #[test]
    fn missing_required_key_is_rejected() {
        let without_topic = MINIMAL.replace("topic_base = \"engrie111/bc\"", "");
        assert!(RawConfig::parse(&without_topic).is_err());
    }

    #[test]
    fn render_rejects_invalid_values() {
        let bad_port = format!("{MINIMAL}\n[ota]\nport = 0\n");
        assert_eq!(
            RawConfig::parse(&bad_port).unwrap().render(),
            Err(Error::OutOfRange {
                field: "ota.port",
                min: 1,
                max: 65535
            })
        );

        let slash_topic = MINIMAL.replace("engrie111/bc", "/");
        assert_eq!(
            RawConfig::parse(&slash_topic).unwrap().render(),
            Err(Error::Empty {
                field: "mqtt.topic_base"
            })
        );
    }

    #[test]
    fn example_file_renders() {
        let raw = RawConfig::parse(include_str!("../cfg.toml.example")).unwrap();
        assert_eq!(raw.ntp.server, "be.pool.ntp.org");
        assert!(raw.render().is_ok());
    }

    #[test]
    fn source_falls_back_to_example() {
        let source = config_source(None, false);
        assert_eq!(source.path, PathBuf::from(CONFIG_EXAMPLE_FILE));
        assert!(source.fallback);
        assert_eq!(
            source.watch,
            vec![PathBuf::from(CONFIG_EXAMPLE_FILE), PathBuf::from(CONFIG_FILE)]
        );
    }

    #[test]
    fn source_prefers_cfg_toml_and_watches_only_it() {
        let source = config_source(None, true);
        assert_eq!(source.path, PathBuf::from(CONFIG_FILE));
        assert!(!source.fallback);
        assert_eq!(source.watch, vec![PathBuf::from(CONFIG_FILE)]);
    }

    #[test]
    fn override_wins() {
        let source = config_source(Some(PathBuf::from("/tmp/boiler.toml")), true);
        assert_eq!(source.path, PathBuf::from("/tmp/boiler.toml"));
        assert!(!source.fallback);
        assert_eq!(source.watch, vec![PathBuf::from("/tmp/boiler.toml")]);
    }
}
