use core::fmt;

use embassy_time::Duration;
use heapless::String;

use crate::config::{Mqtt, Redacted};
use crate::constants::TOPIC_MAX_LEN;
use crate::error::Error;
use crate::validate;

/// Broker login, only present when a user name is configured.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    pub login: &'static str,
    pub password: &'static str,
}

impl Mqtt {
    pub fn credentials(&self) -> Option<Credentials> {
        if self.login.is_empty() {
            return None;
        }
        Some(Credentials {
            login: self.login,
            password: self.password,
        })
    }

    /// Full topic for `leaf` under the configured base, e.g. `engrie111/bc/temperature`.
    ///
    /// Slashes at the seam are collapsed so exactly one separator remains. An empty
    /// leaf returns the base itself.
    pub fn topic(&self, leaf: &str) -> Result<String<TOPIC_MAX_LEN>, Error> {
        validate::topic_chars("topic leaf", leaf)?;

        let base = self.topic_base.trim_end_matches('/');
        let leaf = leaf.trim_start_matches('/');

        let mut topic = String::new();
        topic.push_str(base).map_err(|_| Error::TopicOverflow)?;
        if !leaf.is_empty() {
            topic.push('/').map_err(|_| Error::TopicOverflow)?;
            topic.push_str(leaf).map_err(|_| Error::TopicOverflow)?;
        }
        if topic.is_empty() {
            return Err(Error::Empty {
                field: "mqtt.topic_base",
            });
        }
        Ok(topic)
    }

    pub fn publish_interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.into())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &Redacted(self.password))
            .finish()
    }
}

impl fmt::Debug for Mqtt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mqtt")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("login", &self.login)
            .field("password", &Redacted(self.password))
            .field("topic_base", &self.topic_base)
            .field("interval_secs", &self.interval_secs)
            .finish()
    }
}
