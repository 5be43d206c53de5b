use embassy_time::Duration;

use crate::config::Ntp;

impl Ntp {
    /// Seconds to add to UTC to get local time.
    pub fn offset_secs(&self, dst_active: bool) -> i32 {
        if dst_active {
            self.utc_offset_secs.saturating_add(self.dst_offset_secs)
        } else {
            self.utc_offset_secs
        }
    }

    /// Shift a UTC Unix timestamp to local wall-clock seconds.
    pub fn local_time(&self, utc_unix_secs: u64, dst_active: bool) -> u64 {
        let offset = self.offset_secs(dst_active);
        if offset >= 0 {
            utc_unix_secs.saturating_add(offset as u64)
        } else {
            utc_unix_secs.saturating_sub(offset.unsigned_abs() as u64)
        }
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval_secs.into())
    }
}
