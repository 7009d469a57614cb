use std::time::SystemTime;

use chrono::{DateTime, Local};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Modification time of an entry, shown in the local time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub datetime: DateTime<Local>,
}

impl Timestamp {
    pub fn new(datetime: DateTime<Local>) -> Timestamp {
        Timestamp { datetime }
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Timestamp::new(DateTime::<Local>::from(time))
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.datetime.format(TIMESTAMP_FORMAT))
    }
}
