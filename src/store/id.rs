//! Playlist ID generation

use chrono::{DateTime, Utc};

/// Generates playlist IDs as MD5 hex digests
///
/// The digest covers the creation time, a per-store sequence number and the
/// name. The sequence number keeps IDs distinct when several playlists are
/// created within the same clock tick.
#[derive(Debug, Default)]
pub struct IdGenerator {
    sequence: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce an ID that `taken` does not report as already in use
    pub fn next_id(&mut self, name: &str, now: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
        let nanos = now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp_micros());

        loop {
            self.sequence += 1;
            let seed = format!("{}:{}:{}", nanos, self.sequence, name);
            let id = format!("{:x}", md5::compute(seed.as_bytes()));

            if !taken(&id) {
                return id;
            }
            log::debug!("Generated playlist ID {} already taken, retrying", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_tick_same_name_distinct() {
        let mut ids = IdGenerator::new();
        let now = Utc::now();

        let a = ids.next_id("Road Trips", now, |_| false);
        let b = ids.next_id("Road Trips", now, |_| false);

        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_skips_taken_ids() {
        let now = Utc::now();
        let first = IdGenerator::new().next_id("Mix", now, |_| false);

        // A fresh generator would hand out `first` again; it must skip it
        let mut ids = IdGenerator::new();
        let second = ids.next_id("Mix", now, |id| id == first);
        assert_ne!(first, second);
    }
}
