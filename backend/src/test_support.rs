//! Test utilities for the showcase crate.
//!
//! Shared by unit tests under `src/` and integration tests under `tests/`.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{User, UserStatus};

/// Clock whose reading only moves when a test advances it.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use chrono::{TimeZone, Utc};
/// use mockable::Clock;
/// use showcase::test_support::MutableClock;
///
/// let start = Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).single().expect("valid");
/// let clock = MutableClock::new(start);
/// clock.advance(Duration::from_secs(60));
/// assert_eq!((clock.utc() - start).num_seconds(), 60);
/// ```
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance(&self, delta: Duration) {
        let delta = match TimeDelta::from_std(delta) {
            Ok(delta) => delta,
            Err(error) => {
                panic!("failed to convert Duration to TimeDelta: {error}; delta={delta:?}")
            }
        };
        *self.lock_clock() += delta;
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Midday UTC on 2026-10-17, the reference "now" used across the suites.
pub fn fixture_now() -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).single() {
        Some(now) => now,
        None => panic!("fixture timestamp must be unambiguous"),
    }
}

/// Calendar date of [`fixture_now`].
pub fn fixture_today() -> NaiveDate {
    fixture_now().date_naive()
}

/// `count` users with ids `1..=count`, alternating active and inactive.
pub fn sample_users(count: usize) -> Vec<User> {
    (1..=count)
        .map(|n| User {
            id: n.to_string(),
            first_name: format!("User{n}"),
            last_name: "Sample".to_owned(),
            email: format!("user{n}@example.com"),
            role: if n % 5 == 0 { "Admin" } else { "Viewer" }.to_owned(),
            status: if n % 2 == 0 {
                UserStatus::Inactive
            } else {
                UserStatus::Active
            },
            avatar: None,
            created_at: None,
            last_login: None,
        })
        .collect()
}
