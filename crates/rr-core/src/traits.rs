//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.

use chrono::{DateTime, Utc};

use crate::models::{Seed, User};

/// Time source for every timestamp the store writes.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Identity contract used at sign-in.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    /// The acting user's profile, or `None` when nobody is signed in.
    fn current_user(&self) -> Option<User>;
}

/// Seed data contract (fixtures, snapshots, ...).
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait FixtureSource: Send + Sync {
    /// Reads and parses the full seed. Validation happens in the store.
    fn load(&self) -> anyhow::Result<Seed>;
}
