//! # rr-auth-mock
//!
//! Canned implementations of `IdentityProvider`.
//! `AnonymousIdentity` never signs anyone in; `FixtureIdentity` always
//! answers with the same profile (the one-click member or admin login).

use rr_core::models::{DietaryPreference, User};
use rr_core::traits::IdentityProvider;

/// Nobody is signed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousIdentity;

impl IdentityProvider for AnonymousIdentity {
    fn current_user(&self) -> Option<User> {
        log::debug!("anonymous identity consulted");
        None
    }
}

/// Always the same user.
#[derive(Debug, Clone)]
pub struct FixtureIdentity {
    user: User,
}

impl FixtureIdentity {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// The demo member account.
    pub fn member() -> Self {
        Self::new(User {
            id: "recipe-lover-01".into(),
            name: "RecipeLover".into(),
            email: "user@reciperadar.com".into(),
            is_admin: false,
            favorites: ["2", "3"].map(String::from).into(),
            favorite_cuisines: ["Indian", "French"].map(String::from).into(),
            read_history: vec!["1".into(), "2".into()],
            country: "USA".into(),
            dietary_preference: DietaryPreference::All,
            suspended_until: None,
        })
    }

    /// The demo back-office account.
    pub fn admin() -> Self {
        Self::new(User {
            id: "admin-user-01".into(),
            name: "Admin User".into(),
            email: "admin@reciperadar.com".into(),
            is_admin: true,
            favorites: ["1"].map(String::from).into(),
            favorite_cuisines: ["Italian"].map(String::from).into(),
            read_history: vec!["1".into(), "2".into(), "3".into()],
            country: "USA".into(),
            dietary_preference: DietaryPreference::All,
            suspended_until: None,
        })
    }

    /// One-click login: the admin profile when `as_admin`, the member otherwise.
    pub fn login(as_admin: bool) -> Self {
        if as_admin {
            Self::admin()
        } else {
            Self::member()
        }
    }
}

impl IdentityProvider for FixtureIdentity {
    fn current_user(&self) -> Option<User> {
        log::debug!("fixture identity {} consulted", self.user.id);
        Some(self.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rr_core::{AppError, Clock, Store};
    use std::sync::Arc;

    struct Frozen;

    impl Clock for Frozen {
        fn now(&self) -> chrono::DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 2, 2, 10, 0, 0).unwrap()
        }
    }

    #[test]
    fn anonymous_cannot_sign_in() {
        let mut store = Store::new(Arc::new(Frozen));
        assert!(matches!(
            store.sign_in(&AnonymousIdentity),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn login_picks_the_canned_profile() {
        let admin = FixtureIdentity::login(true).current_user().unwrap();
        assert!(admin.is_admin);
        assert_eq!(admin.id, "admin-user-01");

        let member = FixtureIdentity::login(false).current_user().unwrap();
        assert!(!member.is_admin);
        assert!(member.favorites.contains("3"));
    }

    #[test]
    fn fixture_user_is_registered_once() {
        let mut store = Store::new(Arc::new(Frozen));
        let provider = FixtureIdentity::member();
        store.sign_in(&provider).unwrap();
        store.sign_in(&provider).unwrap();
        assert_eq!(store.users().len(), 1);
        assert_eq!(store.users()[0].name, "RecipeLover");
    }
}
