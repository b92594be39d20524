//! Registration, language preference and the 24 hour trial.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::catalog::Language;
use crate::config::{ConfigProvider, ConfigProviderExt};
use crate::{Error, Result};

pub const LANGUAGE_KEY: &str = "ai_hub_lang";
pub const USER_KEY: &str = "ai_hub_user";
/// Registration instant in epoch milliseconds.
pub const REGISTERED_AT_KEY: &str = "ai_hub_reg_date";
pub const IS_PAID_KEY: &str = "ai_hub_is_paid";

pub const TRIAL_HOURS: i64 = 24;

const PROFILE_KEYS: [&str; 4] = [LANGUAGE_KEY, USER_KEY, REGISTERED_AT_KEY, IS_PAID_KEY];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrialStatus {
    Unregistered,
    /// Paid accounts never expire.
    Unlimited,
    Active {
        #[serde(serialize_with = "serialize_secs")]
        remaining: TimeDelta,
    },
    Expired,
}

fn serialize_secs<S: serde::Serializer>(
    delta: &TimeDelta,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_i64(delta.num_seconds())
}

impl TrialStatus {
    /// Trial state at `now` for a registration made at `registered_at`.
    pub fn compute(registered_at: Option<DateTime<Utc>>, paid: bool, now: DateTime<Utc>) -> Self {
        if paid {
            return Self::Unlimited;
        }
        let Some(ends_at) =
            registered_at.and_then(|at| at.checked_add_signed(TimeDelta::hours(TRIAL_HOURS)))
        else {
            return Self::Unregistered;
        };

        let remaining = ends_at - now;
        if remaining <= TimeDelta::zero() {
            Self::Expired
        } else {
            Self::Active { remaining }
        }
    }

    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Unlimited | Self::Active { .. })
    }

    pub fn label(&self, language: Language) -> String {
        match (self, language) {
            (Self::Active { remaining }, _) => format_remaining(*remaining),
            (Self::Unlimited, Language::Es) => "Ilimitado".into(),
            (Self::Unlimited, Language::En) => "Unlimited".into(),
            (Self::Expired, Language::Es) => "Expirado".into(),
            (Self::Expired, Language::En) => "Expired".into(),
            (Self::Unregistered, Language::Es) => "Sin registro".into(),
            (Self::Unregistered, Language::En) => "Not registered".into(),
        }
    }
}

impl fmt::Display for TrialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(Language::En))
    }
}

/// `"<h>h <m>m"`, both floored.
pub fn format_remaining(remaining: TimeDelta) -> String {
    let minutes = remaining.num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Persisted user profile. Every read falls back to a default.
#[derive(Clone)]
pub struct Profile {
    store: Arc<dyn ConfigProvider>,
}

impl Profile {
    pub fn new(store: Arc<dyn ConfigProvider>) -> Self {
        Self { store }
    }

    pub async fn language(&self) -> Language {
        self.store.get_parsed(LANGUAGE_KEY).await.unwrap_or_default()
    }

    pub async fn set_language(&self, language: Language) -> Result<()> {
        self.store.set_raw(LANGUAGE_KEY, language.code()).await?;
        Ok(())
    }

    pub async fn user(&self) -> Option<String> {
        self.store
            .get_parsed::<String>(USER_KEY)
            .await
            .filter(|u| !u.is_empty())
    }

    /// Absent, zero and unparseable timestamps all mean unregistered.
    pub async fn registered_at(&self) -> Option<DateTime<Utc>> {
        self.store
            .get_parsed::<i64>(REGISTERED_AT_KEY)
            .await
            .filter(|ms| *ms > 0)
            .and_then(DateTime::from_timestamp_millis)
    }

    pub async fn is_paid(&self) -> bool {
        self.store.get_parsed::<String>(IS_PAID_KEY).await.as_deref() == Some("true")
    }

    pub async fn register(&self, email: &str, now: DateTime<Utc>) -> Result<()> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(Error::InvalidRequest(format!("invalid email address: {:?}", email)));
        }

        self.store.set_raw(USER_KEY, email).await?;
        self.store
            .set_raw(REGISTERED_AT_KEY, &now.timestamp_millis().to_string())
            .await?;
        tracing::info!(user = email, "Registered profile");
        Ok(())
    }

    pub async fn set_paid(&self) -> Result<()> {
        self.store.set_raw(IS_PAID_KEY, "true").await?;
        Ok(())
    }

    pub async fn trial(&self, now: DateTime<Utc>) -> TrialStatus {
        TrialStatus::compute(self.registered_at().await, self.is_paid().await, now)
    }

    /// Forget the profile. The cached logo is kept.
    pub async fn clear(&self) -> Result<()> {
        for key in PROFILE_KEYS {
            self.store.delete(key).await?;
        }
        Ok(())
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("store", &self.store.name())
            .finish()
    }
}
