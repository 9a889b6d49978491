//! Profile document collaborator.
//!
//! Profiles live in an external document store keyed by user id. Failures
//! here never affect gameplay; the display name only drives a UI prompt.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use super::IdentityProvider;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("No profile exists for user {0}")]
    NotFound(String),

    #[error("Profile store unavailable: {0}")]
    Backend(String),
}

/// The stored user document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    pub email: Option<String>,
    pub name: String,
    pub total_xp: u64,
    /// Unix millis
    pub created_at: i64,
}

/// A freshly authenticated user, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
}

pub trait ProfileStore {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, ProfileError>;

    fn put_profile(&self, profile: UserProfile) -> Result<(), ProfileError>;

    /// Update only the display name of an existing profile.
    fn save_display_name(&self, user_id: &str, name: &str) -> Result<(), ProfileError>;
}

/// Write a blank profile for `user` unless one already exists.
/// Returns whether a profile was created.
pub fn create_user_if_missing<S: ProfileStore + ?Sized>(
    store: &S,
    user: &AuthUser,
    now_ms: i64,
) -> Result<bool, ProfileError> {
    if store.get_profile(&user.uid)?.is_some() {
        return Ok(false);
    }
    store.put_profile(UserProfile {
        uid: user.uid.clone(),
        email: user.email.clone(),
        name: String::new(),
        total_xp: 0,
        created_at: now_ms,
    })?;
    Ok(true)
}

/// Save the display name for whoever is signed in.
/// Returns `Ok(false)` without touching the store when nobody is.
pub fn save_player_name<I, S>(identity: &I, store: &S, name: &str) -> Result<bool, ProfileError>
where
    I: IdentityProvider + ?Sized,
    S: ProfileStore + ?Sized,
{
    let Some(user_id) = identity.current_user_id() else {
        debug!("No signed-in user, skipping display name save");
        return Ok(false);
    };
    store.save_display_name(&user_id, name)?;
    Ok(true)
}

/// Profile store held in memory.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: Mutex<HashMap<String, UserProfile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, UserProfile>>, ProfileError> {
        self.profiles
            .lock()
            .map_err(|_| ProfileError::Backend("profile store lock poisoned".to_string()))
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, ProfileError> {
        Ok(self.lock()?.get(user_id).cloned())
    }

    fn put_profile(&self, profile: UserProfile) -> Result<(), ProfileError> {
        self.lock()?.insert(profile.uid.clone(), profile);
        Ok(())
    }

    fn save_display_name(&self, user_id: &str, name: &str) -> Result<(), ProfileError> {
        let mut profiles = self.lock()?;
        let profile = profiles
            .get_mut(user_id)
            .ok_or_else(|| ProfileError::NotFound(user_id.to_string()))?;
        profile.name = name.to_string();
        Ok(())
    }
}
