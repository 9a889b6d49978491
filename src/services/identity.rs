//! Identity collaborator. The game only needs to know who is signed in.

use std::sync::RwLock;

pub trait IdentityProvider {
    /// Stable id of the signed-in user, if any.
    fn current_user_id(&self) -> Option<String>;
}

/// Identity held in memory; sign-in and sign-out just swap the id.
#[derive(Debug, Default)]
pub struct LocalIdentity {
    user_id: RwLock<Option<String>>,
}

impl LocalIdentity {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: &str) -> Self {
        Self {
            user_id: RwLock::new(Some(user_id.to_string())),
        }
    }

    pub fn sign_in(&self, user_id: &str) {
        if let Ok(mut guard) = self.user_id.write() {
            *guard = Some(user_id.to_string());
        }
    }

    pub fn sign_out(&self) {
        if let Ok(mut guard) = self.user_id.write() {
            *guard = None;
        }
    }
}

impl IdentityProvider for LocalIdentity {
    fn current_user_id(&self) -> Option<String> {
        self.user_id.read().ok().and_then(|guard| guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        let identity = LocalIdentity::signed_out();
        assert_eq!(identity.current_user_id(), None);
        identity.sign_in("uid-1");
        assert_eq!(identity.current_user_id().as_deref(), Some("uid-1"));
        identity.sign_out();
        assert_eq!(identity.current_user_id(), None);
    }
}
