//! External collaborators: identity and profile storage.

mod identity;
mod profile;

pub use identity::{IdentityProvider, LocalIdentity};
pub use profile::{
    create_user_if_missing, save_player_name, AuthUser, MemoryProfileStore, ProfileError,
    ProfileStore, UserProfile,
};
