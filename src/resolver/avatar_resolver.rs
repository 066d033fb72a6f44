use crate::dto::input::AvatarSource;

///
/// Normalizes an avatar reference to a displayable URL.
/// Always returns something usable, falling back to a placeholder
/// when the reference is missing or empty.
///
pub trait AvatarResolver: Send + Sync {
    fn resolve(&self, avatar: Option<&AvatarSource>) -> String;
}
