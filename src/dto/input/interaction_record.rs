use super::Actor;
use serde::Deserialize;
use strum::AsRefStr;
use time::OffsetDateTime;

///
/// One like or comment left by an actor on a content item.
/// `actor` is missing when the profile was deleted after the interaction,
/// `text` is only present on comments.
///
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionRecord {
    pub id: String,
    pub kind: InteractionKind,
    pub actor: Option<Actor>,
    pub text: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Deserialize, serde::Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Like,
    Comment,
}
