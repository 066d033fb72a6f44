use crate::dto::input::{ContentKind, InteractionKind};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Aggregated representation of all interactions of one kind
/// on one content item.
///
/// The id is deterministic (`{kind}-group-{content_id}`), so a group
/// keeps its identity across repeated aggregations even though groups
/// themselves are recomputed on every fetch and never persisted.
///
#[derive(Debug, Clone, Serialize)]
pub struct NotificationGroup {
    pub id: String,
    pub kind: InteractionKind,
    pub title: String,
    pub message: String,
    pub content_id: String,
    pub content_kind: ContentKind,
    pub latest_actor: NotificationActor,
    /// Latest member's creation time, used for cross-group ordering
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Sorted descending by created_at; `latest_actor` mirrors members[0]
    pub members: Vec<GroupMember>,
    pub read: bool,
}

impl NotificationGroup {
    pub fn group_id(kind: InteractionKind, content_id: &str) -> String {
        format!("{}-group-{}", kind.as_ref(), content_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupMember {
    pub interaction_id: String,
    pub actor: NotificationActor,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

///
/// Display-ready actor. `id` is missing when the profile was deleted,
/// the name and avatar fields always carry usable fallbacks.
///
#[derive(Debug, Clone, Serialize)]
pub struct NotificationActor {
    pub id: Option<Uuid>,
    pub display_name: String,
    pub avatar_url: String,
    pub verified: bool,
}
