use super::{AvatarSource, InteractionRecord};
use serde::Deserialize;
use strum::AsRefStr;

///
/// A post or video owned by the subject user together with the
/// interactions the repository nested under it
///
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub kind: ContentKind,
    pub title: Option<String>,
    pub thumbnail: Option<AvatarSource>,
    pub interactions: Vec<InteractionRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Deserialize, serde::Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Video,
}
