use serde::Deserialize;
use uuid::Uuid;

///
/// Denormalized profile of the user performing an interaction,
/// as carried on each interaction record by the content repository
///
#[derive(Debug, Clone, Deserialize)]
pub struct Actor {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<AvatarSource>,
    pub verified: bool,
}

///
/// Avatar as delivered by the repository: either a directly displayable
/// URL or an opaque asset reference that has to be resolved externally
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarSource {
    Url(String),
    AssetRef(String),
}
