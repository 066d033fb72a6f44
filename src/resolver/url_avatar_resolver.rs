use super::avatar_resolver::AvatarResolver;
use crate::dto::input::AvatarSource;

pub struct UrlAvatarResolver {
    asset_base_url: String,
    placeholder_url: String,
}

impl UrlAvatarResolver {
    pub fn new(asset_base_url: String, placeholder_url: String) -> Self {
        Self {
            asset_base_url,
            placeholder_url,
        }
    }
}

impl AvatarResolver for UrlAvatarResolver {
    fn resolve(&self, avatar: Option<&AvatarSource>) -> String {
        match avatar {
            Some(AvatarSource::Url(url)) if !url.is_empty() => url.clone(),
            Some(AvatarSource::AssetRef(reference)) if !reference.is_empty() => {
                format!("{}/{}", self.asset_base_url.trim_end_matches('/'), reference)
            }
            _ => self.placeholder_url.clone(),
        }
    }
}
