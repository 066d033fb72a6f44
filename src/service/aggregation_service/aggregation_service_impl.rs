use super::AggregationService;
use crate::{
    dto::{
        input::{self, Actor, ContentItem, InteractionKind, InteractionRecord},
        output::{GroupMember, NotificationActor, NotificationGroup},
    },
    resolver::AvatarResolver,
};
use std::{collections::HashSet, sync::Arc};

const MESSAGE_SNIPPET_MAX_CHARS: usize = 50;

pub struct AggregationServiceImpl {
    resolver: Arc<dyn AvatarResolver>,
}

impl AggregationServiceImpl {
    pub fn new(resolver: Arc<dyn AvatarResolver>) -> Self {
        Self { resolver }
    }

    fn build_group(&self, item: &ContentItem, kind: InteractionKind) -> Option<NotificationGroup> {
        // One member per distinct interaction
        let mut seen_interactions = HashSet::new();
        let mut records = item
            .interactions
            .iter()
            .filter(|record| record.kind == kind)
            .filter(|record| seen_interactions.insert(record.id.as_str()))
            .collect::<Vec<_>>();
        if records.is_empty() {
            return None;
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let latest = records[0];

        let members = records
            .iter()
            .map(|record| GroupMember {
                interaction_id: record.id.clone(),
                actor: self.display_actor(record.actor.as_ref()),
                created_at: record.created_at,
            })
            .collect::<Vec<_>>();

        let title = Self::build_title(kind, item, members.len());
        let message = Self::build_message(kind, item, latest, members.len());

        Some(NotificationGroup {
            id: NotificationGroup::group_id(kind, &item.id),
            kind,
            title,
            message,
            content_id: item.id.clone(),
            content_kind: item.kind,
            latest_actor: members[0].actor.clone(),
            timestamp: latest.created_at,
            members,
            read: false,
        })
    }

    fn display_actor(&self, actor: Option<&Actor>) -> NotificationActor {
        let display_name = actor
            .and_then(Self::full_name)
            .unwrap_or_else(|| "Unknown User".to_string());

        NotificationActor {
            id: actor.map(|actor| actor.id),
            display_name,
            avatar_url: self.resolver.resolve(actor.and_then(|a| a.avatar.as_ref())),
            verified: actor.map(|actor| actor.verified).unwrap_or(false),
        }
    }

    fn full_name(actor: &Actor) -> Option<String> {
        let name = [actor.first_name.as_deref(), actor.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        match name.is_empty() {
            true => None,
            false => Some(name),
        }
    }

    /// Name used inside title/message phrasing, as opposed to the member
    /// display name which falls back to "Unknown User"
    fn message_name(actor: Option<&Actor>) -> String {
        actor
            .and_then(Self::full_name)
            .unwrap_or_else(|| "Someone".to_string())
    }

    fn build_title(kind: InteractionKind, item: &ContentItem, member_count: usize) -> String {
        let content_word = item.kind.as_ref();

        match (kind, member_count) {
            (InteractionKind::Like, 1) => format!("New like on your {content_word}"),
            (InteractionKind::Like, _) => format!("Multiple likes on your {content_word}"),
            (InteractionKind::Comment, 1) => format!("New comment on your {content_word}"),
            (InteractionKind::Comment, _) => format!("Multiple comments on your {content_word}"),
        }
    }

    fn build_message(
        kind: InteractionKind,
        item: &ContentItem,
        latest: &InteractionRecord,
        member_count: usize,
    ) -> String {
        let content_word = item.kind.as_ref();
        let name = Self::message_name(latest.actor.as_ref());
        let others = member_count.saturating_sub(1);

        match kind {
            InteractionKind::Like => match member_count {
                1 => format!("{name} liked your {content_word}"),
                _ => format!("{name} and {others} others liked your {content_word}"),
            },
            InteractionKind::Comment => {
                let snippet = latest
                    .text
                    .as_deref()
                    .filter(|text| !text.is_empty())
                    .map(Self::snippet);

                match (member_count, snippet) {
                    (1, Some(snippet)) => format!("{name} commented: \"{snippet}\""),
                    (1, None) => format!("{name} commented on your {content_word}"),
                    (_, Some(snippet)) => {
                        format!("{name} and {others} others commented: \"{snippet}\"")
                    }
                    (_, None) => {
                        format!("{name} and {others} others commented on your {content_word}")
                    }
                }
            }
        }
    }

    fn snippet(text: &str) -> String {
        match text.chars().count() <= MESSAGE_SNIPPET_MAX_CHARS {
            true => text.to_string(),
            false => {
                let truncated = text.chars().take(MESSAGE_SNIPPET_MAX_CHARS).collect::<String>();
                format!("{truncated}...")
            }
        }
    }
}

impl AggregationService for AggregationServiceImpl {
    fn aggregate(&self, content: &[input::ContentItem]) -> Vec<NotificationGroup> {
        let groups = content
            .iter()
            .flat_map(|item| {
                [InteractionKind::Like, InteractionKind::Comment]
                    .into_iter()
                    .filter_map(|kind| self.build_group(item, kind))
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            content_count = content.len(),
            group_count = groups.len(),
            "aggregated interactions into groups",
        );

        groups
    }
}
