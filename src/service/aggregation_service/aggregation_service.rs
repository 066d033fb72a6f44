use crate::dto::{input, output};

#[cfg_attr(test, mockall::automock)]
pub trait AggregationService: Send + Sync {
    ///
    /// Groups raw interaction records into one [output::NotificationGroup]
    /// per (kind, content item) pair with ≥1 interaction.
    ///
    /// Pure: identical input always yields identical groups. Every group
    /// emerges with `read = false`; read status is assigned later during
    /// reconciliation.
    ///
    fn aggregate(&self, content: &[input::ContentItem]) -> Vec<output::NotificationGroup>;
}
