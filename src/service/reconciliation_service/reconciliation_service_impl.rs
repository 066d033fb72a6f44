use super::ReconciliationService;
use crate::dto::output::NotificationGroup;
use std::collections::HashSet;

pub struct ReconciliationServiceImpl;

impl ReconciliationServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReconciliationServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationService for ReconciliationServiceImpl {
    fn reconcile(
        &self,
        mut groups: Vec<NotificationGroup>,
        read_group_ids: &HashSet<String>,
    ) -> Vec<NotificationGroup> {
        for group in &mut groups {
            group.read = group.read || read_group_ids.contains(&group.id);
        }

        // Tie-break on id keeps equal timestamps in a stable order
        groups.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));

        groups
    }
}
