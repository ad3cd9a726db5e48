use crate::application::{
    use_cases::state_store::StateStore, views::membership_summary::MembershipSummary,
};

use super::document::Document;

/// Draw the membership panel from the current record into `container_id`.
///
/// Returns false, without touching the page, when the container is absent.
pub fn render_membership_summary(
    document: &mut Document,
    store: &StateStore,
    container_id: &str,
) -> bool {
    if !document.has_container(container_id) {
        return false;
    }
    let summary = MembershipSummary::from_record(&store.load());
    document.replace_children(container_id, summary.render())
}
