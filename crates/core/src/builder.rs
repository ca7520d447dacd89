//! Request-builder view-model.
//!
//! A [`RequestDraft`] is the serializable working state for assembling a
//! document request: a list of candidate topics that can be toggled,
//! re-prioritized, filtered, and grouped before being converted into the
//! nested create payload. All operations are pure state edits or views;
//! nothing here touches the store.

use serde::{Deserialize, Serialize};

use crate::document_request::{
    validate_category_name, validate_priority, validate_project_name, validate_topic_description,
    validate_topic_label, validate_topic_name, PriorityTier, STATUS_DRAFT,
};
use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Draft state
// ---------------------------------------------------------------------------

/// One candidate topic in a draft. Topics are addressed by `name`, which is
/// unique within a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftTopic {
    pub category: String,
    pub name: String,
    pub label: String,
    pub description: String,
    pub priority: String,
    pub selected: bool,
    pub has_field_requirements: bool,
}

/// Topic filter for the builder list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicFilter {
    All,
    Selected,
    NotSelected,
}

impl TopicFilter {
    /// Return the query-string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Selected => "selected",
            Self::NotSelected => "non-selected",
        }
    }

    /// Parse from a string, returning an error for unknown filters.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "all" => Ok(Self::All),
            "selected" => Ok(Self::Selected),
            "non-selected" => Ok(Self::NotSelected),
            other => Err(CoreError::Validation(format!(
                "Unknown topic filter: '{other}'. Valid filters: all, selected, non-selected"
            ))),
        }
    }
}

/// Working state for assembling a document request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDraft {
    pub topics: Vec<DraftTopic>,
}

impl Default for RequestDraft {
    fn default() -> Self {
        Self {
            topics: default_topics(),
        }
    }
}

impl RequestDraft {
    /// Create a draft seeded with the default topic catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection state of the named topic.
    ///
    /// Returns the new state, or `None` when no topic has that name.
    pub fn toggle_topic(&mut self, name: &str) -> Option<bool> {
        let topic = self.topics.iter_mut().find(|t| t.name == name)?;
        topic.selected = !topic.selected;
        Some(topic.selected)
    }

    /// Set the priority tier of the named topic.
    pub fn set_priority(&mut self, name: &str, priority: &str) -> Result<(), CoreError> {
        let tier = PriorityTier::from_str(priority)?;
        let topic = self
            .topics
            .iter_mut()
            .find(|t| t.name == name)
            .ok_or_else(|| CoreError::Validation(format!("No draft topic named '{name}'")))?;
        topic.priority = tier.as_str().to_string();
        Ok(())
    }

    /// Topics matching the filter, in draft order.
    pub fn filtered(&self, filter: TopicFilter) -> Vec<&DraftTopic> {
        self.topics
            .iter()
            .filter(|t| match filter {
                TopicFilter::All => true,
                TopicFilter::Selected => t.selected,
                TopicFilter::NotSelected => !t.selected,
            })
            .collect()
    }

    /// Topics grouped by category, categories in first-seen order.
    pub fn by_category(&self) -> Vec<(&str, Vec<&DraftTopic>)> {
        let mut groups: Vec<(&str, Vec<&DraftTopic>)> = Vec::new();
        for topic in &self.topics {
            match groups.iter_mut().find(|(c, _)| *c == topic.category) {
                Some((_, members)) => members.push(topic),
                None => groups.push((topic.category.as_str(), vec![topic])),
            }
        }
        groups
    }

    /// Number of selected topics.
    pub fn selected_count(&self) -> usize {
        self.topics.iter().filter(|t| t.selected).count()
    }

    /// Total number of topics in the draft.
    pub fn total_count(&self) -> usize {
        self.topics.len()
    }

    /// Convert the draft into the nested create payload.
    ///
    /// Only selected topics are included; every topic is submitted with
    /// status `Draft` semantics and an empty field list. Fails with a
    /// Validation error when nothing is selected or any text exceeds its
    /// write-boundary limit.
    pub fn into_create_request(
        self,
        project_id: Option<DbId>,
        project_name: &str,
    ) -> Result<RequestSubmission, CoreError> {
        validate_project_name(project_name)?;

        let selected: Vec<DraftTopic> = self.topics.into_iter().filter(|t| t.selected).collect();
        if selected.is_empty() {
            return Err(CoreError::Validation(
                "At least one topic must be selected".to_string(),
            ));
        }

        let mut topics = Vec::with_capacity(selected.len());
        for topic in selected {
            validate_category_name(&topic.category)?;
            validate_topic_name(&topic.name)?;
            validate_topic_label(&topic.label)?;
            validate_topic_description(&topic.description)?;
            validate_priority(&topic.priority)?;
            topics.push(TopicSubmission {
                category_name: topic.category,
                topic_name: topic.name,
                topic_label: topic.label,
                description: topic.description,
                priority: topic.priority,
                is_selected: true,
                has_field_requirements: topic.has_field_requirements,
                fields: Vec::new(),
            });
        }

        Ok(RequestSubmission {
            project_id,
            project_name: project_name.to_string(),
            status: STATUS_DRAFT.to_string(),
            topics,
        })
    }
}

// ---------------------------------------------------------------------------
// Submission payload
// ---------------------------------------------------------------------------

/// Nested create payload produced by [`RequestDraft::into_create_request`].
///
/// Serializes to the exact wire shape `POST /api/document-requests` accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSubmission {
    pub project_id: Option<DbId>,
    pub project_name: String,
    pub status: String,
    pub topics: Vec<TopicSubmission>,
}

/// One topic inside a [`RequestSubmission`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSubmission {
    pub category_name: String,
    pub topic_name: String,
    pub topic_label: String,
    pub description: String,
    pub priority: String,
    pub is_selected: bool,
    pub has_field_requirements: bool,
    pub fields: Vec<FieldSubmission>,
}

/// One field requirement inside a [`TopicSubmission`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSubmission {
    pub field_name: String,
    pub field_type: String,
    pub is_required: bool,
    pub default_value: Option<String>,
    pub options: Option<String>,
}

// ---------------------------------------------------------------------------
// Default catalog
// ---------------------------------------------------------------------------

fn seed(
    category: &str,
    name: &str,
    label: &str,
    description: &str,
    priority: &str,
    selected: bool,
    has_field_requirements: bool,
) -> DraftTopic {
    DraftTopic {
        category: category.to_string(),
        name: name.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        priority: priority.to_string(),
        selected,
        has_field_requirements,
    }
}

/// The default topic catalog a new draft starts from.
pub fn default_topics() -> Vec<DraftTopic> {
    vec![
        seed(
            "General",
            "Personnel Data",
            "Personnel",
            "HR Data - Employee census and payroll information, see field requirement for more detail",
            "Priority",
            false,
            false,
        ),
        seed(
            "General",
            "Contingent Labor",
            "Labor",
            "Independent contractors HR data, see field requirement for more detail",
            "Tier 2",
            true,
            true,
        ),
        seed(
            "General",
            "Open Positions",
            "Openings",
            "Open positions list see field requirement for more details",
            "Priority",
            false,
            false,
        ),
        seed(
            "Human Resources",
            "Vendor Spend for Service Providers KPIs",
            "VendorSpendKPI",
            "Vendor spend for HR services (recruiting, outsourced HR functions and processes, IT)",
            "Priority",
            false,
            false,
        ),
        seed(
            "Human Resources",
            "Recruiting Service Providers",
            "Recruiting Ext",
            "Recruiting & staffing vendors utilized by function, annual placements, costs & standard pricing agreements. Other outsourced vendors used for payroll, benefits, training etc.",
            "Tier 3",
            true,
            true,
        ),
        seed(
            "Human Resources",
            "HR workflows",
            "HR",
            "Vendor spend for HR services (recruiting, outsourced HR functions and processes, IT)",
            "Tier 2",
            true,
            true,
        ),
        seed(
            "Financial Reports",
            "FY25 Plan",
            "FY25",
            "Budget & YTD, at the lowest level of detail (by cost center, be department, spend type)",
            "Tier 3",
            true,
            true,
        ),
        seed(
            "Financial Reports",
            "Technology Capital Expense Detail",
            "Tech Expense Det",
            "Technology capex spending by location/category (actual v budget) for past 3 years, and 3 year capex plan",
            "Tier 1",
            true,
            true,
        ),
        seed(
            "Financial Reports",
            "Chart of Accounts",
            "Acc Chart",
            "Complete chart of accounts with descriptions",
            "Priority",
            false,
            false,
        ),
        seed(
            "3rd party vendor",
            "Vendor List",
            "Vendors",
            "List of all vendors with contact information",
            "Priority",
            false,
            false,
        ),
        seed(
            "Other files",
            "Organizational Charts",
            "Org Charts",
            "Current organizational structure diagrams",
            "Tier 1",
            false,
            false,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- catalog ------------------------------------------------------------

    #[test]
    fn default_catalog_has_eleven_topics() {
        let draft = RequestDraft::new();
        assert_eq!(draft.total_count(), 11);
        assert_eq!(draft.selected_count(), 5);
    }

    #[test]
    fn catalog_names_are_unique() {
        let topics = default_topics();
        let mut names: Vec<&str> = topics.iter().map(|t| t.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), topics.len());
    }

    // -- toggle -------------------------------------------------------------

    #[test]
    fn toggle_flips_selection() {
        let mut draft = RequestDraft::new();
        assert_eq!(draft.toggle_topic("Personnel Data"), Some(true));
        assert_eq!(draft.selected_count(), 6);
        assert_eq!(draft.toggle_topic("Personnel Data"), Some(false));
        assert_eq!(draft.selected_count(), 5);
    }

    #[test]
    fn toggle_unknown_topic_returns_none() {
        let mut draft = RequestDraft::new();
        assert_eq!(draft.toggle_topic("Nonexistent"), None);
    }

    // -- set_priority ---------------------------------------------------------

    #[test]
    fn set_priority_updates_topic() {
        let mut draft = RequestDraft::new();
        draft.set_priority("Vendor List", "Tier 1").unwrap();
        let topic = draft.topics.iter().find(|t| t.name == "Vendor List").unwrap();
        assert_eq!(topic.priority, "Tier 1");
    }

    #[test]
    fn set_priority_rejects_unknown_tier() {
        let mut draft = RequestDraft::new();
        assert!(draft.set_priority("Vendor List", "Tier 9").is_err());
    }

    #[test]
    fn set_priority_rejects_unknown_topic() {
        let mut draft = RequestDraft::new();
        assert!(draft.set_priority("Nonexistent", "Tier 1").is_err());
    }

    // -- views --------------------------------------------------------------

    #[test]
    fn filtered_partitions_topics() {
        let draft = RequestDraft::new();
        assert_eq!(draft.filtered(TopicFilter::All).len(), 11);
        assert_eq!(draft.filtered(TopicFilter::Selected).len(), 5);
        assert_eq!(draft.filtered(TopicFilter::NotSelected).len(), 6);
    }

    #[test]
    fn by_category_keeps_first_seen_order() {
        let draft = RequestDraft::new();
        let groups = draft.by_category();
        let categories: Vec<&str> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec![
                "General",
                "Human Resources",
                "Financial Reports",
                "3rd party vendor",
                "Other files"
            ]
        );
        assert_eq!(groups[0].1.len(), 3);
        assert_eq!(groups[2].1.len(), 3);
    }

    #[test]
    fn topic_filter_round_trips() {
        for filter in [TopicFilter::All, TopicFilter::Selected, TopicFilter::NotSelected] {
            assert_eq!(TopicFilter::from_str(filter.as_str()).unwrap(), filter);
        }
        assert!(TopicFilter::from_str("none").is_err());
    }

    // -- into_create_request --------------------------------------------------

    #[test]
    fn submission_includes_only_selected_topics() {
        let draft = RequestDraft::new();
        let submission = draft.into_create_request(Some(7), "Acme Corp").unwrap();
        assert_eq!(submission.project_id, Some(7));
        assert_eq!(submission.project_name, "Acme Corp");
        assert_eq!(submission.status, "Draft");
        assert_eq!(submission.topics.len(), 5);
        assert!(submission.topics.iter().all(|t| t.is_selected));
        assert!(submission.topics.iter().all(|t| t.fields.is_empty()));
    }

    #[test]
    fn submission_without_project_link() {
        let mut draft = RequestDraft::new();
        draft.toggle_topic("Vendor List");
        let submission = draft.into_create_request(None, "Standalone").unwrap();
        assert_eq!(submission.project_id, None);
        assert_eq!(submission.topics.len(), 6);
    }

    #[test]
    fn empty_selection_rejected() {
        let mut draft = RequestDraft::new();
        for name in [
            "Contingent Labor",
            "Recruiting Service Providers",
            "HR workflows",
            "FY25 Plan",
            "Technology Capital Expense Detail",
        ] {
            draft.toggle_topic(name);
        }
        assert_eq!(draft.selected_count(), 0);
        assert!(draft.into_create_request(Some(1), "Acme Corp").is_err());
    }

    #[test]
    fn empty_project_name_rejected() {
        let draft = RequestDraft::new();
        assert!(draft.into_create_request(Some(1), "").is_err());
    }

    #[test]
    fn submission_serializes_camel_case() {
        let draft = RequestDraft::new();
        let submission = draft.into_create_request(Some(3), "Acme Corp").unwrap();
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["projectId"], 3);
        assert_eq!(value["projectName"], "Acme Corp");
        assert_eq!(value["status"], "Draft");
        let topic = &value["topics"][0];
        assert_eq!(topic["categoryName"], "General");
        assert_eq!(topic["topicName"], "Contingent Labor");
        assert_eq!(topic["topicLabel"], "Labor");
        assert_eq!(topic["priority"], "Tier 2");
        assert_eq!(topic["isSelected"], true);
        assert_eq!(topic["hasFieldRequirements"], true);
        assert!(topic["fields"].as_array().unwrap().is_empty());
    }

    #[test]
    fn draft_round_trips_through_json() {
        let mut draft = RequestDraft::new();
        draft.toggle_topic("Chart of Accounts");
        let json = serde_json::to_string(&draft).unwrap();
        let restored: RequestDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, draft);
    }
}
