//! Issue composition from a validated entry.

use indoc::formatdoc;

use super::model::Entry;
use crate::infra::github::NewIssue;

/// Label that marks issues filed through the registry form.
pub const ISSUE_LABEL: &str = "ai-initiative";

const TECH_PLACEHOLDER: &str = "Not specified";

/// Render the issue body. Every section is always present.
pub fn compose_body(entry: &Entry<'_>) -> String {
    let tech = entry
        .tech
        .filter(|t| !t.is_empty())
        .unwrap_or(TECH_PLACEHOLDER);

    formatdoc! {"
        **Maturity:** {maturity}
        **Ministry:** {ministry}

        **Problem Statement:**
        {problem}

        **Project Description:**
        {description}

        **Tech:**
        {tech}

        **Contact:** {contact}",
        maturity = entry.maturity,
        ministry = entry.ministry,
        problem = entry.problem,
        description = entry.description,
        contact = entry.contact,
    }
}

/// Build the issue creation payload for an entry.
pub fn compose_issue(entry: &Entry<'_>) -> NewIssue {
    NewIssue {
        title: entry.title.to_string(),
        body: compose_body(entry),
        labels: vec![ISSUE_LABEL.to_string()],
    }
}
