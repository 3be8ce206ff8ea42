// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot assembly.
//!
//! Combines active groups, blockers and probe reports into one ordered
//! document. The assembler is pure: identical inputs (including the
//! timestamps) produce byte-identical output.
//!
//! Section order is fixed: title, header notes, greeting, active sprint,
//! known blockers, infra, configured note sections, footer.

use serde::{Deserialize, Serialize};

use crate::backlog::WorkGroup;
use crate::clock::Timestamps;
use crate::document::{Block, Document};
use crate::probe::{ProbeReport, MUTED_SYMBOL};
use crate::recommend::{next_item, recommend, Recommendation};

/// Pending items listed per group in the sprint section.
pub const DEFAULT_MAX_PENDING: usize = 6;

/// Shown in place of a group's next item when it has none.
pub const NO_PENDING_TEXT: &str = "no pending stories";

/// Static reference notes supplied by configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notes {
    /// Quote lines under the title.
    pub header: Vec<String>,
    /// Extra bullets appended to the infra section (topology, state location).
    pub infra: Vec<String>,
    /// Titled sections placed before the footer.
    #[serde(rename = "section")]
    pub sections: Vec<NoteSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSection {
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Presentation knobs for [`assemble`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSettings {
    /// Name used in the greeting.
    pub user_name: String,
    /// Backlog file name quoted in empty-state messages.
    pub backlog_name: String,
    pub max_pending: usize,
    pub notes: Notes,
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        SnapshotSettings {
            user_name: "there".to_string(),
            backlog_name: "sprint.json".to_string(),
            max_pending: DEFAULT_MAX_PENDING,
            notes: Notes::default(),
        }
    }
}

/// The assembled snapshot: its inputs, derived values, and the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub stamps: Timestamps,
    pub groups: Vec<WorkGroup>,
    pub blockers: Vec<String>,
    pub probes: Vec<ProbeReport>,
    pub recommendation: Recommendation,
    pub infra_summary: String,
    pub document: Document,
}

impl Snapshot {
    pub fn render(&self) -> String {
        self.document.render()
    }
}

/// Builds the snapshot document.
pub fn assemble(
    groups: Vec<WorkGroup>,
    blockers: Vec<String>,
    probes: Vec<ProbeReport>,
    stamps: &Timestamps,
    settings: &SnapshotSettings,
) -> Snapshot {
    let recommendation = recommend(&groups);
    let infra_summary = infra_summary(&probes);

    let mut doc = Document::new();
    doc.push(Block::heading(1, format!("Session State — {}", stamps.utc)));
    doc.push(Block::Blank);
    if !settings.notes.header.is_empty() {
        doc.extend(settings.notes.header.iter().cloned().map(Block::Quote));
        doc.push(Block::Blank);
    }

    doc.push(Block::heading(2, "Greeting (paste verbatim — no exec needed)"));
    doc.push(Block::Fenced(greeting(
        &groups,
        &blockers,
        &recommendation,
        &infra_summary,
        stamps,
        settings,
    )));
    doc.push(Block::Blank);

    doc.push(Block::heading(2, "Active Sprint"));
    if groups.is_empty() {
        doc.push(Block::bullet("No active epics"));
    }
    for group in &groups {
        doc.push(Block::bullet(format!(
            "**{}** ({}): {}",
            group.id, group.status, group.title
        )));
        for item in group.pending.iter().take(settings.max_pending) {
            doc.push(Block::sub_bullet(format!(
                "{} `{}`: {}",
                item.id, item.status, item.title
            )));
        }
    }
    doc.push(Block::Blank);

    doc.push(Block::heading(2, "Known Blockers"));
    if blockers.is_empty() {
        doc.push(Block::bullet("None"));
    }
    doc.extend(blockers.iter().map(Block::bullet));
    doc.push(Block::Blank);

    doc.push(Block::heading(2, "Infra"));
    for report in &probes {
        doc.push(Block::bullet(format!("{}: {}", report.label, report.detail())));
    }
    doc.extend(settings.notes.infra.iter().map(Block::bullet));
    doc.push(Block::Blank);

    for section in &settings.notes.sections {
        doc.push(Block::heading(2, section.title.as_str()));
        doc.extend(section.lines.iter().map(Block::bullet));
        doc.push(Block::Blank);
    }

    doc.push(Block::Emphasis(format!("Generated at {}", stamps.utc)));

    Snapshot {
        stamps: stamps.clone(),
        groups,
        blockers,
        probes,
        recommendation,
        infra_summary,
        document: doc,
    }
}

fn greeting(
    groups: &[WorkGroup],
    blockers: &[String],
    recommendation: &Recommendation,
    infra_summary: &str,
    stamps: &Timestamps,
    settings: &SnapshotSettings,
) -> Vec<Block> {
    let mut lines = vec![
        Block::line(format!(
            "Hey {} 🧭 Context loaded — {}",
            settings.user_name, stamps.local
        )),
        Block::Blank,
        Block::line(format!("**Infra:** {}", infra_summary)),
        Block::Blank,
    ];

    if groups.is_empty() {
        lines.push(Block::line(format!(
            "**Active epics:** None — all epics complete or check {}",
            settings.backlog_name
        )));
    } else {
        lines.push(Block::line("**Active epics:**"));
        lines.extend(groups.iter().map(|group| {
            Block::bullet(format!(
                "`{}`: {} — next: {}",
                group.id,
                group.title,
                next_label(group)
            ))
        }));
    }
    lines.push(Block::Blank);
    lines.push(Block::line(format!(
        "**🔥 Recommended next:** {}",
        recommendation_text(recommendation, &settings.backlog_name)
    )));

    lines.push(Block::Blank);
    if blockers.is_empty() {
        lines.push(Block::line("**Blockers:** none"));
    } else {
        let noun = if blockers.len() == 1 { "item" } else { "items" };
        lines.push(Block::line(format!(
            "**Blockers:** {} {}",
            blockers.len(),
            noun
        )));
        lines.extend(blockers.iter().map(Block::bullet));
    }
    lines
}

/// `Prod ✅ | AiPipe 🚨`, skipping probes shown with the muted symbol.
pub fn infra_summary(probes: &[ProbeReport]) -> String {
    let parts: Vec<String> = probes
        .iter()
        .filter(|r| r.in_summary())
        .map(|r| format!("{} {}", r.label, r.symbol()))
        .collect();
    if parts.is_empty() {
        MUTED_SYMBOL.to_string()
    } else {
        parts.join(" | ")
    }
}

/// `S1 (in_progress)`, or [`NO_PENDING_TEXT`].
pub fn next_label(group: &WorkGroup) -> String {
    match next_item(group) {
        Some(item) => format!("{} ({})", item.id, item.status),
        None => NO_PENDING_TEXT.to_string(),
    }
}

/// The recommendation as shown after "Recommended next:".
pub fn recommendation_text(recommendation: &Recommendation, backlog_name: &str) -> String {
    match recommendation {
        Recommendation::Next { item, .. } => format!("`{}` — {}", item.id, item.title),
        Recommendation::NothingPending => {
            format!("No unblocked stories — check {}", backlog_name)
        }
        Recommendation::NoActiveGroups => {
            format!("Review {} for next priorities", backlog_name)
        }
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
