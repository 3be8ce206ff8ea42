// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selection of the single "what to work on next" item.
//!
//! First match wins: groups are visited in order, and within a group an
//! in-progress item beats the first pending one. There is no scoring.

use serde::Serialize;

use crate::backlog::{WorkGroup, WorkItem};

/// The item a group would hand out next, if any.
pub fn next_item(group: &WorkGroup) -> Option<&WorkItem> {
    group
        .pending
        .iter()
        .find(|item| item.is_in_progress())
        .or_else(|| group.pending.first())
}

/// Outcome of [`recommend`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    Next { group_id: String, item: WorkItem },
    /// Active groups exist but none has a pending item.
    NothingPending,
    /// There are no active groups at all.
    NoActiveGroups,
}

impl Recommendation {
    pub fn item(&self) -> Option<&WorkItem> {
        match self {
            Recommendation::Next { item, .. } => Some(item),
            _ => None,
        }
    }
}

/// Picks the recommendation for an ordered list of active groups.
pub fn recommend(groups: &[WorkGroup]) -> Recommendation {
    if groups.is_empty() {
        return Recommendation::NoActiveGroups;
    }
    groups
        .iter()
        .find_map(|group| {
            next_item(group).map(|item| Recommendation::Next {
                group_id: group.id.clone(),
                item: item.clone(),
            })
        })
        .unwrap_or(Recommendation::NothingPending)
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
