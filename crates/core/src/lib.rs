// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! brief-core: aggregation and probing behind the `brief` session snapshot.
//!
//! This crate turns a loosely-structured backlog, a blockers list and a set
//! of live health probes into one ordered snapshot document. Every source may
//! be missing, malformed or slow; the pipeline still produces a complete
//! document.

pub mod backlog;
pub mod blockers;
pub mod clock;
pub mod coordinator;
pub mod document;
pub mod error;
pub mod memory;
pub mod probe;
pub mod recommend;
pub mod schema;
pub mod snapshot;

pub use backlog::{WorkGroup, WorkItem};
pub use clock::{LocalZone, Timestamps};
pub use coordinator::Coordinator;
pub use document::{Block, Document};
pub use error::{Error, Result};
pub use probe::{
    FailureDisplay, Health, HttpProbe, Probe, ProbeKind, ProbeReport, ProbeResult, ProcessProbe,
};
pub use recommend::Recommendation;
pub use schema::Schema;
pub use snapshot::{assemble, NoteSection, Notes, Snapshot, SnapshotSettings};
