//! Core types for Sprintflow
//!
//! This crate defines the foundational types used throughout the system:
//! - IssueId, Status, Priority, HttpMethod: Identifier and closed enums
//! - Issue, Description: The stored record
//! - FieldPatch, DescriptionPatch: Field-level partial updates
//! - Action, NewIssue, IssueUpdate: Validated mutations
//! - IdGenerator: Sequential `PREFIX-NNN` minting
//! - Sentinel resolution: UI placeholders to "absent"
//! - Clock: Injectable time source
//! - ValidationReport: Aggregated field-keyed problems
//! - Error: Domain parse errors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod clock;
pub mod error;
pub mod id_gen;
pub mod issue;
pub mod patch;
pub mod sentinel;
pub mod types;
pub mod validation;

pub use action::{Action, IssueUpdate, NewIssue};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use id_gen::IdGenerator;
pub use issue::{parse_labels, Description, Issue};
pub use patch::{image_patch, DescriptionPatch, FieldPatch};
pub use sentinel::{
    resolve, resolve_opt, SentinelSet, INTERPRETER_UNASSIGNED, METHOD_NOT_APPLICABLE_SENTINEL,
    UNASSIGNED_SENTINEL,
};
pub use types::{HttpMethod, IssueId, Priority, Status};
pub use validation::{FieldProblem, ValidationReport};
