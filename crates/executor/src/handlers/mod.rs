//! Command handlers organized by category.
//!
//! | Module | Commands | Backing |
//! |--------|----------|---------|
//! | `issue` | 6 | Form validator + mutation applier, issue reads |
//! | `assignee` | 3 | Assignee registry |
//! | `command` | 1 | Command resolution orchestrator |

pub mod assignee;
pub mod command;
pub mod issue;
