//! # playbooks-domain
//!
//! Pure domain model for playbook automation settings.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Playbook** automation config snapshot (owned by the server)
//! - Define **update intents** (sparse partial records sent to the gateway)
//! - Define **webhook rules** (URL pattern, entry and length limits)
//! - Define **Users** as seen by the invite list and owner picker
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod playbook;
pub mod update;
pub mod user;
pub mod webhook;
