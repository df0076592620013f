//! # gemba-core
//!
//! Core types, ID generation, and error types for Gemba.
//!
//! This crate provides the foundational types shared across all Gemba crates:
//! - Entity structs for the audit domain (questions, answers, audit records,
//!   corrective actions, schedules, goals)
//! - Status enums with state machine transitions
//! - The standard 5S checklist catalog and its traversal helpers
//! - ID prefix constants and generation
//! - Scoring thresholds and corrective-action deadline policy
//! - Cross-cutting error types
//! - Trail operation envelope for JSONL persistence
//! - Reporting projection and response types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod policy;
pub mod responses;
pub mod trail;
