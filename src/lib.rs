//! `PmConsole` - an admin panel for machine preventive-maintenance records
//!
//! This crate provides a toolkit-independent front-end for a PM tracking
//! server: listing and searching machines, creating and editing records,
//! scheduling and completing PM cycles, free-text notes, bulk spreadsheet
//! import, and PDF export. All persistence lives behind the remote API;
//! the client keeps only a replace-all cache of the last fetched list.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    // Documentation - missing docs should be added gradually
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Application shell binding store, gateway, controllers, and notifier
pub mod app;
/// Configuration management for the API endpoint and export settings
pub mod config;
/// Two-step confirmation flow for destructive operations
pub mod confirm;
/// Interactive console front-end
pub mod console;
/// Form controllers, one per modal dialog
pub mod controllers;
/// Wire-level data shapes exchanged with the PM API server
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Remote data gateway over the PM REST API
pub mod gateway;
/// Single-slot transient notifications
pub mod notify;
/// Client-side machine cache with replace-all semantics
pub mod store;
/// Pure state-to-markup rendering
pub mod view;

#[cfg(test)]
pub mod test_utils;
