//! View layer - pure projections of the machine store into markup.
//!
//! Rendering is total and idempotent: the same store contents always
//! produce byte-identical output. Nothing here touches the network or
//! mutates state, and nothing depends on a particular widget toolkit.

/// Select-dropdown projections for the update-PM and complete-PM targets
pub mod dropdown;
/// Machine table rendering
pub mod table;

pub use dropdown::{SelectOption, complete_pm_options, render_options, update_pm_options};
pub use table::render_table;
