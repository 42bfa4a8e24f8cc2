//! Select-dropdown projections for the two PM target selectors.
//!
//! The update-PM selector lists every machine; the complete-PM selector
//! lists only machines whose PM period is set, because a PM cannot be
//! marked complete before a period exists. Both start with a placeholder
//! option carrying an empty value.

use crate::entities::MachineRecord;
use crate::view::table::escape_html;

/// Placeholder label shown before a machine is selected.
pub const PLACEHOLDER_LABEL: &str = "Pilih Id Msn";

/// One `<option>` of a select dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value; empty for the placeholder
    pub value: String,
    /// Visible label
    pub label: String,
}

impl SelectOption {
    fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: PLACEHOLDER_LABEL.to_string(),
        }
    }

    fn for_machine(machine: &MachineRecord) -> Self {
        Self {
            value: machine.id_msn.clone(),
            label: machine.id_msn.clone(),
        }
    }
}

/// Options for the update-PM target: the placeholder, then one option per
/// record in store order.
#[must_use]
pub fn update_pm_options(machines: &[MachineRecord]) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::placeholder()];
    options.extend(machines.iter().map(SelectOption::for_machine));
    options
}

/// Options for the complete-PM target: the placeholder, then only records
/// with a non-empty PM period.
#[must_use]
pub fn complete_pm_options(machines: &[MachineRecord]) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::placeholder()];
    options.extend(
        machines
            .iter()
            .filter(|machine| machine.has_pm_period())
            .map(SelectOption::for_machine),
    );
    options
}

/// Renders a list of options as markup.
#[must_use]
pub fn render_options(options: &[SelectOption]) -> String {
    let mut markup = String::new();
    for option in options {
        markup.push_str(&format!(
            "<option value=\"{}\">{}</option>",
            escape_html(&option.value),
            escape_html(&option.label)
        ));
    }
    markup
}
