//! Machine table rendering.
//!
//! Projects the store into an HTML table body: one row per record, with the
//! identifier cell marked clickable (it opens the notes editor) and the
//! status rendered as a badge whose style class is the lower-cased status
//! text. All field values are escaped.

use crate::entities::MachineRecord;

/// Column headers, in table order.
pub const TABLE_HEADERS: [&str; 8] = [
    "No",
    "Id Msn",
    "Alamat",
    "Pengelola",
    "Periode PM",
    "Tgl Selesai PM",
    "Status",
    "Teknisi",
];

/// Escapes a value for embedding in markup text or attributes.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn render_row(machine: &MachineRecord) -> String {
    let id_msn = escape_html(&machine.id_msn);
    let status = escape_html(&machine.status);
    let status_class = escape_html(&machine.status_class());

    let mut row = String::from("<tr>");
    row.push_str(&format!("<td>{}</td>", machine.no));
    row.push_str(&format!(
        "<td class=\"id-msn-cell clickable\" data-id-msn=\"{id_msn}\">{id_msn}</td>"
    ));
    row.push_str(&format!("<td>{}</td>", escape_html(&machine.alamat)));
    row.push_str(&format!("<td>{}</td>", escape_html(&machine.pengelola)));
    row.push_str(&format!("<td>{}</td>", escape_html(&machine.periode_pm)));
    row.push_str(&format!("<td>{}</td>", escape_html(&machine.tgl_selesai_pm)));
    row.push_str(&format!(
        "<td><span class=\"status-badge status-{status_class}\">{status}</span></td>"
    ));
    row.push_str(&format!("<td>{}</td>", escape_html(&machine.teknisi)));
    row.push_str("</tr>");
    row
}

/// Renders the full table: header row plus one row per record, in store
/// order. Pure function of its input.
#[must_use]
pub fn render_table(machines: &[MachineRecord]) -> String {
    let mut table = String::from("<table class=\"machine-table\"><thead><tr>");
    for header in TABLE_HEADERS {
        table.push_str(&format!("<th>{header}</th>"));
    }
    table.push_str("</tr></thead><tbody>");
    for machine in machines {
        table.push_str(&render_row(machine));
    }
    table.push_str("</tbody></table>");
    table
}
