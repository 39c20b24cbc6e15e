//! Help text rendered from the option table.

use super::schema::{OPTIONS, OptionKind};

/// Generate the usage text, one line per option in table order.
pub fn usage() -> String {
    let rows: Vec<(String, String)> = OPTIONS
        .iter()
        .map(|spec| {
            let left = match spec.meta_var {
                Some(meta) => format!("{} {}", spec.name, meta),
                None => spec.name.to_string(),
            };
            let right = match (spec.kind, spec.default) {
                (OptionKind::Value | OptionKind::ExplicitBool, Some(default)) => {
                    format!("{} (default: {})", spec.usage, default)
                }
                _ => spec.usage.to_string(),
            };
            (left, right)
        })
        .collect();

    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);

    let mut help = String::new();
    help.push_str("mediarg - media tool argument binding\n\n");
    help.push_str("USAGE:\n");
    help.push_str("    mediarg [OPTIONS] [--] [FILES...]\n\n");
    help.push_str("OPTIONS:\n");

    for (left, right) in rows {
        help.push_str(&format!("    {:<width$}  {}\n", left, right, width = width));
    }

    help.push_str("\nSee the README for the exact binding rules.\n");
    help
}
