/*!
Presentation of derivations.

A derivation is rendered as an operator-labeled tree, one entry per line, with sources indented under the combinations that consumed them.
Rendering is cosmetic; nothing in parsing or evaluation reads it back.
*/

use std::fmt::Write;

use crate::db::chart::{Chart, ChartEntry, Derivation};

/// The derivation of `entry`, as an indented tree over `chart`.
pub fn derivation_tree(chart: &Chart, entry: &ChartEntry) -> String {
    let mut rendered = String::default();
    branch(chart, entry, 0, &mut rendered);
    rendered
}

fn branch(chart: &Chart, entry: &ChartEntry, depth: usize, rendered: &mut String) {
    for _ in 0..depth {
        rendered.push_str("  ");
    }

    match &entry.derivation {
        Derivation::Lexical => {
            let _ = writeln!(rendered, "{} lexical {}", entry.id, entry.expression);
        }

        Derivation::Derived {
            operator, sources, ..
        } => {
            let _ = writeln!(rendered, "{} {} {}", entry.id, operator, entry.expression);
            for source in sources {
                match chart.get(*source) {
                    Some(origin) => branch(chart, origin, depth + 1, rendered),
                    None => {
                        let _ = writeln!(rendered, "{source} ?");
                    }
                }
            }
        }
    }
}
