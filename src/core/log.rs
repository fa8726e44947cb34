use crate::db::log::{LogEntry, load_entries};
use crate::errors::AppResult;
use crate::utils::table::display_width;
use ansi_term::Colour;
use rusqlite::Connection;

const MAX_OP_WIDTH: usize = 40;

/// ANSI color for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "settings" => Colour::Cyan,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `op (target)` with only the operation colored, truncated to `MAX_OP_WIDTH`.
fn op_label(entry: &LogEntry) -> String {
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = if plain.chars().count() > MAX_OP_WIDTH {
        let mut s: String = plain.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(&entry.operation);
    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the audit log, one aligned line per entry.
    pub fn render(conn: &Connection) -> AppResult<Vec<String>> {
        let entries = load_entries(conn)?;

        let labels: Vec<String> = entries.iter().map(op_label).collect();
        let op_w = labels.iter().map(|l| display_width(l)).max().unwrap_or(0);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        Ok(entries
            .iter()
            .zip(&labels)
            .map(|(e, label)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                let padding = " ".repeat(op_w.saturating_sub(display_width(label)));
                format!(
                    "{:>id_w$}: {} | {}{} => {}",
                    e.id,
                    date,
                    label,
                    padding,
                    e.message,
                    id_w = id_w
                )
            })
            .collect())
    }

    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let lines = Self::render(conn)?;
        if lines.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::log::ttlog;
    use crate::utils::table::strip_ansi;

    #[test]
    fn lines_are_aligned_and_truncated() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        ttlog(&conn, "add", "1a2b3c4d", "Added record").unwrap();
        ttlog(&conn, "settings", "", "Weekly goal set").unwrap();
        ttlog(&conn, "edit", &"x".repeat(80), "Long target").unwrap();

        let lines: Vec<String> = LogLogic::render(&conn)
            .unwrap()
            .iter()
            .map(|l| strip_ansi(l))
            .collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("add (1a2b3c4d)"));
        assert!(lines[2].contains("..."));

        let arrow = |l: &String| l.find("=>").unwrap();
        assert_eq!(arrow(&lines[0]), arrow(&lines[1]));
        assert_eq!(arrow(&lines[1]), arrow(&lines[2]));
    }
}
