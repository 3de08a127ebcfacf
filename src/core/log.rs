use crate::errors::AppResult;
use crate::store::Store;
use crate::utils::colors::strip_ansi;
use ansi_term::Colour;

/// ANSI color for an operation name in the printed log
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "rename" | "color" => Colour::Yellow,
        "tally" => Colour::Cyan,
        "reset" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &Store) -> AppResult<()> {
        let doc = store.read()?;

        if doc.log.is_empty() {
            println!("📜 Internal log: (empty)");
            return Ok(());
        }

        let id_w = doc
            .log
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = doc.log.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = doc
            .log
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.len()
                } else {
                    e.operation.len() + e.target.len() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");

        for entry in &doc.log {
            let color = color_for_operation(&entry.operation);
            let mut op_target = color.paint(entry.operation.as_str()).to_string();
            if !entry.target.is_empty() {
                op_target.push_str(&format!(" ({})", entry.target));
            }

            // pad on visible width, the operation carries ANSI codes
            let visible = strip_ansi(&op_target);
            let shown = if visible.len() > 60 {
                let mut s = visible.chars().take(57).collect::<String>();
                s.push_str("...");
                s
            } else {
                op_target
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&shown).len()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                shown,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
