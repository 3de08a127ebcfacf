pub mod add;
pub mod backup;
pub mod color;
pub mod config;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod name;
pub mod rename;
pub mod reset;
pub mod tally;

use crate::config::Config;
use crate::core::username::UsernameLogic;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::view;
use std::io::{self, BufRead, Write};

/// Open the configured store.
pub(crate) fn open_store(cfg: &Config) -> Store {
    Store::new(&cfg.store)
}

/// Full re-render after a mutation: header (no prompting) plus every group.
pub(crate) fn rerender_all(store: &Store) -> AppResult<()> {
    let header = UsernameLogic::header(store, None)?;
    let doc = store.read()?;
    println!();
    view::print_groups(&header, &doc.tally_groups);
    Ok(())
}

/// `[y/N]` confirmation read from stdin; anything but `y` aborts.
pub(crate) fn confirm(question: &str) -> bool {
    print!("{} (N/y) ? ", question);
    let _ = io::stdout().flush();
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).unwrap_or(0);
    input.trim().eq_ignore_ascii_case("y")
}

/// Read one line from stdin, trimmed; `None` on EOF.
pub(crate) fn read_line() -> Option<String> {
    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim_end_matches(['\r', '\n']).to_string()),
        Err(_) => None,
    }
}
