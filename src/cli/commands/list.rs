use super::{open_store, read_line};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::username::UsernameLogic;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::view;
use std::io::{IsTerminal, Write, stdin, stdout};

/// Render every group. On an interactive terminal a missing username is
/// prompted for exactly once and persisted when non-empty.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let store = open_store(cfg);
        let header = resolve_header(&store)?;
        let doc = store.read()?;
        view::print_groups(&header, &doc.tally_groups);
    }
    Ok(())
}

fn resolve_header(store: &Store) -> AppResult<String> {
    if stdin().is_terminal() {
        let mut ask = || {
            print!("What's your name? ");
            let _ = stdout().flush();
            read_line()
        };
        UsernameLogic::header(store, Some(&mut ask))
    } else {
        UsernameLogic::header(store, None)
    }
}
