use super::{open_store, read_line};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::username::UsernameLogic;
use crate::errors::AppResult;
use crate::ui::messages;
use std::io::{IsTerminal, Write, stdin, stdout};

/// Show or set the persisted username.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Name { set } = cmd {
        let store = open_store(cfg);

        if let Some(name) = set {
            return match UsernameLogic::set(&store, name)? {
                Some(saved) => {
                    messages::success(format!("Username set to '{}'", saved));
                    Ok(())
                }
                None => {
                    messages::warning("Username is empty, nothing saved");
                    Ok(())
                }
            };
        }

        match UsernameLogic::get(&store)? {
            Some(name) => println!("👤 {}", name),
            None if stdin().is_terminal() => {
                print!("What's your name? ");
                let _ = stdout().flush();
                if let Some(answer) = read_line()
                    && let Some(saved) = UsernameLogic::set(&store, &answer)?
                {
                    messages::success(format!("Username set to '{}'", saved));
                } else {
                    messages::warning("No username saved");
                }
            }
            None => println!("👤 (not set)"),
        }
    }
    Ok(())
}
