use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{Store, log};

/// Initialize the config file and an empty store document.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let store_path = Config::init_all(cli.store.clone(), cli.test)?;
    let store = Store::new(&store_path.to_string_lossy());

    if !store.path().exists() {
        store.update(|doc| {
            log::record(doc, "init", "New store", "Empty store document created");
            Ok(())
        })?;
    }

    println!("✅ Store:       {:?}", store.path());
    Ok(())
}
