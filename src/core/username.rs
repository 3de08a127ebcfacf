use crate::errors::AppResult;
use crate::store::{Store, log};

pub const FALLBACK_TITLE: &str = "Tally Marks";

pub struct UsernameLogic;

impl UsernameLogic {
    /// Header for the rendered list: "<name>'s Tally Marks" when a username
    /// is persisted, otherwise the plain fallback. When no username exists
    /// and a prompt is supplied it is asked exactly once; a non-empty answer
    /// is trimmed and persisted, anything else falls back without saving.
    pub fn header(
        store: &Store,
        prompt: Option<&mut dyn FnMut() -> Option<String>>,
    ) -> AppResult<String> {
        let doc = store.read()?;
        if let Some(name) = doc.username.as_deref()
            && !name.trim().is_empty()
        {
            return Ok(Self::title_for(name));
        }

        if let Some(ask) = prompt
            && let Some(answer) = ask()
        {
            let name = answer.trim().to_string();
            if !name.is_empty() {
                Self::set(store, &name)?;
                return Ok(Self::title_for(&name));
            }
        }

        Ok(FALLBACK_TITLE.to_string())
    }

    /// Persist a trimmed, non-empty username.
    pub fn set(store: &Store, name: &str) -> AppResult<Option<String>> {
        let trimmed = name.trim().to_string();
        if trimmed.is_empty() {
            return Ok(None);
        }
        store.update(|doc| {
            doc.username = Some(trimmed.clone());
            log::record(doc, "name", &trimmed, "Username updated");
            Ok(())
        })?;
        Ok(Some(trimmed))
    }

    pub fn get(store: &Store) -> AppResult<Option<String>> {
        Ok(store.read()?.username)
    }

    fn title_for(name: &str) -> String {
        format!("{}'s Tally Marks", name)
    }
}
