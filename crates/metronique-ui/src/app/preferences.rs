//! Persistence and environment helpers for the app shell.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};

use crate::core::auth::{Credentials, REFRESH_TOKEN_KEY, TOKEN_KEY};
use crate::core::config::{CONFIG_ELEMENT_ID, UiConfig};

/// Read the inline JSON config block; absence or a bad document yields defaults.
pub(crate) fn load_config() -> UiConfig {
    document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .map_or_else(UiConfig::default, |text| {
            UiConfig::from_json_or_default(&text)
        })
}

/// Query string of the current location, including the leading `?`.
pub(crate) fn current_query() -> String {
    window().location().search().unwrap_or_default()
}

pub(crate) fn persist_credentials(credentials: &Credentials) {
    if let Err(err) = LocalStorage::set(TOKEN_KEY, &credentials.access_token) {
        console::error!(format!("failed to persist access token: {err}"));
    }
    match &credentials.refresh_token {
        Some(token) => {
            if let Err(err) = LocalStorage::set(REFRESH_TOKEN_KEY, token) {
                console::error!(format!("failed to persist refresh token: {err}"));
            }
        }
        None => LocalStorage::delete(REFRESH_TOKEN_KEY),
    }
}
