//! Login, logout and role dispatch.

use super::state::{Panels, ViewUpdate};
use super::App;
use crate::interface::{RequestApi, SessionStore};
use crate::model::Role;

pub const MISSING_CREDENTIALS: &str = "Please enter both username and password.";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";
pub const LOGGED_OUT: &str = "You have been logged out!";

impl<C: RequestApi, S: SessionStore> App<C, S> {
    /// Checks the credentials against the backend's user list and switches
    /// to the matching role's view. Returns the role on success.
    ///
    /// A transport or decode failure is only logged, so from the user's side
    /// it looks like nothing happened.
    pub async fn login(&mut self, username: &str, password: &str) -> Option<Role> {
        if username.is_empty() || password.is_empty() {
            self.alert(MISSING_CREDENTIALS);
            return None;
        }

        let users = match self.client.get_users().await {
            Ok(users) => users,
            Err(e) => {
                log::error!("Error fetching users: {e}");
                return None;
            }
        };

        let Some(user) = users.into_iter().find(|u| u.matches(username, password)) else {
            self.alert(INVALID_CREDENTIALS);
            return None;
        };

        let key = self.config.session_key.clone();
        if let Err(e) = self.store.set(&key, &user.id.to_string()) {
            log::error!("Error saving session: {e}");
        }
        log::info!("{} logged in as {}", user.username, user.role);

        match user.role {
            Role::Admin => {
                let url = self.config.admin_url();
                self.update(ViewUpdate::OpenExternal(url));
            }
            Role::Student => {
                self.update(ViewUpdate::ShowPanels(Panels::student()));
                self.fetch_courses(user.id).await;
                self.fetch_user_courses(user.id).await;
            }
            Role::Teacher => {
                self.update(ViewUpdate::ShowPanels(Panels::teacher()));
                self.fetch_courses_teacher(&user.username).await;
            }
        }

        Some(user.role)
    }

    pub fn logout(&mut self) {
        let key = self.config.session_key.clone();
        if let Err(e) = self.store.remove(&key) {
            log::error!("Error clearing session: {e}");
        }
        self.update(ViewUpdate::Reset);
        self.alert(LOGGED_OUT);
    }

    /// The user id saved by the last successful login, if any.
    pub fn current_user_id(&self) -> Option<u64> {
        match self.store.get(&self.config.session_key) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("Ignoring malformed session id {raw:?}: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::error!("Error reading session: {e}");
                None
            }
        }
    }
}
