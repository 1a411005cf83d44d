//! Mocked sign-in gate.
//!
//! Any email/name pair is accepted. There is no credential check, token or
//! persistence; the dashboard lives exactly as long as the sign-in.

use crate::model::note::UserProfile;
use crate::workspace::dashboard::Dashboard;
use log::info;

/// Signed-out, or signed-in with a dashboard.
#[derive(Default)]
pub struct Session {
    dashboard: Option<Dashboard>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Signs in with whatever the user typed and opens a fresh dashboard.
    pub fn login(&mut self, email: impl Into<String>, name: impl Into<String>) -> &mut Dashboard {
        let user = UserProfile {
            email: email.into(),
            name: name.into(),
        };
        info!("event=login module=session status=ok");
        self.dashboard.insert(Dashboard::new(user))
    }

    /// Signs out and discards all notes.
    pub fn logout(&mut self) {
        if let Some(dashboard) = self.dashboard.take() {
            info!(
                "event=logout module=session status=ok discarded_notes={}",
                dashboard.note_count()
            );
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.dashboard.is_some()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.dashboard.as_ref().map(Dashboard::user)
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        self.dashboard.as_mut()
    }
}
