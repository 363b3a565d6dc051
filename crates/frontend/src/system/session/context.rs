use super::storage;
use contracts::system::auth::Role;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Session {
    role: RwSignal<Option<Role>>,
}

impl Session {
    /// Logged-out session, no storage access.
    pub fn new() -> Self {
        Self {
            role: RwSignal::new(None),
        }
    }

    pub fn init_from_storage() -> Self {
        let session = Self::new();
        let role = storage::load_role();
        log::debug!("session restored: {:?}", role);
        session.role.set(role);
        session
    }

    pub fn role(&self) -> Option<Role> {
        self.role.get()
    }

    pub fn role_untracked(&self) -> Option<Role> {
        self.role.get_untracked()
    }

    pub fn login(&self, role: Role) {
        storage::save_role(role);
        log::info!("login as {}", role);
        self.role.set(Some(role));
    }

    pub fn logout(&self) {
        storage::clear_role();
        log::info!("logout");
        self.role.set(None);
    }

    /// Name sent as `usuarioCreador` when creating draft sales.
    pub fn user_name(&self) -> String {
        self.role_untracked()
            .map(|r| r.as_str().to_string())
            .unwrap_or_default()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided in context")
}
