use contracts::system::auth::Role;
use web_sys::window;

const ROLE_KEY: &str = "userRole";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Stored role, or `None` when logged out, when the stored value is not a
/// known role, or when storage is unavailable.
pub fn load_role() -> Option<Role> {
    let raw = get_local_storage()?.get_item(ROLE_KEY).ok()??;
    match raw.parse::<Role>() {
        Ok(role) => Some(role),
        Err(e) => {
            log::warn!("ignoring stored role: {}", e);
            None
        }
    }
}

pub fn save_role(role: Role) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ROLE_KEY, role.as_str());
    }
}

pub fn clear_role() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ROLE_KEY);
    }
}
