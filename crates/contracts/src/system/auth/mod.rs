use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Role of the logged-in user. Persisted as its wire string; absence means
/// logged out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrador,
    Vendedor,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Administrador, Role::Vendedor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrador => "administrador",
            Role::Vendedor => "vendedor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Administrador => "Administrador",
            Role::Vendedor => "Vendedor",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Administrador)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s.trim())
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_stored_value() {
        assert_eq!("administrador".parse::<Role>(), Ok(Role::Administrador));
        assert_eq!("vendedor".parse::<Role>(), Ok(Role::Vendedor));
        assert!("Administrador".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display_matches_storage() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
        assert!(Role::Administrador.is_admin());
        assert!(!Role::Vendedor.is_admin());
    }
}
