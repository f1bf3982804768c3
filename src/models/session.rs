use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Customer,
}

impl Role {
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "customer" | "user" => Ok(Role::Customer),
            _ => Err(AppError::InvalidRole(code.to_string())),
        }
    }
}

/// Identity handed over by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: Role,
}

/// Explicit per-command session, built once in `run()` and passed to handlers.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn require_user(&self) -> AppResult<&SessionUser> {
        self.user.as_ref().ok_or(AppError::LoginRequired)
    }

    pub fn require_admin(&self) -> AppResult<&SessionUser> {
        let user = self.require_user()?;
        if user.role == Role::Admin {
            Ok(user)
        } else {
            Err(AppError::AdminRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> Session {
        Session {
            user: Some(SessionUser {
                email: "ana@example.com".into(),
                full_name: "Ana".into(),
                phone: String::new(),
                role,
            }),
        }
    }

    #[test]
    fn anonymous_session_needs_login() {
        assert!(matches!(
            Session::anonymous().require_user(),
            Err(AppError::LoginRequired)
        ));
    }

    #[test]
    fn customers_are_not_admins() {
        assert!(user(Role::Customer).require_user().is_ok());
        assert!(matches!(
            user(Role::Customer).require_admin(),
            Err(AppError::AdminRequired)
        ));
        assert!(user(Role::Admin).require_admin().is_ok());
    }
}
