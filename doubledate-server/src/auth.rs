use subtle::ConstantTimeEq;

use crate::errors::ApiError;

/// Gate in front of the admin API: compares the `x-admin-code` header
/// against the configured shared secret.
///
/// Constructed once from config and carried in `AppState`. With no token
/// configured the guard allows everything; that state is chosen explicitly
/// at startup and logged, never inferred per request.
#[derive(Clone)]
pub struct AdminGuard {
    token: Option<String>,
}

impl AdminGuard {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Dev mode: every request passes.
    pub fn disabled() -> Self {
        Self { token: None }
    }

    pub fn is_disabled(&self) -> bool {
        self.token.is_none()
    }

    pub fn check(&self, provided: Option<&str>) -> Result<(), ApiError> {
        let Some(token) = &self.token else {
            return Ok(());
        };

        let provided = provided.unwrap_or("");
        if bool::from(token.as_bytes().ct_eq(provided.as_bytes())) {
            Ok(())
        } else {
            tracing::warn!("Admin check failed");
            Err(ApiError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_guard_allows_everything() {
        let guard = AdminGuard::disabled();

        assert!(guard.is_disabled());
        assert!(guard.check(None).is_ok());
        assert!(guard.check(Some("anything")).is_ok());
    }

    #[test]
    fn test_matching_token_allowed() {
        let guard = AdminGuard::new("hunter2");

        assert!(!guard.is_disabled());
        assert!(guard.check(Some("hunter2")).is_ok());
    }

    #[test]
    fn test_wrong_or_missing_token_denied() {
        let guard = AdminGuard::new("hunter2");

        assert_eq!(guard.check(Some("hunter3")), Err(ApiError::Forbidden));
        assert_eq!(guard.check(Some("")), Err(ApiError::Forbidden));
        assert_eq!(guard.check(None), Err(ApiError::Forbidden));
    }
}
