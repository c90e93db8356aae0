use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

/// Message shown to clients for any policy violation.
pub const PASSWORD_POLICY_MESSAGE: &str = "Password must be at least 8 characters and include uppercase, lowercase, number, and special character";

/// At least `min_length` characters with one uppercase letter, one lowercase
/// letter, one digit and one punctuation or symbol character.
#[derive(Debug, Clone)]
pub struct StrongPasswordPolicy {
    min_length: usize,
}

impl StrongPasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Default for StrongPasswordPolicy {
    fn default() -> Self {
        Self::new(8)
    }
}

impl PasswordPolicy for StrongPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        if password.chars().count() < self.min_length {
            return Err(PasswordPolicyError::TooShort(self.min_length));
        }

        if !password.chars().any(char::is_uppercase) {
            return Err(PasswordPolicyError::MissingUppercase);
        }

        if !password.chars().any(char::is_lowercase) {
            return Err(PasswordPolicyError::MissingLowercase);
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }

        if !password.chars().any(is_special) {
            return Err(PasswordPolicyError::MissingSpecialCharacter);
        }

        Ok(())
    }
}

// Anything printable that is neither alphanumeric nor whitespace.
fn is_special(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control()
}
