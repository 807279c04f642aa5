use lazy_regex::regex_is_match;
use thiserror::Error;

pub const NAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at most {0} characters")]
    NameTooLong(usize),
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Title is required")]
    TitleRequired,
    #[error("Please enter your motivation")]
    MotivationRequired,
}

pub type Result = core::result::Result<(), ValidationError>;

pub fn validate_name(name: &str) -> Result {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong(NAME_MAX_LEN));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !regex_is_match!(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::PasswordTooShort(PASSWORD_MIN_LEN));
    }
    Ok(())
}

/// Checklist and task titles
pub fn validate_title(title: &str) -> Result {
    match title.trim().is_empty() {
        true => Err(ValidationError::TitleRequired),
        false => Ok(()),
    }
}

pub fn validate_motivation(text: &str) -> Result {
    match text.trim().is_empty() {
        true => Err(ValidationError::MotivationRequired),
        false => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name(" Ada "), Ok(()));
        assert_eq!(validate_name("   "), Err(ValidationError::NameRequired));
        assert_eq!(
            validate_name(&"a".repeat(51)),
            Err(ValidationError::NameTooLong(50))
        );
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(" ada@example.com "), Ok(()));
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email("ada"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("ada@example"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a da@x.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_validate_password() {
        assert_eq!(validate_password("secret"), Ok(()));
        assert_eq!(validate_password(""), Err(ValidationError::PasswordRequired));
        assert_eq!(
            validate_password("12345"),
            Err(ValidationError::PasswordTooShort(6))
        );
        assert_eq!(
            ValidationError::PasswordTooShort(6).to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_validate_title_and_motivation() {
        assert_eq!(validate_title(" Groceries"), Ok(()));
        assert_eq!(validate_title(" \t"), Err(ValidationError::TitleRequired));
        assert_eq!(validate_motivation("Go!"), Ok(()));
        assert_eq!(
            validate_motivation("  ").unwrap_err().to_string(),
            "Please enter your motivation"
        );
    }
}
