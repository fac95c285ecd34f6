use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMethod {
    #[default]
    Phone,
    Email,
}

impl LoginMethod {
    pub fn label(self) -> &'static str {
        match self {
            LoginMethod::Phone => "Phone",
            LoginMethod::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Phone number must have at least {min} digits")]
    PhoneTooShort { min: usize },
    #[error("Email address must contain '@'")]
    InvalidEmail,
}

/// Không có xác thực thật: chỉ kiểm tra hình thức của giá trị nhập vào.
pub fn validate_login(
    method: LoginMethod,
    value: &str,
    min_phone_digits: usize,
) -> Result<(), LoginError> {
    match method {
        LoginMethod::Phone if value.chars().count() >= min_phone_digits => Ok(()),
        LoginMethod::Phone => Err(LoginError::PhoneTooShort {
            min: min_phone_digits,
        }),
        LoginMethod::Email if value.contains('@') => Ok(()),
        LoginMethod::Email => Err(LoginError::InvalidEmail),
    }
}
