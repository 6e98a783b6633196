use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::grades::entities::{GRADE_VALUE_MAX, GRADE_VALUE_MIN};

static PSEUDO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid pseudo regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_pseudo(pseudo: &str) -> Result<(), &'static str> {
    // 昵称长度校验：2 <= x <= 32
    if pseudo.len() < 2 || pseudo.len() > 32 {
        return Err("Pseudo length must be between 2 and 32 characters");
    }
    // 昵称格式校验：只能包含字母、数字、下划线或连字符
    if !PSEUDO_RE.is_match(pseudo) {
        return Err("Pseudo must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 校验成绩分数，闭区间 [0, 20]
pub fn validate_grade_value(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Grade value must be a finite number");
    }
    if !(GRADE_VALUE_MIN..=GRADE_VALUE_MAX).contains(&value) {
        return Err("Grade value must be between 0 and 20");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
/// - 可选：特殊字符（增强安全性）
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 大写字母检查
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    // 3. 小写字母检查
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    // 4. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 5. 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_uppercase() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_no_lowercase() {
        let result = validate_password("ABCD1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one lowercase letter")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_pseudo_rules() {
        assert!(validate_pseudo("alice").is_ok());
        assert!(validate_pseudo("jean-pierre_2").is_ok());
        assert!(validate_pseudo("a").is_err());
        assert!(validate_pseudo("bad pseudo!").is_err());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("student@schoolinc.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_grade_value_range() {
        assert!(validate_grade_value(0.0).is_ok());
        assert!(validate_grade_value(12.5).is_ok());
        assert!(validate_grade_value(20.0).is_ok());
        assert!(validate_grade_value(-0.1).is_err());
        assert!(validate_grade_value(20.1).is_err());
        assert!(validate_grade_value(f64::NAN).is_err());
    }
}
