use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../client/src/types/generated/user.ts")]
pub enum UserRole {
    Student,   // 学生
    Professor, // 教授
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const PROFESSOR: &'static str = "professor";

    pub fn professor_roles() -> &'static [&'static UserRole] {
        &[&Self::Professor]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Professor]
    }

    pub fn is_professor(&self) -> bool {
        matches!(self, UserRole::Professor)
    }
    pub fn is_student(&self) -> bool {
        matches!(self, UserRole::Student)
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::PROFESSOR => Ok(UserRole::Professor),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: student, professor"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Professor => write!(f, "{}", UserRole::PROFESSOR),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "professor" => Ok(UserRole::Professor),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub pseudo: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    // 生成访问令牌（使用真正的 JWT）
    pub async fn generate_access_token(&self) -> String {
        // 使用 JwtUtils 生成 access token
        match crate::utils::jwt::JwtUtils::generate_access_token(self.id, &self.role.to_string()) {
            Ok(token) => token,
            Err(e) => {
                // 如果 JWT 生成失败，返回一个简单的 token（不推荐在生产环境中使用）
                tracing::error!("JWT token 生成失败: {}", e);
                format!(
                    "fallback_token_{}_{}",
                    self.id,
                    chrono::Utc::now().timestamp()
                )
            }
        }
    }

    // 生成 token 对（access + refresh）
    pub async fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("student".parse::<UserRole>(), Ok(UserRole::Student));
        assert_eq!("professor".parse::<UserRole>(), Ok(UserRole::Professor));
        assert!("admin".parse::<UserRole>().is_err());
        assert_eq!(UserRole::Student.to_string(), "student");
        assert_eq!(UserRole::Professor.to_string(), "professor");
    }

    #[test]
    fn test_role_sets() {
        assert!(UserRole::professor_roles().contains(&&UserRole::Professor));
        assert!(!UserRole::professor_roles().contains(&&UserRole::Student));
        assert_eq!(UserRole::all_roles().len(), 2);
    }
}
