use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl UserId {
    /// Sentinel for "no owner filter": matches every product.
    pub const ALL: UserId = UserId(0);

    pub fn is_all(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Sex marker
// ============================================================================
/// Only used to pick the text colour of the owner cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: UserId(id),
            name: name.into(),
            sex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_json() {
        let user: User = serde_json::from_str(r#"{"id":1,"name":"Roma","sex":"m"}"#).unwrap();
        assert_eq!(user, User::new(1, "Roma", Sex::Male));
    }

    #[test]
    fn test_unknown_sex_is_rejected() {
        let result = serde_json::from_str::<User>(r#"{"id":1,"name":"Roma","sex":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_all_sentinel() {
        assert!(UserId::ALL.is_all());
        assert!(UserId::default().is_all());
        assert!(!UserId(3).is_all());
    }
}
