use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of user in the LMS. The lowercase string form is what goes over the
/// wire and into storage.
///
/// No other role exists:
///
/// ```compile_fail
/// let _ = lms_shared::Role::Guest;
/// ```
///
/// and a bare string is not a role:
///
/// ```compile_fail
/// let _role: lms_shared::Role = "teacher";
/// ```
///
/// ```
/// use lms_shared::Role;
/// let role: Role = "teacher".parse().unwrap();
/// assert_eq!(role, Role::Teacher);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Parent,
    Student,
}

/// Every role, in declaration order.
pub const ROLES: [Role; 4] = [Role::Admin, Role::Teacher, Role::Parent, Role::Student];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    #[error("unknown role: {0}")]
    Unknown(String),
}

impl Role {
    pub const ADMIN_STR: &'static str = "admin";
    pub const TEACHER_STR: &'static str = "teacher";
    pub const PARENT_STR: &'static str = "parent";
    pub const STUDENT_STR: &'static str = "student";

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => Self::ADMIN_STR,
            Role::Teacher => Self::TEACHER_STR,
            Role::Parent => Self::PARENT_STR,
            Role::Student => Self::STUDENT_STR,
        }
    }

    /// Symbolic name of the variant, e.g. `Teacher`.
    pub const fn name(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Teacher => "Teacher",
            Role::Parent => "Parent",
            Role::Student => "Student",
        }
    }

    pub fn all() -> &'static [Role] {
        &ROLES
    }

    /// Exact, case-sensitive lookup of a wire string.
    pub fn parse(value: &str) -> Result<Role, RoleError> {
        ROLES
            .iter()
            .copied()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| RoleError::Unknown(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s)
    }
}

impl TryFrom<&str> for Role {
    type Error = RoleError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Role::parse(value)
    }
}

impl TryFrom<String> for Role {
    type Error = RoleError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Role::parse(&value)
    }
}

impl From<Role> for &'static str {
    fn from(value: Role) -> Self {
        value.as_str()
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// TypeScript union of the wire strings, for the web client.
#[cfg(feature = "ts")]
pub fn typescript_decl() -> String {
    use ts_rs::{Config, TS};
    format!("export {}\n", <Role as TS>::decl(&Config::default()))
}
