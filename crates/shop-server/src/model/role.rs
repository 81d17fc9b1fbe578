use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A user's role. Roles form a total order by [`Role::rank`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Anonymous,
    #[default]
    User,
    Seller,
    Accountant,
    Admin,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Anonymous,
        Role::User,
        Role::Seller,
        Role::Accountant,
        Role::Admin,
    ];

    pub fn rank(self) -> u8 {
        match self {
            Role::Anonymous => 0,
            Role::User => 1,
            Role::Seller => 2,
            Role::Accountant => 3,
            Role::Admin => 4,
        }
    }

    /// True when this role ranks at least as high as `required`.
    pub fn has_permission(self, required: Role) -> bool {
        self.rank() >= required.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Anonymous => "anonymous",
            Role::User => "user",
            Role::Seller => "seller",
            Role::Accountant => "accountant",
            Role::Admin => "admin",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_strictly_ascending() {
        let ranks: Vec<u8> = Role::ALL.iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_has_permission_is_monotonic() {
        for actual in Role::ALL {
            for required in Role::ALL {
                if !actual.has_permission(required) {
                    continue;
                }
                for lower in Role::ALL.into_iter().filter(|r| r.rank() <= required.rank()) {
                    assert!(
                        actual.has_permission(lower),
                        "{actual} passes {required} but not {lower}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_admin_passes_everything_anonymous_only_itself() {
        assert!(Role::ALL.iter().all(|r| Role::Admin.has_permission(*r)));
        assert!(Role::Anonymous.has_permission(Role::Anonymous));
        assert!(!Role::Anonymous.has_permission(Role::User));
        assert!(!Role::Seller.has_permission(Role::Accountant));
    }

    #[test]
    fn test_parse_and_serde_use_lowercase_names() {
        assert_eq!("seller".parse::<Role>().unwrap(), Role::Seller);
        assert!("Seller".parse::<Role>().is_err());
        assert_eq!(serde_json::to_string(&Role::Accountant).unwrap(), "\"accountant\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
