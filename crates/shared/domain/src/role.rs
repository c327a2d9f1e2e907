use crate::constants::{ADMIN, COMMERCIAL, INFLUENCER, MERCHANT};
use bitflags::bitflags;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The closed set of user categories known to the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Influencer,
    Merchant,
    Admin,
    Commercial,
}

impl Role {
    /// Every role, in the order used when listing roles to users.
    pub const ALL: [Self; 4] = [Self::Influencer, Self::Merchant, Self::Admin, Self::Commercial];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Influencer => INFLUENCER,
            Self::Merchant => MERCHANT,
            Self::Admin => ADMIN,
            Self::Commercial => COMMERCIAL,
        }
    }

    /// Parses a role claim case-insensitively, ignoring surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|role| role.as_str().eq_ignore_ascii_case(raw))
    }

    #[must_use]
    pub const fn flag(self) -> RoleSet {
        match self {
            Self::Influencer => RoleSet::INFLUENCER,
            Self::Merchant => RoleSet::MERCHANT,
            Self::Admin => RoleSet::ADMIN,
            Self::Commercial => RoleSet::COMMERCIAL,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a role claim names none of the known roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownRole(s.to_owned()))
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Deserializes an optional role claim, mapping unknown values to `None` instead of failing.
///
/// Backends may ship roles the frontend does not know yet; the session must still load.
///
/// # Errors
/// Fails only when the value is neither a string nor null.
pub fn lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Role>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Role::parse))
}

bitflags! {
    /// A set of roles, used by access policies and menu visibility tables.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct RoleSet: u8 {
        const INFLUENCER = 1 << 0;
        const MERCHANT = 1 << 1;
        const ADMIN = 1 << 2;
        const COMMERCIAL = 1 << 3;

        const EVERYONE = Self::INFLUENCER.bits()
            | Self::MERCHANT.bits()
            | Self::ADMIN.bits()
            | Self::COMMERCIAL.bits();
    }
}

impl RoleSet {
    #[must_use]
    pub const fn allows(self, role: Role) -> bool {
        self.contains(role.flag())
    }

    /// Members in [`Role::ALL`] order.
    pub fn roles(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.allows(*role))
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        role.flag()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, role| set | role.flag())
    }
}

/// Renders as `merchant, admin`.
impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, role) in self.roles().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(role.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for RoleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.bits().count_ones() as usize))?;
        for role in self.roles() {
            seq.serialize_element(&role)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RoleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RoleSetVisitor;

        impl<'de> Visitor<'de> for RoleSetVisitor {
            type Value = RoleSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of role names")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut set = RoleSet::empty();
                while let Some(role) = seq.next_element::<Role>()? {
                    set |= role.flag();
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(RoleSetVisitor)
    }
}
