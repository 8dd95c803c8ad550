use crate::errors::DepCheckError;
use serde::{Deserialize, Serialize};

/// Access flags on a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionSet {
    pub read: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

impl PermissionSet {
    pub const NONE: PermissionSet = PermissionSet {
        read: false,
        create: false,
        update: false,
        delete: false,
    };

    pub const READ: PermissionSet = PermissionSet {
        read: true,
        ..PermissionSet::NONE
    };

    pub const CREATE: PermissionSet = PermissionSet {
        create: true,
        ..PermissionSet::NONE
    };

    pub const UPDATE: PermissionSet = PermissionSet {
        update: true,
        ..PermissionSet::NONE
    };

    pub const DELETE: PermissionSet = PermissionSet {
        delete: true,
        ..PermissionSet::NONE
    };

    /// Parse a manifest permission token (`SELECT`, `INSERT`, `UPDATE`, `DELETE`)
    ///
    /// # Errors
    ///
    /// `UnknownPermission` for any other token.
    pub fn from_manifest_token(token: &str) -> Result<PermissionSet, DepCheckError> {
        match token.trim().to_ascii_uppercase().as_str() {
            "SELECT" => Ok(PermissionSet::READ),
            "INSERT" => Ok(PermissionSet::CREATE),
            "UPDATE" => Ok(PermissionSet::UPDATE),
            "DELETE" => Ok(PermissionSet::DELETE),
            _ => Err(DepCheckError::UnknownPermission {
                value: token.to_string(),
            }),
        }
    }

    /// Flags granted by a RACF access code; unrecognised codes grant nothing
    pub fn from_access_code(code: &str) -> PermissionSet {
        match code.trim() {
            "SELECT" => PermissionSet::READ,
            "INSERT" => PermissionSet::CREATE,
            "UPDATE" => PermissionSet::UPDATE,
            "DELETE" => PermissionSet::DELETE,
            "IUD" => PermissionSet::CREATE
                .union(PermissionSet::UPDATE)
                .union(PermissionSet::DELETE),
            _ => PermissionSet::NONE,
        }
    }

    pub fn union(self, other: PermissionSet) -> PermissionSet {
        PermissionSet {
            read: self.read || other.read,
            create: self.create || other.create,
            update: self.update || other.update,
            delete: self.delete || other.delete,
        }
    }

    /// Flags set in `self` but not in `granted`
    pub fn missing_from(self, granted: PermissionSet) -> PermissionSet {
        PermissionSet {
            read: self.read && !granted.read,
            create: self.create && !granted.create,
            update: self.update && !granted.update,
            delete: self.delete && !granted.delete,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == PermissionSet::NONE
    }

    /// Labels of the set flags, in READ, CREATE, UPDATE, DELETE order
    pub fn labels(&self) -> Vec<&'static str> {
        [
            (self.read, "READ"),
            (self.create, "CREATE"),
            (self.update, "UPDATE"),
            (self.delete, "DELETE"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }
}
