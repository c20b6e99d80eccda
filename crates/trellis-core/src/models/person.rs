//! Person model definition.

use serde::{Deserialize, Serialize};

use super::Role;

/// A person in the company directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    /// Unique identifier for the person
    pub id: String,

    /// Full display name
    pub name: String,

    /// Work email address
    pub email: String,

    /// Directory role
    pub role: Role,

    /// Department the person belongs to
    pub department: String,
}
