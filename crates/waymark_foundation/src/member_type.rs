//! Relation member type resolution.
//!
//! Membership lists encode the referenced entity type either as a word
//! (`node`, `way`, `relation`) or as its first letter. Both forms are matched
//! exactly; anything else is an error carrying the offending token.

use std::str::FromStr;

use crate::entity_type::EntityType;
use crate::error::{Error, Result};

/// Parses a textual member type.
///
/// # Errors
///
/// Returns [`ErrorKind::UnrecognizedType`](crate::ErrorKind::UnrecognizedType)
/// if the token is not one of `node`, `way` or `relation`.
pub fn parse_member_type(member_type: &str) -> Result<EntityType> {
    match member_type {
        "node" => Ok(EntityType::Node),
        "way" => Ok(EntityType::Way),
        "relation" => Ok(EntityType::Relation),
        other => Err(Error::unrecognized_type(other)),
    }
}

/// Parses a single character member type code.
///
/// # Errors
///
/// Returns [`ErrorKind::UnrecognizedType`](crate::ErrorKind::UnrecognizedType)
/// if the code is not one of `n`, `w` or `r`.
pub fn parse_member_code(code: char) -> Result<EntityType> {
    match code {
        'n' => Ok(EntityType::Node),
        'w' => Ok(EntityType::Way),
        'r' => Ok(EntityType::Relation),
        other => Err(Error::unrecognized_type(other.to_string())),
    }
}

impl FromStr for EntityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_member_type(s)
    }
}

impl TryFrom<char> for EntityType {
    type Error = Error;

    fn try_from(code: char) -> Result<Self> {
        parse_member_code(code)
    }
}
