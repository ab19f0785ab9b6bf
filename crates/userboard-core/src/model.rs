//! User records as served by the users-collection endpoint.
//!
//! Field names follow the wire format (`catchPhrase`, `bs`, `lat`/`lng`).
//! Records are read-only once decoded.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Identifier of a user, unique within one fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic coordinate pair, kept as the strings the source sends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Postal address of a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Employer of a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    /// Classification string (`bs` on the wire).
    pub bs: String,
}

/// One fetched user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    /// May or may not carry a scheme prefix.
    pub website: String,
    pub address: Address,
    pub company: Company,
}

/// Decode a JSON array of users, preserving source order.
///
/// Unknown fields are ignored. A record without `address` or `company`
/// fails the whole decode.
pub fn parse_users(json: &str) -> Result<Vec<User>, FetchError> {
    serde_json::from_str(json).map_err(|e| FetchError::Request(e.to_string()))
}
