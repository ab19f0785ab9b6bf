//! Fixture-backed user source for tests and offline development.
//!
//! Enabled with the `mock` feature.

use crate::error::FetchError;
use crate::model::{Address, Company, Geo, User, UserId, parse_users};
use crate::state::UserSource;

/// Bundled users fixture, same shape as the live endpoint.
pub const USERS_FIXTURE: &str = include_str!("../fixtures/users.json");

/// A [`UserSource`] that answers with a canned outcome.
#[derive(Clone, Debug)]
pub struct MockUserSource {
    outcome: Result<Vec<User>, FetchError>,
}

impl MockUserSource {
    /// Serve the bundled fixture.
    pub fn fixture() -> Self {
        Self {
            outcome: parse_users(USERS_FIXTURE),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self { outcome: Ok(users) }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

impl UserSource for MockUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        self.outcome.clone()
    }
}

/// Build a synthetic user whose fields are derived from `id`.
pub fn sample_user(id: u32) -> User {
    User {
        id: UserId(id),
        name: format!("User {}", id),
        username: format!("user{}", id),
        email: format!("user{}@example.com", id),
        phone: format!("555-01{:02}", id),
        website: format!("user{}.example.com", id),
        address: Address {
            street: format!("{} Main St", id),
            suite: format!("Apt. {}", id),
            city: "Springfield".to_string(),
            zipcode: format!("{:05}", id),
            geo: Geo {
                lat: format!("{}.5", id),
                lng: format!("-{}.25", id),
            },
        },
        company: Company {
            name: format!("Company {}", id),
            catch_phrase: format!("Catch phrase {}", id),
            bs: format!("synergize {}", id),
        },
    }
}
