//! Documents and JSON envelopes for the GraphQL API serving TripsOnUsers.

use serde::{Deserialize, Serialize};

use crate::{error::ClientError, trips_on_users::TripsOnUsers};

pub const FIND_TRIPS_ON_USERSES: &str = "FindTripsOnUserses";
pub const FIND_TRIPS_ON_USERS_BY_ID: &str = "FindTripsOnUsersById";
pub const DELETE_TRIPS_ON_USERS: &str = "DeleteTripsOnUsersMutation";

pub const TRIPS_ON_USERSES_QUERY: &str = "query FindTripsOnUserses {
  tripsOnUserses {
    id
    userId
    tripId
  }
}";

pub const TRIPS_ON_USERS_QUERY: &str = "query FindTripsOnUsersById($id: Int!) {
  tripsOnUsers: tripsOnUsers(id: $id) {
    id
    userId
    tripId
  }
}";

pub const DELETE_TRIPS_ON_USERS_MUTATION: &str = "mutation DeleteTripsOnUsersMutation($id: Int!) {
  deleteTripsOnUsers(id: $id) {
    id
  }
}";

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    pub variables: V,
}

impl<'a, V: Serialize> GraphQlRequest<'a, V> {
    pub fn new(query: &'a str, operation_name: &'a str, variables: V) -> Self {
        Self {
            query,
            operation_name,
            variables,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NoVariables {}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct IdVariables {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorEntry>,
}

impl<T> GraphQlResponse<T> {
    /// Errors take precedence over partial data.
    pub fn into_result(self) -> Result<T, ClientError> {
        if !self.errors.is_empty() {
            return Err(ClientError::GraphQl(
                self.errors.into_iter().map(|err| err.message).collect(),
            ));
        }

        self.data.ok_or(ClientError::MissingData)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DeletedRecord {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct DeleteTripsOnUsersData {
    #[serde(rename = "deleteTripsOnUsers")]
    pub deleted: DeletedRecord,
}

#[derive(Debug, Deserialize)]
pub struct TripsOnUsersesData {
    #[serde(rename = "tripsOnUserses")]
    pub records: Vec<TripsOnUsers>,
}

#[derive(Debug, Deserialize)]
pub struct TripsOnUsersData {
    #[serde(rename = "tripsOnUsers")]
    pub record: Option<TripsOnUsers>,
}
