use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use trip_tracker_lib::{
    delete::DeleteMutation,
    error::{ClientError, MutationFailure},
    graphql::{
        DeleteTripsOnUsersData, DeletedRecord, GraphQlRequest, GraphQlResponse, IdVariables, NoVariables,
        TripsOnUsersData, TripsOnUsersesData, DELETE_TRIPS_ON_USERS, DELETE_TRIPS_ON_USERS_MUTATION,
        FIND_TRIPS_ON_USERSES, FIND_TRIPS_ON_USERS_BY_ID, TRIPS_ON_USERSES_QUERY, TRIPS_ON_USERS_QUERY,
    },
    trips_on_users::TripsOnUsers,
};

// Set GRAPHQL_ENDPOINT at build time to point somewhere else
pub const GRAPHQL_ENDPOINT: &str = match option_env!("GRAPHQL_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "/graphql",
};

pub async fn post_graphql<V, T>(query: &str, operation_name: &str, variables: V) -> Result<T, ClientError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let request = GraphQlRequest::new(query, operation_name, variables);

    let response = Request::post(GRAPHQL_ENDPOINT)
        .json(&request)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    // GraphQL errors may come with a non 2xx status, so try the body first
    let body = match response.json::<GraphQlResponse<T>>().await {
        Ok(body) => body,
        Err(_) if !response.ok() => {
            return Err(ClientError::Http {
                status: response.status(),
            });
        }
        Err(err) => return Err(network_error(err)),
    };

    body.into_result()
}

fn network_error(err: gloo_net::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

pub async fn get_trips_on_userses() -> Result<Vec<TripsOnUsers>, ClientError> {
    let data: TripsOnUsersesData =
        post_graphql(TRIPS_ON_USERSES_QUERY, FIND_TRIPS_ON_USERSES, NoVariables {}).await?;
    Ok(data.records)
}

pub async fn get_trips_on_users(id: i64) -> Result<Option<TripsOnUsers>, ClientError> {
    let data: TripsOnUsersData =
        post_graphql(TRIPS_ON_USERS_QUERY, FIND_TRIPS_ON_USERS_BY_ID, IdVariables { id }).await?;
    Ok(data.record)
}

pub async fn delete_trips_on_users(id: i64) -> Result<DeletedRecord, ClientError> {
    let data: DeleteTripsOnUsersData =
        post_graphql(DELETE_TRIPS_ON_USERS_MUTATION, DELETE_TRIPS_ON_USERS, IdVariables { id }).await?;
    Ok(data.deleted)
}

/// Delete mutation against [`GRAPHQL_ENDPOINT`].
pub struct GraphQlClient;

#[async_trait(?Send)]
impl DeleteMutation for GraphQlClient {
    async fn delete(&self, id: i64) -> Result<DeletedRecord, MutationFailure> {
        Ok(delete_trips_on_users(id).await?)
    }
}
