use crate::BackendError;
use reqwest::{multipart::Form, Client};
use serde::de::DeserializeOwned;

/// Send a multipart request, parse the JSON response.
/// Throws error on non OK status code.
pub async fn post_multipart<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    form: Form,
) -> Result<R, BackendError> {
    let response = client.post(url).multipart(form).send().await?;
    if response.status().is_client_error() {
        Err(BackendError::StatusCode(
            response.status(),
            response.text().await.unwrap_or_default(),
        ))
    } else {
        Ok(response.json::<R>().await?)
    }
}

/// Send a GET request with a query string, parse the JSON response.
/// Throws error on non OK status code.
pub async fn get_json<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<R, BackendError> {
    let response = client.get(url).query(query).send().await?;
    if response.status().is_client_error() {
        Err(BackendError::StatusCode(
            response.status(),
            response.text().await.unwrap_or_default(),
        ))
    } else {
        Ok(response.json::<R>().await?)
    }
}
