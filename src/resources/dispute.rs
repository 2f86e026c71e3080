//! The `/dispute` endpoint group.

use reqwest::Method;
use serde::Serialize;

use crate::{query::ListQuery, response::Response, types::Dispute, Client, Error};

/// Payload for `PUT /dispute/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateDisputeRequest {
    /// Amount to refund, in the currency subunit.
    pub refund_amount: i64,
    /// Filename of evidence previously uploaded to the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_filename: Option<String>,
}

/// Client for the `/dispute` endpoint group.
pub struct Disputes<'a> {
    client: &'a Client,
}

impl<'a> Disputes<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists disputes on the integration.
    pub async fn list(&self, query: &ListQuery) -> Result<Response<Vec<Dispute>>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(Method::GET, &query.apply("/dispute"), None, &mut resp)
            .await?;
        Ok(resp)
    }

    /// Fetches a dispute by its numeric ID.
    pub async fn fetch(&self, id: i64) -> Result<Response<Dispute>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(
                Method::GET,
                format!("/dispute/{}", id).as_str(),
                None,
                &mut resp,
            )
            .await?;
        Ok(resp)
    }

    /// Updates a dispute, typically to accept it with a refund amount.
    pub async fn update(
        &self,
        id: i64,
        req: &UpdateDisputeRequest,
    ) -> Result<Response<Dispute>, Error> {
        let mut resp = Response::default();
        self.client
            .call(
                Method::PUT,
                format!("/dispute/{}", id).as_str(),
                Some(req),
                &mut resp,
            )
            .await?;
        Ok(resp)
    }
}
