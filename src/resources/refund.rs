//! The `/refund` endpoint group.

use reqwest::Method;
use serde::Serialize;

use crate::{query::ListQuery, response::Response, types::Refund, Client, Error};

/// Payload for `POST /refund`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRefundRequest {
    /// Transaction reference or numeric ID.
    pub transaction: String,
    /// Amount in the currency subunit. Defaults to the full transaction
    /// amount when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_note: Option<String>,
}

/// Client for the `/refund` endpoint group.
pub struct Refunds<'a> {
    client: &'a Client,
}

impl<'a> Refunds<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a refund against a transaction.
    pub async fn create(&self, req: &CreateRefundRequest) -> Result<Response<Refund>, Error> {
        let mut resp = Response::default();
        self.client
            .call(Method::POST, "/refund", Some(req), &mut resp)
            .await?;
        Ok(resp)
    }

    /// Lists refunds on the integration.
    pub async fn list(&self, query: &ListQuery) -> Result<Response<Vec<Refund>>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(Method::GET, &query.apply("/refund"), None, &mut resp)
            .await?;
        Ok(resp)
    }

    /// Fetches a refund by its numeric ID.
    pub async fn fetch(&self, id: i64) -> Result<Response<Refund>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(
                Method::GET,
                format!("/refund/{}", id).as_str(),
                None,
                &mut resp,
            )
            .await?;
        Ok(resp)
    }
}
