//! The `/transfer` and `/transferrecipient` endpoint groups.

use reqwest::Method;
use serde::Serialize;

use crate::{
    query::ListQuery,
    response::Response,
    types::{Recipient, Transfer},
    Client, Error,
};

/// Payload for `POST /transfer`.
#[derive(Debug, Clone, Serialize)]
pub struct InitiateTransferRequest {
    /// Funding source, currently always `balance`.
    pub source: String,
    /// Amount in the currency subunit (kobo, cents).
    pub amount: i64,
    /// Recipient code from `POST /transferrecipient`.
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Payload for `POST /transferrecipient`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRecipientRequest {
    /// Recipient kind: `nuban`, `mobile_money`, or `basa`.
    #[serde(rename = "type")]
    pub recipient_type: String,
    pub name: String,
    pub account_number: String,
    pub bank_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Client for the `/transfer` and `/transferrecipient` endpoint groups.
pub struct Transfers<'a> {
    client: &'a Client,
}

impl<'a> Transfers<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Initiates a transfer to a recipient.
    pub async fn initiate(&self, req: &InitiateTransferRequest) -> Result<Response<Transfer>, Error> {
        let mut resp = Response::default();
        self.client
            .call(Method::POST, "/transfer", Some(req), &mut resp)
            .await?;
        Ok(resp)
    }

    /// Lists transfers on the integration.
    pub async fn list(&self, query: &ListQuery) -> Result<Response<Vec<Transfer>>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(Method::GET, &query.apply("/transfer"), None, &mut resp)
            .await?;
        Ok(resp)
    }

    /// Fetches a transfer by its code.
    pub async fn fetch(&self, code: &str) -> Result<Response<Transfer>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(
                Method::GET,
                format!("/transfer/{}", code).as_str(),
                None,
                &mut resp,
            )
            .await?;
        Ok(resp)
    }

    /// Creates a transfer recipient.
    pub async fn create_recipient(
        &self,
        req: &CreateRecipientRequest,
    ) -> Result<Response<Recipient>, Error> {
        let mut resp = Response::default();
        self.client
            .call(Method::POST, "/transferrecipient", Some(req), &mut resp)
            .await?;
        Ok(resp)
    }
}
