//! The `/transaction` endpoint group.

use reqwest::Method;
use serde::Serialize;

use crate::{
    query::ListQuery,
    response::Response,
    types::{Transaction, TransactionAccess},
    Client, Error,
};

/// Payload for `POST /transaction/initialize`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InitializeTransactionRequest {
    pub email: String,
    /// Amount in the currency subunit (kobo, cents).
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Plan code; overrides `amount` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Payload for `POST /transaction/charge_authorization`.
#[derive(Debug, Clone, Serialize)]
pub struct ChargeAuthorizationRequest {
    pub email: String,
    /// Amount in the currency subunit (kobo, cents).
    pub amount: i64,
    pub authorization_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Client for the `/transaction` endpoint group.
pub struct Transactions<'a> {
    client: &'a Client,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Starts a checkout session and returns the hosted-payment handoff.
    pub async fn initialize(
        &self,
        req: &InitializeTransactionRequest,
    ) -> Result<Response<TransactionAccess>, Error> {
        let mut resp = Response::default();
        self.client
            .call(Method::POST, "/transaction/initialize", Some(req), &mut resp)
            .await?;
        Ok(resp)
    }

    /// Confirms the status of a transaction by its reference.
    pub async fn verify(&self, reference: &str) -> Result<Response<Transaction>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(
                Method::GET,
                format!("/transaction/verify/{}", reference).as_str(),
                None,
                &mut resp,
            )
            .await?;
        Ok(resp)
    }

    /// Lists transactions on the integration.
    pub async fn list(&self, query: &ListQuery) -> Result<Response<Vec<Transaction>>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(Method::GET, &query.apply("/transaction"), None, &mut resp)
            .await?;
        Ok(resp)
    }

    /// Fetches a single transaction by its numeric ID.
    pub async fn fetch(&self, id: i64) -> Result<Response<Transaction>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(
                Method::GET,
                format!("/transaction/{}", id).as_str(),
                None,
                &mut resp,
            )
            .await?;
        Ok(resp)
    }

    /// Charges a previously stored card authorization.
    pub async fn charge_authorization(
        &self,
        req: &ChargeAuthorizationRequest,
    ) -> Result<Response<Transaction>, Error> {
        let mut resp = Response::default();
        self.client
            .call(
                Method::POST,
                "/transaction/charge_authorization",
                Some(req),
                &mut resp,
            )
            .await?;
        Ok(resp)
    }
}
