//! The `/plan` endpoint group.

use reqwest::Method;
use serde::Serialize;

use crate::{
    query::ListQuery,
    response::Response,
    types::{Interval, Plan},
    Client, Error,
};

/// Payload for `POST /plan`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePlanRequest {
    pub name: String,
    /// Amount in the currency subunit (kobo, cents).
    pub amount: i64,
    pub interval: Interval,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
}

/// Client for the `/plan` endpoint group.
pub struct Plans<'a> {
    client: &'a Client,
}

impl<'a> Plans<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a billing plan.
    pub async fn create(&self, req: &CreatePlanRequest) -> Result<Response<Plan>, Error> {
        let mut resp = Response::default();
        self.client
            .call(Method::POST, "/plan", Some(req), &mut resp)
            .await?;
        Ok(resp)
    }

    /// Lists plans on the integration.
    pub async fn list(&self, query: &ListQuery) -> Result<Response<Vec<Plan>>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(Method::GET, &query.apply("/plan"), None, &mut resp)
            .await?;
        Ok(resp)
    }

    /// Fetches a plan by its numeric ID.
    pub async fn fetch(&self, id: i64) -> Result<Response<Plan>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(
                Method::GET,
                format!("/plan/{}", id).as_str(),
                None,
                &mut resp,
            )
            .await?;
        Ok(resp)
    }
}
