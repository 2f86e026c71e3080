//! The `/subscription` endpoint group.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;

use crate::{query::ListQuery, response::Response, types::Subscription, Client, Error};

/// Payload for `POST /subscription`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSubscriptionRequest {
    /// Customer code or email address.
    pub customer: String,
    /// Plan code.
    pub plan: String,
    /// Authorization code to charge; defaults to the customer's most recent
    /// reusable authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
}

/// Payload for `POST /subscription/enable` and `POST /subscription/disable`.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleSubscriptionRequest {
    /// Subscription code.
    pub code: String,
    /// Email token issued with the subscription.
    pub token: String,
}

/// Client for the `/subscription` endpoint group.
pub struct Subscriptions<'a> {
    client: &'a Client,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Subscribes a customer to a plan.
    pub async fn create(
        &self,
        req: &CreateSubscriptionRequest,
    ) -> Result<Response<Subscription>, Error> {
        let mut resp = Response::default();
        self.client
            .call(Method::POST, "/subscription", Some(req), &mut resp)
            .await?;
        Ok(resp)
    }

    /// Lists subscriptions on the integration.
    pub async fn list(&self, query: &ListQuery) -> Result<Response<Vec<Subscription>>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(Method::GET, &query.apply("/subscription"), None, &mut resp)
            .await?;
        Ok(resp)
    }

    /// Stops renewals on a subscription. The API responds with a bare
    /// message envelope, no `data`.
    pub async fn disable(
        &self,
        req: &ToggleSubscriptionRequest,
    ) -> Result<Response<serde_json::Value>, Error> {
        let mut resp = Response::default();
        self.client
            .call(Method::POST, "/subscription/disable", Some(req), &mut resp)
            .await?;
        Ok(resp)
    }

    /// Resumes renewals on a disabled subscription.
    pub async fn enable(
        &self,
        req: &ToggleSubscriptionRequest,
    ) -> Result<Response<serde_json::Value>, Error> {
        let mut resp = Response::default();
        self.client
            .call(Method::POST, "/subscription/enable", Some(req), &mut resp)
            .await?;
        Ok(resp)
    }
}
