//! The `/customer` endpoint group.

use reqwest::Method;
use serde::Serialize;

use crate::{query::ListQuery, response::Response, types::Customer, Client, Error};

/// Payload for `POST /customer`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCustomerRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Payload for `PUT /customer/{code}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Client for the `/customer` endpoint group.
pub struct Customers<'a> {
    client: &'a Client,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a customer.
    pub async fn create(&self, req: &CreateCustomerRequest) -> Result<Response<Customer>, Error> {
        let mut resp = Response::default();
        self.client
            .call(Method::POST, "/customer", Some(req), &mut resp)
            .await?;
        Ok(resp)
    }

    /// Lists customers on the integration.
    pub async fn list(&self, query: &ListQuery) -> Result<Response<Vec<Customer>>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(Method::GET, &query.apply("/customer"), None, &mut resp)
            .await?;
        Ok(resp)
    }

    /// Fetches a customer by code (or email).
    pub async fn fetch(&self, code: &str) -> Result<Response<Customer>, Error> {
        let mut resp = Response::default();
        self.client
            .call::<(), _>(
                Method::GET,
                format!("/customer/{}", code).as_str(),
                None,
                &mut resp,
            )
            .await?;
        Ok(resp)
    }

    /// Updates a customer by code.
    pub async fn update(
        &self,
        code: &str,
        req: &UpdateCustomerRequest,
    ) -> Result<Response<Customer>, Error> {
        let mut resp = Response::default();
        self.client
            .call(
                Method::PUT,
                format!("/customer/{}", code).as_str(),
                Some(req),
                &mut resp,
            )
            .await?;
        Ok(resp)
    }
}
