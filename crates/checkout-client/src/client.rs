//! Checkout HTTP client implementation.

use std::fmt;
use std::time::Duration;

use checkout_core::{Order, OrderId, OrderStatus};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::ClientOptions;
use crate::endpoint::{self, Endpoint};
use crate::error::ClientError;
use crate::ticket::TicketCache;
use crate::types::{Calculation, PostcodeQuery};

/// How a GET request proves who is calling. POST requests always carry the API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    /// Session ticket in the query string.
    Ticket,
    /// Raw API key in the query string.
    ApiKey,
}

/// Checkout platform API client.
///
/// Provides address lookups, delivery cost calculation and order management.
/// Clones share the HTTP connection pool and the ticket cache.
#[derive(Clone)]
pub struct CheckoutClient {
    client: Client,
    host: String,
    api_key: String,
    ticket_ttl: Duration,
    tickets: TicketCache,
}

impl CheckoutClient {
    /// Create a client for the production platform.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Merchant API key issued by Checkout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(api_key, ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the API key cannot be part of a
    /// URL path or the HTTP client cannot be built.
    pub fn with_options(
        api_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let api_key = api_key.into();
        validate_api_key(&api_key)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|err| ClientError::Configuration(format!("HTTP client: {err}")))?;

        Ok(Self {
            client,
            host: options.host.trim_end_matches('/').to_string(),
            api_key,
            ticket_ttl: options.ticket_ttl,
            tickets: options.ticket_cache,
        })
    }

    /// Create a client from environment variables.
    ///
    /// The API key is read from `CHECKOUT_API_KEY`; everything else as in
    /// [`ClientOptions::from_env`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the key is missing or an
    /// option does not parse.
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = std::env::var("CHECKOUT_API_KEY")
            .map_err(|_| ClientError::Configuration("CHECKOUT_API_KEY is not set".to_string()))?;
        Self::with_options(api_key, ClientOptions::from_env()?)
    }

    /// The ticket cache this client reads from.
    #[must_use]
    pub fn ticket_cache(&self) -> &TicketCache {
        &self.tickets
    }

    /// Current session ticket, fetched or refreshed as needed.
    ///
    /// A ticket is reused until it is `ticket_ttl` old, counting from the
    /// last successful response for this API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket endpoint rejects the API key.
    pub async fn ticket(&self) -> Result<String, ClientError> {
        self.tickets
            .get_or_refresh(&self.api_key, self.ticket_ttl, move || self.fetch_ticket())
            .await
    }

    /// Search places (cities, settlements) by name.
    ///
    /// Returns the `suggestions` field of the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform reports an error.
    pub async fn get_places(&self, query: &str) -> Result<Option<Value>, ClientError> {
        let mut params = Map::new();
        params.insert("place".into(), query.into());

        let response = self
            .perform(Endpoint::PlacesByQuery.name(), Method::GET, Auth::Ticket, params)
            .await?;
        Ok(take_field(response, "suggestions"))
    }

    /// Search streets within a place.
    ///
    /// Returns the `suggestions` field of the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform reports an error.
    pub async fn get_streets(&self, place_id: &str, query: &str) -> Result<Option<Value>, ClientError> {
        let mut params = Map::new();
        params.insert("placeId".into(), place_id.into());
        params.insert("street".into(), query.into());

        let response = self
            .perform(Endpoint::StreetsByQuery.name(), Method::GET, Auth::Ticket, params)
            .await?;
        Ok(take_field(response, "suggestions"))
    }

    /// Look up the postal code of a street address.
    ///
    /// Returns the `postindex` field of the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform reports an error.
    pub async fn get_postcode(&self, query: &PostcodeQuery) -> Result<Option<Value>, ClientError> {
        let response = self
            .perform(
                Endpoint::PostalCodeByAddress.name(),
                Method::GET,
                Auth::Ticket,
                to_params(query)?,
            )
            .await?;
        Ok(take_field(response, "postindex"))
    }

    /// Look up the place a postal code belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform reports an error.
    pub async fn get_place_by_postcode(&self, postcode: &str) -> Result<Value, ClientError> {
        let mut params = Map::new();
        params.insert("postIndex".into(), postcode.into());

        self.perform(Endpoint::PlaceByPostalCode.name(), Method::GET, Auth::Ticket, params)
            .await
    }

    /// Calculate delivery offers with cost and terms.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform reports an error.
    pub async fn calculation(&self, calculation: &Calculation) -> Result<Value, ClientError> {
        self.perform(
            Endpoint::Calculation.name(),
            Method::GET,
            Auth::Ticket,
            to_params(calculation)?,
        )
        .await
    }

    /// Create an order.
    ///
    /// The response carries the platform order id under `order.id` and the
    /// final delivery cost under `delivery.cost`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform reports an error.
    pub async fn create_order(&self, order: &Order) -> Result<Value, ClientError> {
        self.perform(Endpoint::CreateOrder.name(), Method::POST, Auth::ApiKey, order_body(order)?)
            .await
    }

    /// Replace the contents of an existing order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform reports an error.
    pub async fn edit_order(&self, id: &OrderId, order: &Order) -> Result<Value, ClientError> {
        self.perform(
            &Endpoint::CreateOrder.with_suffix(id),
            Method::POST,
            Auth::ApiKey,
            order_body(order)?,
        )
        .await
    }

    /// Move an order to a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform reports an error.
    pub async fn change_status(&self, id: &OrderId, status: OrderStatus) -> Result<Value, ClientError> {
        let mut body = Map::new();
        body.insert("status".into(), status.as_str().into());

        self.perform(&Endpoint::Status.with_suffix(id), Method::POST, Auth::ApiKey, body)
            .await
    }

    /// Cancel an order before shipment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform reports an error.
    pub async fn cancel_order(&self, id: &OrderId) -> Result<Value, ClientError> {
        self.change_status(id, OrderStatus::Canceled).await
    }

    /// Move a cancelled order back to [`OrderStatus::Created`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform reports an error.
    pub async fn change_status_to_created(&self, id: &OrderId) -> Result<Value, ClientError> {
        self.change_status(id, OrderStatus::Created).await
    }

    /// Order details together with its status history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform reports an error.
    pub async fn get_order_info(&self, id: &OrderId) -> Result<Value, ClientError> {
        self.perform(
            &Endpoint::StatusHistory.with_suffix(id),
            Method::GET,
            Auth::ApiKey,
            Map::new(),
        )
        .await
    }

    /// Status history as recorded by the platform.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform reports an error.
    pub async fn get_status_history(&self, id: &OrderId) -> Result<Value, ClientError> {
        self.perform(
            &Endpoint::PlatformStatusHistory.with_suffix(id),
            Method::GET,
            Auth::ApiKey,
            Map::new(),
        )
        .await
    }

    /// Send an authenticated request and unwrap the response envelope.
    ///
    /// GET bodies become query parameters. POST bodies carry the API key and
    /// are sent as JSON. A success status resets the ticket expiry clock,
    /// even when the envelope reports an error.
    async fn perform(
        &self,
        endpoint: &str,
        method: Method,
        auth: Auth,
        mut body: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        if method == Method::GET && auth == Auth::Ticket {
            body.insert("ticket".into(), self.ticket().await?.into());
        } else {
            body.insert("apiKey".into(), self.api_key.clone().into());
        }

        let response = self.send(endpoint, &method, &body).await?;
        if response.status().is_success() {
            self.tickets.touch(&self.api_key).await;
        }
        handle_response(response).await
    }

    async fn fetch_ticket(&self) -> Result<String, ClientError> {
        let endpoint = Endpoint::Ticket.with_suffix(&self.api_key);
        let response = self.send(&endpoint, &Method::GET, &Map::new()).await?;

        handle_response(response)
            .await?
            .get("ticket")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ClientError::UnexpectedResponse("ticket endpoint returned no ticket".to_string()))
    }

    async fn send(
        &self,
        endpoint: &str,
        method: &Method,
        body: &Map<String, Value>,
    ) -> Result<Response, ClientError> {
        let url = self.url(endpoint);
        let target = if endpoint.starts_with(Endpoint::Ticket.path()) {
            Endpoint::Ticket.path()
        } else {
            endpoint::resolve(endpoint)
        };
        tracing::debug!(%method, endpoint = target, "Sending Checkout request");

        let request = if *method == Method::GET {
            self.client.get(&url).query(body)
        } else {
            self.client.request(method.clone(), &url).json(body)
        };

        Ok(request.send().await.map_err(reqwest::Error::without_url)?)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.host, endpoint::resolve(endpoint))
    }
}

impl fmt::Debug for CheckoutClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutClient")
            .field("host", &self.host)
            .field("ticket_ttl", &self.ticket_ttl)
            .finish_non_exhaustive()
    }
}

/// Convert a response into the envelope payload or an error.
async fn handle_response(response: Response) -> Result<Value, ClientError> {
    let status = response.status();
    let body = response.text().await.map_err(reqwest::Error::without_url)?;

    match serde_json::from_str::<Value>(&body) {
        Ok(value) => {
            if let Some(err) = remote_error(&value) {
                tracing::warn!(status = %status, error = %err, "Checkout reported an error");
                return Err(err);
            }
            if status.is_success() {
                return Ok(value);
            }
        }
        Err(err) if status.is_success() => return Err(err.into()),
        Err(_) => {}
    }

    tracing::error!(status = %status, body = %body, "Checkout request failed");
    Err(ClientError::Transport {
        status: status.as_u16(),
        body,
    })
}

/// Extract the error reported in a response envelope, if any.
fn remote_error(value: &Value) -> Option<ClientError> {
    let envelope = value.as_object()?;
    if !envelope.get("error").is_some_and(is_truthy) {
        return None;
    }

    let message = match envelope.get("errorMessage") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    let code = envelope.get("errorCode").cloned().unwrap_or(Value::Null);

    Some(ClientError::Remote { message, code })
}

/// The API key is sent as a path segment of the ticket endpoint.
fn validate_api_key(api_key: &str) -> Result<(), ClientError> {
    if api_key.is_empty() || api_key.contains(['/', '?', '#']) || api_key.trim() != api_key {
        return Err(ClientError::Configuration(
            "API key must be a non-empty URL path segment".to_string(),
        ));
    }
    Ok(())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn take_field(mut value: Value, field: &str) -> Option<Value> {
    value.as_object_mut()?.remove(field)
}

fn to_params<T: Serialize>(value: &T) -> Result<Map<String, Value>, ClientError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(ClientError::Configuration(format!(
            "request parameters must serialize to an object, got {other}"
        ))),
    }
}

fn order_body(order: &Order) -> Result<Map<String, Value>, ClientError> {
    let mut body = Map::new();
    body.insert("order".into(), serde_json::to_value(order)?);
    Ok(body)
}
