use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, ClientBuilder, Url};
use tracing::{debug, trace};
#[cfg(feature = "tracing_instrument")]
use tracing::instrument;

use super::{ErrorResponse, HttpError, HttpExecutor, Request};
use crate::internal::prelude::*;
use crate::model::id::ApplicationId;

/// A builder implementing [`Default`] to construct a [`Http`] client.
///
/// ```rust,no_run
/// use slashcord::http::HttpBuilder;
/// use slashcord::model::id::ApplicationId;
///
/// # fn run() -> slashcord::Result<()> {
/// let http = HttpBuilder::new("token")
///     .application_id(ApplicationId::new(1234))
///     .proxy("http://127.0.0.1:3000")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct HttpBuilder {
    client: Option<Client>,
    token: SecretString,
    proxy: Option<String>,
    application_id: Option<ApplicationId>,
}

impl HttpBuilder {
    /// Construct a new builder to call methods on for the HTTP construction. The `token` will
    /// automatically be prefixed "Bot " if not already.
    pub fn new(token: impl AsRef<str>) -> Self {
        Self {
            client: None,
            token: SecretString::new(parse_token(token)),
            proxy: None,
            application_id: None,
        }
    }

    /// Sets the application_id to use interactions.
    pub fn application_id(mut self, application_id: ApplicationId) -> Self {
        self.application_id = Some(application_id);
        self
    }

    /// Sets the [`reqwest::Client`]. If one isn't provided, a default one will be used.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the proxy that Discord HTTP API requests will be passed to. This is mainly intended
    /// for something like [`twilight-http-proxy`] where multiple processes can make API requests
    /// while sharing a single ratelimiter.
    ///
    /// The proxy should be in the form of the protocol and hostname, e.g.
    /// `http://127.0.0.1:3000` or `http://myproxy.example`
    ///
    /// This will simply send HTTP API requests to the proxy instead of Discord API to allow the
    /// proxy to intercept, rate limit, and forward requests. This is different than a native
    /// proxy's behavior where it will tunnel requests that use TLS via [`HTTP CONNECT`] method
    /// (e.g. using [`reqwest::Proxy`]).
    ///
    /// [`twilight-http-proxy`]: https://github.com/twilight-rs/http-proxy
    /// [`HTTP CONNECT`]: https://developer.mozilla.org/en-US/docs/Web/HTTP/Methods/CONNECT
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Use the given configuration to build the `Http` client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if the proxy is not a valid URL, or [`Error::Http`] if the default
    /// client could not be built.
    pub fn build(self) -> Result<Http> {
        let application_id = AtomicU64::new(self.application_id.map_or(0, ApplicationId::get));

        let client = match self.client {
            Some(client) => client,
            None => configure_client_backend(Client::builder()).build()?,
        };

        let proxy = match self.proxy {
            Some(proxy) => Some(Url::parse(&proxy).map_err(|_| Error::Url(proxy))?),
            None => None,
        };

        Ok(Http {
            client,
            token: self.token,
            proxy,
            application_id,
        })
    }
}

fn parse_token(token: impl AsRef<str>) -> String {
    let token = token.as_ref().trim();

    if token.starts_with("Bot ") || token.starts_with("Bearer ") {
        token.to_string()
    } else {
        format!("Bot {token}")
    }
}

#[cfg(feature = "rustls_backend")]
fn configure_client_backend(builder: ClientBuilder) -> ClientBuilder {
    builder.use_rustls_tls()
}

#[cfg(all(feature = "native_tls_backend", not(feature = "rustls_backend")))]
fn configure_client_backend(builder: ClientBuilder) -> ClientBuilder {
    builder.use_native_tls()
}

#[cfg(not(any(feature = "rustls_backend", feature = "native_tls_backend")))]
fn configure_client_backend(builder: ClientBuilder) -> ClientBuilder {
    builder
}

/// A low-level client for sending requests to Discord's HTTP REST API.
///
/// **Note**: For all member functions that return a [`Result`], the Error kind will be either
/// [`Error::Http`] or [`Error::Json`].
#[derive(Debug)]
pub struct Http {
    pub(crate) client: Client,
    token: SecretString,
    proxy: Option<Url>,
    application_id: AtomicU64,
}

impl Http {
    /// Creates a client with the given token and the default settings. The `token` is prefixed
    /// "Bot " if not already.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the underlying client could not be built.
    pub fn new(token: &str) -> Result<Self> {
        HttpBuilder::new(token).build()
    }

    /// Sets the application id used when an interaction does not carry one.
    pub fn set_application_id(&self, application_id: ApplicationId) {
        self.application_id.store(application_id.get(), Ordering::Relaxed);
    }

    /// The proxy requests are sent to instead of Discord, if configured.
    #[must_use]
    pub fn proxy(&self) -> Option<&Url> {
        self.proxy.as_ref()
    }
}

#[async_trait]
impl HttpExecutor for Http {
    fn application_id(&self) -> Option<ApplicationId> {
        match self.application_id.load(Ordering::Relaxed) {
            0 => None,
            id => Some(ApplicationId::new(id)),
        }
    }

    /// Performs a request, checking its status.
    ///
    /// The body of a non-successful response is read into the returned
    /// [`HttpError::UnsuccessfulRequest`].
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, request)))]
    async fn execute(&self, request: Request<'_>) -> Result<Bytes> {
        let method = request.method().reqwest_method();
        debug!("{} {}", method, request.route_ref().name());

        let builder = request.build(&self.client, self.token.expose_secret(), self.proxy.as_ref())?;
        let response = builder.send().await?;

        if response.status().is_success() {
            return Ok(response.bytes().await?);
        }

        debug!("Unsuccessful response: {}", response.status());
        let error = ErrorResponse::from_response(response, method).await;
        trace!("Unsuccessful response body: {}", error.body);

        Err(Error::Http(HttpError::UnsuccessfulRequest(error)))
    }
}
