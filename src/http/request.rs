use reqwest::header::{
    HeaderMap as Headers,
    HeaderValue,
    AUTHORIZATION,
    CONTENT_LENGTH,
    CONTENT_TYPE,
    USER_AGENT,
};
use reqwest::{Client, RequestBuilder as ReqwestRequestBuilder, Url};
#[cfg(feature = "tracing_instrument")]
use tracing::instrument;

use super::multipart::Multipart;
use super::routing::Route;
use super::{HttpError, LightMethod};
use crate::constants;
use crate::internal::prelude::*;

/// A single API request: the route, its method, and an optional JSON or multipart body.
#[derive(Clone, Debug)]
#[must_use]
pub struct Request<'a> {
    pub(super) body: Option<Vec<u8>>,
    pub(super) multipart: Option<Multipart>,
    pub(super) headers: Option<Headers>,
    pub(super) method: LightMethod,
    pub(super) route: Route<'a>,
}

impl<'a> Request<'a> {
    pub fn new(route: Route<'a>, method: LightMethod) -> Self {
        Self {
            body: None,
            multipart: None,
            headers: None,
            method,
            route,
        }
    }

    pub fn body(mut self, body: Option<Vec<u8>>) -> Self {
        self.body = body;
        self
    }

    pub fn multipart(mut self, multipart: Option<Multipart>) -> Self {
        self.multipart = multipart;
        self
    }

    pub fn headers(mut self, headers: Option<Headers>) -> Self {
        self.headers = headers;
        self
    }

    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, client, token)))]
    pub(super) fn build(
        self,
        client: &Client,
        token: &str,
        proxy: Option<&Url>,
    ) -> Result<ReqwestRequestBuilder> {
        let mut path = self.route.path().into_owned();

        if let Some(proxy) = proxy {
            path = path.replace(constants::DISCORD_ORIGIN, proxy.as_str());
        }

        let mut builder = client
            .request(self.method.reqwest_method(), Url::parse(&path).map_err(HttpError::Url)?);

        let mut headers = Headers::with_capacity(4);
        headers.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));
        headers
            .insert(AUTHORIZATION, HeaderValue::from_str(token).map_err(HttpError::InvalidHeader)?);

        // Discord will return a 400: Bad Request response if we set the content type header,
        // but don't give a body.
        if self.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if let Some(multipart) = self.multipart {
            // Setting multipart adds the content-length header.
            builder = builder.multipart(multipart.build_form()?);
        } else {
            let length = self
                .body
                .as_ref()
                .map(|b| HeaderValue::try_from(b.len().to_string()))
                .transpose()
                .map_err(HttpError::InvalidHeader)?;

            headers.insert(CONTENT_LENGTH, length.unwrap_or_else(|| HeaderValue::from_static("0")));
        }

        if let Some(request_headers) = self.headers {
            headers.extend(request_headers);
        }

        if let Some(bytes) = self.body {
            builder = builder.body(bytes);
        }

        Ok(builder.headers(headers))
    }

    #[must_use]
    pub fn body_ref(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    #[must_use]
    pub fn multipart_ref(&self) -> Option<&Multipart> {
        self.multipart.as_ref()
    }

    #[must_use]
    pub fn headers_ref(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    #[must_use]
    pub fn method(&self) -> LightMethod {
        self.method
    }

    #[must_use]
    pub fn route_ref(&self) -> &Route<'a> {
        &self.route
    }
}
