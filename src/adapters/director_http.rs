//! BOSH director client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::domain::{AppError, Deployment, DeploymentDetails, DirectorConfig};
use crate::ports::DirectorClient;

const USERNAME_ENV: &str = "BOSH_CLIENT";
const PASSWORD_ENV: &str = "BOSH_CLIENT_SECRET";

/// Director username and password.
#[derive(Clone)]
pub struct DirectorCredentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for DirectorCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectorCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl DirectorCredentials {
    /// Credentials from the URL userinfo, falling back to `BOSH_CLIENT` and
    /// `BOSH_CLIENT_SECRET`.
    pub fn from_url_or_env(url: &Url) -> Result<Self, AppError> {
        let username = Some(url.username())
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .or_else(|| std::env::var(USERNAME_ENV).ok().filter(|u| !u.is_empty()))
            .ok_or_else(|| {
                AppError::config_error("Director username and password are required.")
            })?;

        let password = url
            .password()
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .or_else(|| std::env::var(PASSWORD_ENV).ok().filter(|p| !p.is_empty()))
            .ok_or_else(|| AppError::config_error("Director password is required."))?;

        Ok(Self { username, password })
    }
}

#[derive(Clone)]
enum Authorization {
    Basic(DirectorCredentials),
    Bearer(String),
}

/// HTTP client for the BOSH director API.
#[derive(Clone)]
pub struct HttpDirectorClient {
    base_url: Url,
    auth: Authorization,
    client: Client,
}

impl std::fmt::Debug for HttpDirectorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let auth = match self.auth {
            Authorization::Basic(_) => "basic",
            Authorization::Bearer(_) => "bearer",
        };
        f.debug_struct("HttpDirectorClient")
            .field("base_url", &self.base_url.as_str())
            .field("auth", &auth)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
struct DirectorInfo {
    #[serde(default)]
    user_authentication: UserAuthentication,
}

#[derive(Debug, Default, Deserialize)]
struct UserAuthentication {
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    options: AuthOptions,
}

#[derive(Debug, Default, Deserialize)]
struct AuthOptions {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl HttpDirectorClient {
    /// Connect to the director at `url` and authenticate.
    ///
    /// Credentials are taken from the URL userinfo (or the environment) and
    /// removed from the base URL. When the director delegates to UAA, a
    /// password-grant token is fetched up front.
    pub fn connect(url: &Url, config: &DirectorConfig) -> Result<Self, AppError> {
        let credentials = DirectorCredentials::from_url_or_env(url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.skip_tls_verify)
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        if url.cannot_be_a_base() {
            return Err(AppError::config_error(format!("Invalid BOSH director URL: {}", url)));
        }
        let mut base_url = url.clone();
        // Infallible for base URLs.
        let _ = base_url.set_username("");
        let _ = base_url.set_password(None);

        let mut director =
            Self { base_url, auth: Authorization::Basic(credentials.clone()), client };
        director.authorize(credentials, config)?;
        Ok(director)
    }

    fn authorize(
        &mut self,
        credentials: DirectorCredentials,
        config: &DirectorConfig,
    ) -> Result<(), AppError> {
        let info: DirectorInfo = self.get_json(&["info"])?;
        debug!(auth_type = %info.user_authentication.kind, "director info");

        if info.user_authentication.kind == "uaa" {
            let token = self.request_uaa_token(
                &info.user_authentication.options.url,
                &credentials,
                config,
            )?;
            self.auth = Authorization::Bearer(token);
        }
        Ok(())
    }

    fn request_uaa_token(
        &self,
        uaa_url: &str,
        credentials: &DirectorCredentials,
        config: &DirectorConfig,
    ) -> Result<String, AppError> {
        let operation = "UAA token request";
        let token_url = Url::parse(uaa_url)
            .and_then(|uaa| uaa.join("oauth/token"))
            .map_err(|e| {
                AppError::director(operation, format!("invalid UAA URL '{}': {}", uaa_url, e))
            })?;

        info!(url = %token_url, "requesting UAA token");
        let scope = config.scopes.join(" ");
        let response = self
            .client
            .post(token_url)
            .basic_auth(&config.client_id, Some(""))
            .form(&[
                ("grant_type", "password"),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
                ("scope", scope.as_str()),
            ])
            .send()
            .map_err(|e| AppError::director(operation, e))?;

        let response = Self::check_status(operation, response)?;
        let token: TokenResponse = Self::parse_json(operation, response)?;
        Ok(token.access_token)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Authorization::Basic(credentials) => {
                request.basic_auth(&credentials.username, Some(&credentials.password))
            }
            Authorization::Bearer(token) => {
                request.header(reqwest::header::AUTHORIZATION, format!("bearer {}", token))
            }
        }
    }

    /// Director URL for `segments`, each percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("Invalid BOSH director URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, AppError> {
        let url = self.endpoint(segments)?;
        let operation = format!("GET {}", url.path());
        info!(%url, "director request");

        let response = self
            .authorized(self.client.get(url))
            .send()
            .map_err(|e| {
                AppError::director(
                    &operation,
                    format!("Unable to establish connection to BOSH Director: {}", e),
                )
            })?;

        Self::parse_json(&operation, Self::check_status(&operation, response)?)
    }

    fn check_status(operation: &str, response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response);
        }
        let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
        Err(AppError::director(
            operation,
            format!("unexpected response {}: {}", status.as_u16(), body),
        ))
    }

    fn parse_json<T: DeserializeOwned>(operation: &str, response: Response) -> Result<T, AppError> {
        response
            .json()
            .map_err(|e| AppError::director(operation, format!("Failed to parse response: {}", e)))
    }
}

impl DirectorClient for HttpDirectorClient {
    fn deployments(&self) -> Result<Vec<Deployment>, AppError> {
        self.get_json(&["deployments"])
    }

    fn deployment_manifest(&self, name: &str) -> Result<String, AppError> {
        let details: DeploymentDetails = self.get_json(&["deployments", name])?;
        Ok(details.manifest)
    }
}
