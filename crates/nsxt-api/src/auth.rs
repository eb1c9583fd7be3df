use secrecy::{ExposeSecret, SecretString};

/// HTTP basic-auth credentials for the NSX-T manager.
///
/// The password stays wrapped in a [`SecretString`] and is only exposed
/// when a request is built.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: SecretString,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// Attach the credentials to a request builder.
    pub(crate) fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}
