use std::env::{self, VarError};
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const ADDRESS: &str = "SHARE_PAGE_ADDRESS";
const INTENT_URL: &str = "SHARE_INTENT_URL";
const ASSETS: &str = "SHARE_PAGE_ASSETS";

const DEFAULT_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_INTENT_URL: &str = "https://x.com/intent/tweet";
const DEFAULT_ASSETS: &str = "assets";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error reading environment variable {variable}: {source}")]
    Variable {
        variable: &'static str,
        #[source]
        source: VarError,
    },
    #[error("Error parsing {variable} as socket address: {source}")]
    Address {
        variable: &'static str,
        #[source]
        source: AddrParseError,
    },
    #[error("Error parsing {variable} as URL: {source}")]
    Url {
        variable: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("Expected {variable} to be an http(s) URL without query or fragment but got \"{url}\"")]
    UnsupportedIntentUrl { variable: &'static str, url: Url },
}

#[derive(Debug, Clone)]
pub struct Configuration {
    /// Address the server listens on
    pub address: SocketAddr,
    /// Compose post endpoint the share text is sent to
    pub intent_url: Url,
    /// Directory with the stylesheet and copy script
    pub assets: PathBuf,
}

impl Configuration {
    /// Loads the configuration from the environment, using the defaults for unset variables
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|variable| env::var(variable))
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Result<String, VarError>) -> Result<Self, Error> {
        let read = |variable: &'static str, default: &str| match lookup(variable) {
            Ok(value) => Ok(value),
            Err(VarError::NotPresent) => Ok(default.to_string()),
            Err(source) => Err(Error::Variable { variable, source }),
        };

        let address: SocketAddr = read(ADDRESS, DEFAULT_ADDRESS)?
            .parse()
            .map_err(|source| Error::Address {
                variable: ADDRESS,
                source,
            })?;

        let intent_url =
            Url::parse(&read(INTENT_URL, DEFAULT_INTENT_URL)?).map_err(|source| Error::Url {
                variable: INTENT_URL,
                source,
            })?;

        let is_supported = matches!(intent_url.scheme(), "http" | "https")
            && intent_url.query().is_none()
            && intent_url.fragment().is_none();
        if !is_supported {
            return Err(Error::UnsupportedIntentUrl {
                variable: INTENT_URL,
                url: intent_url,
            });
        }

        let assets = PathBuf::from(read(ASSETS, DEFAULT_ASSETS)?);

        Ok(Self {
            address,
            intent_url,
            assets,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(variables: &[(&'static str, &str)]) -> Result<Configuration, Error> {
        let variables: HashMap<&str, String> = variables
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect();
        Configuration::from_lookup(|variable| {
            variables.get(variable).cloned().ok_or(VarError::NotPresent)
        })
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let configuration = load(&[]).unwrap();
        assert_eq!(configuration.address, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(configuration.intent_url.as_str(), "https://x.com/intent/tweet");
        assert_eq!(configuration.assets, PathBuf::from("assets"));
    }

    #[test]
    fn reads_all_variables() {
        let configuration = load(&[
            (ADDRESS, "0.0.0.0:8080"),
            (INTENT_URL, "https://twitter.com/intent/tweet"),
            (ASSETS, "/srv/share/assets"),
        ])
        .unwrap();

        assert_eq!(configuration.address.port(), 8080);
        assert_eq!(configuration.intent_url.host_str(), Some("twitter.com"));
        assert_eq!(configuration.assets, PathBuf::from("/srv/share/assets"));
    }

    #[test]
    fn rejects_invalid_address() {
        let error = load(&[(ADDRESS, "localhost")]).unwrap_err();
        assert!(matches!(error, Error::Address { variable: ADDRESS, .. }));
    }

    #[test]
    fn rejects_intent_url_with_query() {
        let error = load(&[(INTENT_URL, "https://x.com/intent/tweet?via=someone")]).unwrap_err();
        assert!(matches!(error, Error::UnsupportedIntentUrl { .. }));

        let error = load(&[(INTENT_URL, "mailto:someone@example.com")]).unwrap_err();
        assert!(matches!(error, Error::UnsupportedIntentUrl { .. }));

        let error = load(&[(INTENT_URL, "not a url")]).unwrap_err();
        assert!(matches!(error, Error::Url { .. }));
    }

    #[test]
    fn reports_non_unicode_variables() {
        let error = Configuration::from_lookup(|_| {
            Err(VarError::NotUnicode(std::ffi::OsString::from("x")))
        })
        .unwrap_err();
        assert!(matches!(error, Error::Variable { variable: ADDRESS, .. }));
    }
}
