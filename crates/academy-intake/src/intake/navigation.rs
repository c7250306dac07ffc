use std::fmt;

use url::Url;

const LOCAL_ORIGIN: &str = "http://localhost/";

/// The page location an intake session was mounted on.
///
/// Accepts absolute URLs as well as origin-relative locations such as
/// `/apply?program=Tutoring`, which resolve against a local origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    url: Url,
}

impl NavigationContext {
    pub fn parse(location: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(LOCAL_ORIGIN)?;
        let url = Url::options().base_url(Some(&base)).parse(location.trim())?;
        Ok(Self { url })
    }

    pub fn from_url(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// First value for `key`, mirroring `URLSearchParams.get`.
    pub fn param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned())
    }
}

impl fmt::Display for NavigationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}
