use url::Url;

use crate::PostgrestFilter;

#[derive(Debug, Clone)]
pub struct PostgrestURL(Url);

impl AsRef<str> for PostgrestURL {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl PostgrestURL {
    pub fn parse(base: &str) -> Result<Self, url::ParseError> {
        Url::parse(base).map(Self)
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.as_str().trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        let joined = format!("{}/{}", trimmed_url, trimmed_path);

        // Joining a valid base with a plain path segment cannot fail
        Self(Url::parse(&joined).unwrap_or_else(|_| self.0.clone()))
    }

    /// Path of a table under the REST prefix, e.g. `rest/v1/article`.
    pub fn table(&self, table: &str) -> Self {
        self.append_path(&format!("rest/v1/{}", table))
    }

    pub fn with_param(&self, key: &str, value: &str) -> Self {
        let mut url = self.0.clone();
        url.query_pairs_mut().append_pair(key, value);
        Self(url)
    }

    /// Appends the filter parameter, if the filter has one.
    pub fn with_filter(&self, filter: &(impl PostgrestFilter + ?Sized)) -> Self {
        match filter.as_postgrest_filter() {
            Some((key, value)) => self.with_param(&key, &value),
            None => self.clone(),
        }
    }
}
