//! Where the filename of a delete request comes from.
//!
//! The web server passes the name as `FILENAME`. `HTTP_FILE_NAME` (the
//! `File-Name` header) and a `filename` query parameter are accepted as
//! fallbacks so the handler also works behind a stock CGI gateway.

use std::env;
use std::ffi::{OsStr, OsString};

const FILENAME_VAR: &str = "FILENAME";
const FILE_NAME_HEADER_VAR: &str = "HTTP_FILE_NAME";
const QUERY_STRING_VAR: &str = "QUERY_STRING";
const QUERY_KEY: &str = "filename";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub filename: Option<OsString>,
}

impl Request {
    pub fn new(filename: impl Into<OsString>) -> Self {
        Self { filename: Some(filename.into()) }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Builds a request from any variable lookup. The first source that is set
    /// wins, even when its value is empty. Values are kept as raw OS strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let filename = lookup(FILENAME_VAR)
            .or_else(|| lookup(FILE_NAME_HEADER_VAR))
            .or_else(|| {
                lookup(QUERY_STRING_VAR)
                    .and_then(|query| query.to_str().and_then(|query| query_param(query, QUERY_KEY)))
                    .map(OsString::from)
            });
        Self { filename }
    }

    pub fn filename(&self) -> Option<&OsStr> {
        self.filename.as_deref()
    }
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            let decoded = urlencoding::decode(&value).map(|decoded| decoded.into_owned());
            match decoded {
                Ok(decoded) => decoded,
                Err(e) => {
                    tracing::debug!(error = %e, "query value is not valid UTF-8 once decoded, using it raw");
                    value
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(*v)))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_reads_filename_var() {
        let request = Request::from_lookup(lookup_from(&[("FILENAME", "report.txt")]));
        assert_eq!(request.filename(), Some(OsStr::new("report.txt")));
    }

    #[test]
    fn test_absent_everywhere() {
        let request = Request::from_lookup(lookup_from(&[]));
        assert_eq!(request, Request::default());
    }

    #[test]
    fn test_filename_var_wins_over_fallbacks() {
        let request = Request::from_lookup(lookup_from(&[
            ("FILENAME", "a.txt"),
            ("HTTP_FILE_NAME", "b.txt"),
            ("QUERY_STRING", "filename=c.txt"),
        ]));
        assert_eq!(request.filename(), Some(OsStr::new("a.txt")));
    }

    #[test]
    fn test_empty_filename_var_still_wins() {
        let request = Request::from_lookup(lookup_from(&[
            ("FILENAME", ""),
            ("HTTP_FILE_NAME", "b.txt"),
        ]));
        assert_eq!(request.filename(), Some(OsStr::new("")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_filename_is_kept() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let raw = OsString::from_vec(b"caf\xe9.txt".to_vec());
        let request = Request::from_lookup(|key| (key == "FILENAME").then(|| raw.clone()));
        assert_eq!(request.filename(), Some(OsStr::from_bytes(b"caf\xe9.txt")));
    }

    #[test]
    fn test_header_fallback() {
        let request = Request::from_lookup(lookup_from(&[
            ("HTTP_FILE_NAME", "b.txt"),
            ("QUERY_STRING", "filename=c.txt"),
        ]));
        assert_eq!(request.filename(), Some(OsStr::new("b.txt")));
    }

    #[test]
    fn test_query_string_is_decoded() {
        let request = Request::from_lookup(lookup_from(&[
            ("QUERY_STRING", "a=1&filename=my%20file.txt"),
        ]));
        assert_eq!(request.filename(), Some(OsStr::new("my file.txt")));
    }

    #[test]
    fn test_query_string_plus_is_space() {
        assert_eq!(query_param("filename=my+file.txt", "filename").as_deref(), Some("my file.txt"));
    }

    #[test]
    fn test_query_string_without_filename() {
        let request = Request::from_lookup(lookup_from(&[("QUERY_STRING", "a=1&b=2")]));
        assert_eq!(request.filename(), None);
    }

    #[test]
    fn test_query_key_without_value() {
        assert_eq!(query_param("filename", "filename").as_deref(), Some(""));
    }
}
