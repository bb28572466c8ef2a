//! # Posted Data
//!
//! Decoding reads posted values through the [`FormSource`] trait: given a key,
//! return at most one value. Anything that can answer that question can feed
//! the decoder, so transports stay out of the engine.
//!
//! ## Implementations
//!
//! - [`FormData`]: an ordered multimap of posted pairs, with a parser for
//!   `application/x-www-form-urlencoded` bodies and query strings.
//! - `HashMap<String, String>` and `BTreeMap<String, String>`.
//! - `HashMap<String, Vec<String>>`: the first value of each key.
//!
//! Sources are only read, never modified.

use std::collections::{BTreeMap, HashMap};

/// Supplier of posted form values.
pub trait FormSource {
    /// The posted value for `key`, if any.
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl FormSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FormSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FormSource for HashMap<String, Vec<String>> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

impl<S: FormSource + ?Sized> FormSource for &S {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

/// Posted key/value pairs in submission order.
///
/// A key may appear several times; [`lookup`](FormSource::lookup) returns the
/// first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Parse an urlencoded body such as `name=Ann&age=18`.
    ///
    /// `+` decodes to a space and `%XX` to the byte it names. Malformed
    /// escapes are kept as written. A pair without `=` has an empty value.
    ///
    /// ```
    /// use formwire::{FormData, FormSource};
    ///
    /// let data = FormData::parse_query("name=Ann+Lee&city=K%C3%B6ln&flag");
    /// assert_eq!(data.lookup("name"), Some("Ann Lee"));
    /// assert_eq!(data.lookup("city"), Some("Köln"));
    /// assert_eq!(data.lookup("flag"), Some(""));
    /// assert_eq!(data.lookup("missing"), None);
    /// ```
    pub fn parse_query(query: &str) -> Self {
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (percent_decode(key), percent_decode(value))
            })
            .collect();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl FormSource for FormData {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => match bytes.get(i + 1..i + 3).and_then(|pair| hex_pair(pair[0], pair[1])) {
                Some(byte) => {
                    out.push(byte);
                    i += 2;
                }
                None => out.push(b'%'),
            },
            other => out.push(other),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(high: u8, low: u8) -> Option<u8> {
    let high = (high as char).to_digit(16)?;
    let low = (low as char).to_digit(16)?;
    Some((high * 16 + low) as u8)
}
