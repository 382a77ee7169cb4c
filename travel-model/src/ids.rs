use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DOCUMENT_ID_LEN: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid ID format: {0}")]
pub struct InvalidDocumentId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid ISO country code: {0}")]
pub struct InvalidIsoCode(pub String);

/// A validated document identifier.
///
/// Only the canonical rendering is accepted: exactly 24 lowercase hex
/// characters, as produced by the store for every document `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

impl DocumentId {
    pub fn parse(id: &str) -> Result<Self, InvalidDocumentId> {
        let well_formed = id.len() == DOCUMENT_ID_LEN
            && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));

        if well_formed {
            Ok(Self(id.to_string()))
        } else {
            Err(InvalidDocumentId(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = InvalidDocumentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DocumentId {
    type Error = InvalidDocumentId;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::parse(&id)
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A two-letter ISO 3166 country code, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IsoCode(String);

impl IsoCode {
    pub fn parse(code: &str) -> Result<Self, InvalidIsoCode> {
        if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(InvalidIsoCode(code.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IsoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IsoCode {
    type Err = InvalidIsoCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IsoCode {
    type Error = InvalidIsoCode;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::parse(&code)
    }
}

impl From<IsoCode> for String {
    fn from(code: IsoCode) -> Self {
        code.0
    }
}

/// How a `/countries/:id` path parameter should be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryKey {
    Id(DocumentId),
    IsoCode(IsoCode),
}

impl CountryKey {
    /// Identifier shape wins over ISO code shape. Returns `None` for input
    /// that is neither.
    pub fn parse(raw: &str) -> Option<Self> {
        if let Ok(id) = DocumentId::parse(raw) {
            return Some(Self::Id(id));
        }
        IsoCode::parse(raw).ok().map(Self::IsoCode)
    }
}
