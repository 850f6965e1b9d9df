//! Contains the Error and Result type used by the tree and the codec.

/// Error produced by the tree accessors and the codec.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`. Errors in this category may be moved to
    /// new variants.
    Other,

    /// End of input at a point where a new tag could have started. This is
    /// the natural end of a stream, not corruption.
    Eof,

    /// End of input part way through some NBT value, including a compound
    /// whose End marker never arrived.
    UnexpectedEof,

    /// A kind byte outside the closed tag set.
    InvalidTag,

    /// A declared length that cannot be honoured, such as a negative list
    /// count or a varint that never terminates.
    InvalidLength,

    /// Expected unicode string data but it was not valid. Contained bytes
    /// are the invalid data.
    Nonunicode(Vec<u8>),

    /// A write was rejected because the value is incompatible with the
    /// target's kind. The target is left unchanged.
    TypeMismatch,
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::Eof)
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch)
    }

    /// True for the family of errors meaning the input byte stream was not
    /// well-formed NBT: invalid kind bytes, bad lengths, truncation and
    /// non-unicode string data.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidTag
                | ErrorKind::InvalidLength
                | ErrorKind::UnexpectedEof
                | ErrorKind::Nonunicode(_)
        )
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Other,
        }
    }

    pub(crate) fn invalid_tag(t: u8) -> Self {
        Self {
            msg: format!("invalid tag: {}", t),
            kind: ErrorKind::InvalidTag,
        }
    }

    pub(crate) fn invalid_length(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::InvalidLength,
        }
    }

    pub(crate) fn nonunicode(d: Vec<u8>) -> Self {
        Self {
            msg: format!(
                "invalid string, non-unicode: {}",
                String::from_utf8_lossy(&d),
            ),
            kind: ErrorKind::Nonunicode(d),
        }
    }

    pub(crate) fn type_mismatch(expected: crate::Tag, actual: crate::Tag) -> Self {
        Self {
            msg: format!("type mismatch: cannot assign {:?} to {:?}", actual, expected),
            kind: ErrorKind::TypeMismatch,
        }
    }

    pub(crate) fn no_root_compound() -> Self {
        Self {
            msg: "invalid nbt: no root compound".to_owned(),
            kind: ErrorKind::InvalidTag,
        }
    }

    pub(crate) fn eof() -> Self {
        Self {
            msg: "EOF".into(),
            kind: ErrorKind::Eof,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: e.to_string(),
                kind: ErrorKind::UnexpectedEof,
            },
            _ => Self {
                msg: e.to_string(),
                kind: ErrorKind::Other,
            },
        }
    }
}
