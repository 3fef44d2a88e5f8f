//! [`Listing`] image definitions.

use std::sync::LazyLock;

use derive_more::{AsRef, Debug, Display, From, Into};
use regex::Regex;
use unicode_normalization::UnicodeNormalization as _;

#[cfg(doc)]
use crate::domain::Listing;

use super::Id;

/// Extensions (in lowercase) of the image files allowed to be attached to a
/// [`Listing`].
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Checks whether the provided `filename` has one of the
/// [`ALLOWED_EXTENSIONS`] (case-insensitive).
#[must_use]
pub fn is_allowed(filename: &str) -> bool {
    filename.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str())
    })
}

/// Image file uploaded for a [`Listing`].
#[derive(Clone, Debug)]
pub struct Upload {
    /// Original name of the uploaded file, as provided by the client.
    pub filename: String,

    /// Content of the uploaded file.
    #[debug(skip)]
    pub bytes: Vec<u8>,
}

/// Name an uploaded image is stored under.
///
/// Deterministic for a `(listing, filename)` pair, so uploading the same
/// filename twice for one [`Listing`] overwrites the stored file.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct StorageName(String);

impl StorageName {
    /// Creates a new [`StorageName`] for the file with the provided
    /// `filename` uploaded for the [`Listing`] with the provided [`Id`].
    ///
    /// The resulting name is safe to be used as a single path component: it
    /// consists of ASCII letters, digits, `_`, `.` and `-` only, and never
    /// starts or ends with `_` or `.`. Accented letters are decomposed
    /// (NFKD) first, so they keep their ASCII base letter.
    #[must_use]
    pub fn new(listing_id: Id, filename: &str) -> Self {
        static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"[^A-Za-z0-9_.-]").expect("valid regex")
        });

        let raw = format!("{listing_id}_{filename}")
            .nfkd()
            .collect::<String>()
            .replace(['/', '\\'], " ");
        let joined = raw.split_whitespace().collect::<Vec<_>>().join("_");
        let name = DISALLOWED.replace_all(&joined, "");
        Self(name.trim_matches(['.', '_']).to_owned())
    }
}

/// URL an attached image can be retrieved by.
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, Into, PartialEq)]
#[as_ref(str, String)]
pub struct Url(String);
