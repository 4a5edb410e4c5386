//! The fixed list of authors that can sign a post.

use std::collections::BTreeMap;
use std::io;

use lazy_static::lazy_static;
use maplit::btreemap;

use crate::error::FormError;

/// Author selected when none is given on the command line or in the config file.
pub const DEFAULT_AUTHOR: &str = "hn";

lazy_static! {
    static ref AUTHORS: BTreeMap<&'static str, &'static str> = btreemap! {
        "hn" => "Huy Nguyen, Software Engineer",
        "tr" => "Tien Tran, Team Lead",
    };
}

/// Get the display name ("Name, Role") of an author from its short key.
pub fn lookup(key: &str) -> Result<&'static str, FormError> {
    AUTHORS.get(key).copied().ok_or_else(|| FormError::UnknownAuthor {
        key: key.to_string(),
        known: AUTHORS.keys().copied().collect(),
    })
}

/// All `(key, display name)` pairs, ordered by key.
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    AUTHORS.iter().map(|(k, v)| (*k, *v))
}

/// Writes one `key: display name` line per author.
pub fn write_list(out: &mut impl io::Write) -> io::Result<()> {
    for (key, name) in all() {
        writeln!(out, "{}: {}", key, name)?;
    }
    Ok(())
}
