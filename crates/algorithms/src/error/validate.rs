//! Guard helpers returning the matching [`Error`] variant on failure

use super::{Error, Result};

/// `Parameter { name, reason }` unless `holds`
pub fn parameter(holds: bool, name: &'static str, reason: &'static str) -> Result<()> {
    holds.then_some(()).ok_or_else(|| Error::param(name, reason))
}

/// `Length` unless `actual == expected`
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    (actual == expected).then_some(()).ok_or(Error::Length {
        context,
        expected,
        actual,
    })
}

/// `Authentication` unless the check `passed`
pub fn authentication(passed: bool, algorithm: &'static str) -> Result<()> {
    passed
        .then_some(())
        .ok_or(Error::Authentication { algorithm })
}
