//! Group membership filtering
//!
//! Every dependency declares a list of group tags; an invocation requests a
//! set of groups and only dependencies with at least one tag in common are
//! selected. The `default` group is always part of the requested set.

use serde::Deserialize;
use tracing::warn;

/// The group every invocation implicitly requests
pub const DEFAULT_GROUP: &str = "default";

/// An ordered list of group tags
///
/// Duplicates are permitted but carry no meaning; membership is a set test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct GroupList(pub Vec<String>);

impl GroupList {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GroupList(tags.into_iter().map(Into::into).collect())
    }

    /// Build the user-requested set, with `default` always included and
    /// repeated tags dropped
    pub fn requested<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags = vec![DEFAULT_GROUP.to_string()];
        for tag in extra {
            let tag = tag.into();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        GroupList(tags)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// True iff `declared` and `requested` share at least one tag
///
/// A dependency with no declared groups can never be selected; that is
/// surfaced with a warning rather than a silent skip.
pub fn has_at_least_one_group(name: &str, declared: &GroupList, requested: &GroupList) -> bool {
    if declared.is_empty() {
        warn!(
            "'{}' is not attached to any groups and will never be installed",
            name
        );
        return false;
    }

    declared
        .iter()
        .any(|tag| requested.iter().any(|wanted| wanted == tag))
}
