/// A reviewable change as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Changeset {
    /// Bare change number; the current patchset is looked up over REST.
    Change(String),
    /// `change:patchset`.
    Patchset { change: String, patchset: String },
}

impl Changeset {
    /// Split on the first `:`. Tokens are not validated; a malformed number
    /// surfaces later as a REST or git failure.
    pub fn parse(input: &str) -> Self {
        match input.split_once(':') {
            Some((change, patchset)) => {
                Changeset::Patchset { change: change.to_string(), patchset: patchset.to_string() }
            }
            None => Changeset::Change(input.to_string()),
        }
    }
}

/// Remote location and ref handed to `git fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchDescriptor {
    pub url: String,
    pub ref_name: String,
}

/// `refs/changes/<last two chars of change>/<change>/<patchset>`.
///
/// Changes shorter than two characters are used whole, not zero-padded.
pub fn change_ref(change: &str, patchset: &str) -> String {
    let shard_start = change.char_indices().rev().nth(1).map(|(idx, _)| idx).unwrap_or(0);
    format!("refs/changes/{}/{}/{}", &change[shard_start..], change, patchset)
}
