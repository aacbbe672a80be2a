/// Structured form of a `git describe --tags --long --dirty` string.
///
/// `base_tag` never keeps a leading `v`. When the describe output has fewer
/// than three dash-separated segments the whole first segment is kept as the
/// version, `parseable` is false and the dirty flag is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDescriptor {
    pub base_tag: String,
    pub commit_count: u32,
    pub dirty: bool,
    pub parseable: bool,
}

const DIRTY_SUFFIX: &str = "-dirty";

impl VersionDescriptor {
    /// Parse a describe string. Never fails: a non-numeric commit count is
    /// treated as zero and a short string falls back to single-segment mode.
    pub fn parse(describe: &str) -> Self {
        let dirty = describe.ends_with(DIRTY_SUFFIX);
        let clean = describe.strip_suffix(DIRTY_SUFFIX).unwrap_or(describe);
        let segments: Vec<&str> = clean.split('-').collect();

        if segments.len() < 3 {
            return Self {
                base_tag: strip_tag_prefix(segments[0]).to_string(),
                commit_count: 0,
                dirty: false,
                parseable: false,
            };
        }

        Self {
            base_tag: strip_tag_prefix(segments[0]).to_string(),
            commit_count: segments[1].parse().unwrap_or(0),
            dirty,
            parseable: true,
        }
    }

    /// Reduce the descriptor to an effective version string.
    ///
    /// A clean checkout exactly on a tag keeps the bare tag. Anything ahead
    /// of or modified relative to the tag gets a `-dev` marker, with the
    /// commit distance appended only when it is non-zero.
    pub fn version(&self) -> String {
        if !self.parseable {
            return self.base_tag.clone();
        }
        if self.commit_count == 0 && !self.dirty {
            return self.base_tag.clone();
        }
        if self.commit_count > 0 {
            format!("{}-dev-{}", self.base_tag, self.commit_count)
        } else {
            format!("{}-dev", self.base_tag)
        }
    }
}

fn strip_tag_prefix(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}
