use crate::outcome::FixResult;

/// Working snapshot handed to each check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artifact {
    pub data: Vec<u8>,
    pub path: String,
    pub langs: Vec<String>,
}

impl Artifact {
    pub fn new(data: impl Into<Vec<u8>>, path: impl Into<String>, langs: Vec<String>) -> Self {
        Self {
            data: data.into(),
            path: path.into(),
            langs,
        }
    }

    /// Fold a fix into the snapshot. Absent fields keep their current value.
    pub fn apply_fix(&mut self, fix: &FixResult) {
        if let Some(data) = &fix.data {
            self.data.clone_from(data);
        }
        if let Some(path) = &fix.path {
            self.path.clone_from(path);
        }
    }
}
