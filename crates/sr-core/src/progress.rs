use serde::{Deserialize, Serialize};

/// Progress event handed to the caller-supplied callback while seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedProgress {
    pub step: String,
    pub completed_steps: usize,
    pub total_steps: usize,
    pub detail: Option<String>,
}

impl SeedProgress {
    pub fn percent(&self) -> usize {
        if self.total_steps == 0 {
            return 100;
        }
        self.completed_steps * 100 / self.total_steps
    }
}
