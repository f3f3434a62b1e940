use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipsLog {
    pub starport_notices: Vec<String>,
}

impl ShipsLog {
    pub fn post_notice(&mut self, notice: impl Into<String>) {
        self.starport_notices.push(notice.into());
    }
}
