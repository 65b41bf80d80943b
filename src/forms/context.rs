use crate::config::Config;

/// Identity details available when a wizard opens, used to pre-seed form
/// defaults. Everything is optional; an empty context seeds nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub reporter: Option<String>,
    pub team: Option<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reporter(mut self, reporter: impl Into<String>) -> Self {
        self.reporter = Some(reporter.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            reporter: config.default_reporter.clone(),
            team: config.team.clone(),
        }
    }
}
