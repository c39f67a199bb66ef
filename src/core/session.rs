/// Environment variable consulted when `--user` is not given.
pub const USER_ENV: &str = "CARBONLOG_USER";

/// The signed-in user, as far as this application is concerned: an opaque
/// owner identifier used to scope every read and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_id: String,
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Session {
    pub fn new<S: Into<String>>(user_id: S) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Resolve the session from, in order: the command line, `CARBONLOG_USER`,
    /// the configured default user.
    pub fn resolve(cli_user: Option<&str>, config_user: Option<&str>) -> Option<Self> {
        Self::resolve_with_env(
            cli_user,
            std::env::var(USER_ENV).ok().as_deref(),
            config_user,
        )
    }

    pub fn resolve_with_env(
        cli_user: Option<&str>,
        env_user: Option<&str>,
        config_user: Option<&str>,
    ) -> Option<Self> {
        non_blank(cli_user.map(str::to_string))
            .or_else(|| non_blank(env_user.map(str::to_string)))
            .or_else(|| non_blank(config_user.map(str::to_string)))
            .map(Session::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_wins() {
        let s = Session::resolve_with_env(Some("cli"), Some("env"), Some("cfg")).unwrap();
        assert_eq!(s.user_id(), "cli");
    }

    #[test]
    fn falls_back_to_env_then_config() {
        let s = Session::resolve_with_env(None, Some("env"), Some("cfg")).unwrap();
        assert_eq!(s.user_id(), "env");

        let s = Session::resolve_with_env(Some("  "), None, Some(" cfg ")).unwrap();
        assert_eq!(s.user_id(), "cfg");
    }

    #[test]
    fn nothing_means_no_session() {
        assert!(Session::resolve_with_env(None, Some(""), None).is_none());
    }
}
