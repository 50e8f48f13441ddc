use std::fmt;

/// Client-side routes of the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Register,
    Dashboard,
    Settings,
    Unknown(String),
}

impl Route {
    /// Parse a location such as `/dashboard`, `#/login` or `/settings?tab=1`.
    pub fn parse(location: &str) -> Self {
        let location = location.trim().trim_start_matches('#');
        let path = location.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Self::Root,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/dashboard" => Self::Dashboard,
            "/settings" | "/configuracion" => Self::Settings,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Settings => "/settings",
            Self::Unknown(path) => path,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
