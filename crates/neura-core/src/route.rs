//! Site routes and header navigation.

/// A page of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Services,
    Portfolio,
    About,
    Contact,
}

impl Route {
    /// Routes in header navigation order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Services,
        Route::Portfolio,
        Route::About,
        Route::Contact,
    ];

    /// URL path of the route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Services => "/services",
            Route::Portfolio => "/portfolio",
            Route::About => "/about",
            Route::Contact => "/contact",
        }
    }

    /// Navigation label shown in the header.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Services => "Services",
            Route::Portfolio => "Portfolio",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }

    /// Resolve a path. Only exact matches resolve.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Whether this route is the one at `current_path` (exact match).
    pub fn is_active(self, current_path: &str) -> bool {
        self.path() == current_path
    }

    /// Whether the page draws the animated network behind its content.
    pub fn hosts_background(self) -> bool {
        !matches!(self, Route::Contact)
    }

    /// Next route in navigation order, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous route in navigation order, wrapping around.
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
