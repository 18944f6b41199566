//! Named routes and a stack-based navigator.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Schedule,
    Resources,
    Map,
}

impl Route {
    /// Entries offered on the home screen, in display order.
    pub const MENU: [Route; 3] = [Route::Schedule, Route::Resources, Route::Map];

    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Schedule => "schedule",
            Route::Resources => "resources",
            Route::Map => "map",
        }
    }

    /// Screen title.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "University Companion",
            Route::Schedule => "Course Schedule",
            Route::Resources => "Course Resources",
            Route::Map => "Campus Map",
        }
    }

    /// Label used for the home-screen menu entry.
    pub fn menu_label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Schedule => "Schedule",
            Route::Resources => "Resources",
            Route::Map => "Campus Map",
        }
    }
}

/// Back stack of routes.  Never empty; the bottom entry is always `Home`.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    pub fn current(&self) -> Route {
        *self.stack.last().unwrap_or(&Route::Home)
    }

    pub fn push(&mut self, route: Route) {
        debug!(from = self.current().name(), to = route.name(), "navigate");
        self.stack.push(route);
    }

    /// Pop one route.  Returns `false` when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        debug!(to = self.current().name(), "navigate back");
        true
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
