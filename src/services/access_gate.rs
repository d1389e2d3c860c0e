// src/services/access_gate.rs
//
// Access Gate - decides whether the current session may enter a view
//
// RULES:
// - Re-evaluated on every navigation, never cached: login and logout can
//   change the session without a reload
// - Not-signed-in and wrong-role are only distinguishable by where the
//   redirect lands, never by an error message

use std::sync::{Arc, Mutex};

use crate::domain::Role;
use crate::services::session_service::SessionManager;

/// Navigable views and their role requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    /// Applicant dashboard (job listings)
    ApplicantHome,
    /// Public posting detail page
    JobDetails(i64),
    ApplyForm(i64),
    MyApplications,
    AdminHome,
    NewJob,
    AdminJobDetails(i64),
    EditJob(i64),
    AdminApplications,
}

impl Route {
    /// The role required to enter, or None for public views.
    pub fn required_role(self) -> Option<Role> {
        match self {
            Route::Login | Route::Register | Route::JobDetails(_) => None,
            Route::ApplicantHome | Route::ApplyForm(_) | Route::MyApplications => {
                Some(Role::Applicant)
            }
            Route::AdminHome
            | Route::NewJob
            | Route::AdminJobDetails(_)
            | Route::EditJob(_)
            | Route::AdminApplications => Some(Role::Admin),
        }
    }

    /// Where a role lands by default.
    pub fn home_for(role: Role) -> Route {
        match role {
            Role::Admin => Route::AdminHome,
            Role::Applicant => Route::ApplicantHome,
        }
    }
}

/// Gate decision for a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(Route),
}

pub struct AccessGate {
    sessions: Arc<SessionManager>,
    /// Destination remembered across a redirect to login. A newer protected
    /// navigation attempt overwrites an older one.
    pending: Mutex<Option<Route>>,
}

impl AccessGate {
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self {
            sessions,
            pending: Mutex::new(None),
        }
    }

    /// Decide entry for `route` against the session as it is right now.
    pub fn resolve(&self, route: Route) -> Access {
        let Some(required) = route.required_role() else {
            return Access::Granted;
        };

        let session = self.sessions.session();
        let Some(role) = session.role().filter(|_| session.is_authenticated()) else {
            *self.pending.lock().unwrap() = Some(route);
            return Access::Redirect(Route::Login);
        };

        if role != required {
            // Silent redirect to the caller's own home; no pending target,
            // no error text, nothing that confirms the view exists.
            return Access::Redirect(Route::home_for(role));
        }

        Access::Granted
    }

    /// The destination to resume after a successful login, consumed once.
    pub fn take_pending(&self) -> Option<Route> {
        self.pending.lock().unwrap().take()
    }

    /// Where to navigate right after login: the remembered destination if
    /// one exists, otherwise the role's home.
    pub fn post_login_destination(&self, role: Role) -> Route {
        self.take_pending().unwrap_or_else(|| Route::home_for(role))
    }
}
