#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Which backend persona a credential belongs to.
///
/// The role picks the endpoint variant for login and signup and is
/// persisted next to the token so it survives reloads. Admin is what
/// the write endpoints require; the client itself never enforces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Storage/display form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse the storage form back; unknown values mean no role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// The other role, for the user/admin toggle on the auth forms.
    pub fn toggled(self) -> Self {
        match self {
            Self::User => Self::Admin,
            Self::Admin => Self::User,
        }
    }

    pub fn login_path(self) -> &'static str {
        match self {
            Self::User => "/user-login",
            Self::Admin => "/admin-login",
        }
    }

    pub fn signup_path(self) -> &'static str {
        match self {
            Self::User => "/user-signup",
            Self::Admin => "/admin-signup",
        }
    }
}

/// An authenticated identity: the opaque bearer credential and its role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub role: Role,
}

/// Authentication context provided to every page.
///
/// Set once per login or signup, cleared at logout; there is no expiry
/// or refresh handling. `restored` flips after the localStorage restore
/// has run, so route guards do not redirect before it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub restored: bool,
}

impl SessionState {
    pub fn authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Install a fresh credential after a successful login or signup.
    pub fn sign_in(&mut self, access_token: String, role: Role) {
        self.session = Some(Session { access_token, role });
        self.restored = true;
    }

    /// Drop the credential at logout.
    pub fn sign_out(&mut self) {
        self.session = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }
}
