//! App shell state: which view is showing and the local login flag.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Map,
    Dashboard,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::SignUp => "Sign Up",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }
}

/// Values of the login form at submit time.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub confirm_password: Option<String>,
}

#[derive(Debug, Default)]
pub struct Session {
    view: View,
    modal_open: bool,
    auth_mode: AuthMode,
    logged_in: bool,
}

impl Session {
    pub fn view(&self) -> View {
        self.view
    }

    /// Returns true when the view actually changed.
    pub fn switch_view(&mut self, view: View) -> bool {
        if self.view == view {
            return false;
        }
        log::info!("[session] view {:?} -> {:?}", self.view, view);
        self.view = view;
        true
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    pub fn open_login(&mut self) {
        self.modal_open = true;
        self.auth_mode = AuthMode::Login;
    }

    pub fn close_login(&mut self) {
        self.modal_open = false;
    }

    pub fn toggle_auth_mode(&mut self) {
        self.auth_mode = self.auth_mode.toggled();
    }

    /// Only presence of the required fields is checked.
    pub fn submit_login(&mut self, creds: &Credentials) -> bool {
        let mut required = vec![creds.email.as_str(), creds.password.as_str()];
        if self.auth_mode == AuthMode::SignUp {
            required.push(creds.confirm_password.as_deref().unwrap_or(""));
        }
        if required.iter().any(|f| f.is_empty()) {
            return false;
        }
        self.logged_in = true;
        self.modal_open = false;
        true
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
    }
}
