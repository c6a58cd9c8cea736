// Element ids and classes shared with `static/index.html`.

// Navigation
pub const NAV_MAP_ID: &str = "nav-map";
pub const NAV_DASHBOARD_ID: &str = "nav-dashboard";
pub const NAV_AUTH_ID: &str = "nav-auth";
pub const VIEW_ROOT_ID: &str = "view-root";

// Login modal
pub const LOGIN_MODAL_ID: &str = "login-modal";
pub const LOGIN_CONTENT_ID: &str = "login-content";
pub const LOGIN_CLOSE_ID: &str = "login-close";
pub const LOGIN_FORM_ID: &str = "login-form";
pub const LOGIN_TITLE_ID: &str = "login-title";
pub const LOGIN_EMAIL_ID: &str = "login-email";
pub const LOGIN_PASSWORD_ID: &str = "login-password";
pub const LOGIN_CONFIRM_GROUP_ID: &str = "login-confirm-group";
pub const LOGIN_CONFIRM_ID: &str = "login-confirm";
pub const LOGIN_SUBMIT_ID: &str = "login-submit";
pub const LOGIN_SWITCH_TEXT_ID: &str = "login-switch-text";
pub const LOGIN_SWITCH_ID: &str = "login-switch";

// Classes toggled from Rust
pub const ACTIVE_CLASS: &str = "active";
pub const RESIZING_CLASS: &str = "is-resizing";
