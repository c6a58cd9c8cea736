// Host-side tests for the chat panel, dashboard gallery and session flags.

use floatmap_core::chat::{Chat, ChartIds, ChatMode, Sender};
use floatmap_core::dashboard::Dashboard;
use floatmap_core::session::{AuthMode, Credentials, Session, View};

#[test]
fn chat_starts_with_mode_greeting() {
    let map = Chat::new(ChatMode::Map);
    assert_eq!(map.messages().len(), 1);
    assert_eq!(map.messages()[0].sender, Sender::Bot);
    assert_eq!(map.messages()[0].text, "Hello! Ask me about the floats.");

    let dash = Chat::new(ChatMode::Dashboard);
    assert_eq!(dash.messages()[0].text, "Ask me to generate a chart.");
}

#[test]
fn blank_input_is_ignored() {
    let mut chat = Chat::new(ChatMode::Dashboard);
    assert!(chat.submit("   ", || 1).is_none());
    assert!(chat.submit("", || 2).is_none());
    assert_eq!(chat.messages().len(), 1);
}

#[test]
fn map_chat_replies_without_backend() {
    let mut chat = Chat::new(ChatMode::Map);
    assert!(chat.submit("float 2902387", || 1).is_none());
    let m = chat.messages();
    assert_eq!(m.len(), 3);
    assert_eq!(m[1].sender, Sender::User);
    assert_eq!(m[1].text, "float 2902387");
    assert_eq!(
        m[2].text,
        "Searching for: \"float 2902387\"... (Backend not connected)"
    );
}

#[test]
fn dashboard_chat_emits_chart_request() {
    let mut chat = Chat::new(ChatMode::Dashboard);
    let req = chat.submit("salinity", || 42).expect("chart request");
    assert_eq!(req.id, 42);
    assert_eq!(req.title, "Analysis for \"salinity\"");
    assert_eq!(
        chat.messages().last().unwrap().text,
        "Generating chart for: \"salinity\"..."
    );
}

#[test]
fn mode_labels() {
    assert_eq!(ChatMode::Map.placeholder(), "Ask about a float...");
    assert_eq!(ChatMode::Map.submit_label(), "Send");
    assert_eq!(ChatMode::Dashboard.placeholder(), "Request a chart...");
    assert_eq!(ChatMode::Dashboard.submit_label(), "Generate");
}

#[test]
fn chart_ids_stay_unique_within_a_millisecond() {
    let mut ids = ChartIds::default();
    let a = ids.next_id(1_000);
    let b = ids.next_id(1_000);
    let c = ids.next_id(999);
    let d = ids.next_id(5_000);
    assert_eq!(a, 1_000);
    assert!(b > a && c > b);
    assert_eq!(d, 5_000);
}

#[test]
fn chart_ids_are_spent_only_on_emitted_requests() {
    let mut ids = ChartIds::default();
    let mut map = Chat::new(ChatMode::Map);
    let mut dash = Chat::new(ChatMode::Dashboard);

    assert!(map.submit("where is 2902387", || ids.next_id(10)).is_none());
    assert!(dash.submit("  ", || ids.next_id(10)).is_none());
    let req = dash.submit("salinity", || ids.next_id(10)).unwrap();
    assert_eq!(req.id, 10);
    assert_eq!(ids.next_id(10), 11);
}

#[test]
fn dashboard_collects_and_selects_charts() {
    let mut chat = Chat::new(ChatMode::Dashboard);
    let mut dash = Dashboard::default();
    assert!(dash.is_empty());

    dash.add_chart(chat.submit("temperature", || 1).unwrap());
    dash.add_chart(chat.submit("oxygen", || 2).unwrap());
    assert_eq!(dash.charts().len(), 2);
    assert_eq!(dash.charts()[1].title, "Analysis for \"oxygen\"");

    assert!(dash.select(2));
    assert_eq!(dash.selected().unwrap().title, "Analysis for \"oxygen\"");
    assert!(!dash.select(99));
    assert_eq!(dash.selected().unwrap().id, 2);

    dash.close_modal();
    assert!(dash.selected().is_none());
}

#[test]
fn session_switches_views() {
    let mut s = Session::default();
    assert_eq!(s.view(), View::Map);
    assert!(!s.switch_view(View::Map));
    assert!(s.switch_view(View::Dashboard));
    assert_eq!(s.view(), View::Dashboard);
}

#[test]
fn login_requires_fields_and_closes_modal() {
    let mut s = Session::default();
    s.open_login();
    assert!(s.is_modal_open());

    assert!(!s.submit_login(&Credentials::default()));
    assert!(!s.is_logged_in());
    assert!(s.is_modal_open());

    let creds = Credentials {
        email: "a@b.c".into(),
        password: "pw".into(),
        confirm_password: None,
    };
    assert!(s.submit_login(&creds));
    assert!(s.is_logged_in());
    assert!(!s.is_modal_open());

    s.logout();
    assert!(!s.is_logged_in());
}

#[test]
fn sign_up_needs_confirmation_field() {
    let mut s = Session::default();
    s.open_login();
    s.toggle_auth_mode();
    assert_eq!(s.auth_mode(), AuthMode::SignUp);
    assert_eq!(s.auth_mode().title(), "Sign Up");

    let mut creds = Credentials {
        email: "a@b.c".into(),
        password: "pw".into(),
        confirm_password: None,
    };
    assert!(!s.submit_login(&creds));
    creds.confirm_password = Some("pw".into());
    assert!(s.submit_login(&creds));
}

#[test]
fn reopening_login_resets_mode() {
    let mut s = Session::default();
    s.open_login();
    s.toggle_auth_mode();
    s.close_login();
    s.open_login();
    assert_eq!(s.auth_mode(), AuthMode::Login);
}
