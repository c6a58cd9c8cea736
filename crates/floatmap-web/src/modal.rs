//! Login modal from `index.html`: show/hide plus form wiring.

use std::cell::RefCell;
use std::rc::Rc;

use floatmap_core::session::{AuthMode, Credentials, Session};
use web_sys as web;

use crate::constants::*;
use crate::dom;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOGIN_MODAL_ID) {
        dom::set_visible(&el, true);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOGIN_MODAL_ID) {
        dom::set_visible(&el, false);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(LOGIN_MODAL_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(true)
}

/// Bring the modal DOM in line with the session.
pub fn sync(document: &web::Document, session: &Session) {
    if !session.is_modal_open() {
        hide(document);
        return;
    }
    let mode = session.auth_mode();
    if let Some(el) = document.get_element_by_id(LOGIN_TITLE_ID) {
        el.set_text_content(Some(mode.title()));
    }
    if let Some(el) = document.get_element_by_id(LOGIN_SUBMIT_ID) {
        el.set_text_content(Some(mode.title()));
    }
    if let Some(el) = document.get_element_by_id(LOGIN_CONFIRM_GROUP_ID) {
        dom::set_visible(&el, mode == AuthMode::SignUp);
    }
    // the hidden confirm field must not block a plain login submit
    if let Ok(confirm) = dom::by_id::<web::HtmlInputElement>(document, LOGIN_CONFIRM_ID) {
        confirm.set_required(mode == AuthMode::SignUp);
    }
    let (text, switch) = match mode {
        AuthMode::Login => ("Don't have an account? ", AuthMode::SignUp.title()),
        AuthMode::SignUp => ("Already have an account? ", AuthMode::Login.title()),
    };
    if let Some(el) = document.get_element_by_id(LOGIN_SWITCH_TEXT_ID) {
        el.set_text_content(Some(text));
    }
    if let Some(el) = document.get_element_by_id(LOGIN_SWITCH_ID) {
        el.set_text_content(Some(switch));
    }
    if is_hidden(document) {
        show(document);
    }
}

fn read_credentials(document: &web::Document, mode: AuthMode) -> Credentials {
    let value = |id: &str| {
        dom::by_id::<web::HtmlInputElement>(document, id)
            .map(|i| i.value())
            .unwrap_or_default()
    };
    Credentials {
        email: value(LOGIN_EMAIL_ID),
        password: value(LOGIN_PASSWORD_ID),
        confirm_password: (mode == AuthMode::SignUp).then(|| value(LOGIN_CONFIRM_ID)),
    }
}

fn reset_form(document: &web::Document) {
    if let Ok(form) = dom::by_id::<web::HtmlFormElement>(document, LOGIN_FORM_ID) {
        form.reset();
    }
}

/// Wire close/overlay/switch/submit. `on_change` runs after the login flag
/// may have changed so the nav bar can re-render.
pub fn wire_login_modal(
    document: &web::Document,
    session: Rc<RefCell<Session>>,
    on_change: Rc<dyn Fn()>,
) {
    for id in [LOGIN_MODAL_ID, LOGIN_CLOSE_ID] {
        let session = session.clone();
        let doc = document.clone();
        dom::add_click_listener(document, id, move |_ev| {
            session.borrow_mut().close_login();
            sync(&doc, &session.borrow());
        });
    }

    dom::add_click_listener(document, LOGIN_CONTENT_ID, |ev| ev.stop_propagation());

    {
        let session = session.clone();
        let doc = document.clone();
        dom::add_click_listener(document, LOGIN_SWITCH_ID, move |ev| {
            ev.prevent_default();
            session.borrow_mut().toggle_auth_mode();
            sync(&doc, &session.borrow());
        });
    }

    match dom::by_id::<web::HtmlFormElement>(document, LOGIN_FORM_ID) {
        Ok(form) => {
            let doc = document.clone();
            let submit = dom::listen(&form, "submit", move |ev: web::Event| {
                ev.prevent_default();
                let mode = session.borrow().auth_mode();
                let creds = read_credentials(&doc, mode);
                let ok = session.borrow_mut().submit_login(&creds);
                if ok {
                    log::info!("[login] signed in");
                    reset_form(&doc);
                    sync(&doc, &session.borrow());
                    on_change();
                }
            });
            submit.forget();
        }
        Err(e) => log::warn!("[login] {:?}", e),
    }
}
