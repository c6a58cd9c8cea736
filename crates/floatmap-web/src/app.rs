use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use floatmap_core::chat::ChartIds;
use floatmap_core::session::{Session, View};
use floatmap_core::Catalog;
use web_sys as web;

use crate::constants::*;
use crate::dashboard::MountedDashboard;
use crate::dom;
use crate::map_panel::MountedMap;
use crate::modal;

/// Top-level shell: nav bar, the one mounted view, login modal.
pub struct App {
    document: web::Document,
    view_root: web::Element,
    catalog: Rc<Catalog>,
    chart_ids: Rc<RefCell<ChartIds>>,
    session: Rc<RefCell<Session>>,
    // held only so Drop tears the view down
    _mounted: Option<Box<dyn Any>>,
}

impl App {
    pub fn new(document: web::Document, catalog: Catalog) -> anyhow::Result<Self> {
        let view_root = document
            .get_element_by_id(VIEW_ROOT_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", VIEW_ROOT_ID))?;
        Ok(Self {
            document,
            view_root,
            catalog: Rc::new(catalog),
            chart_ids: Rc::new(RefCell::new(ChartIds::default())),
            session: Rc::new(RefCell::new(Session::default())),
            _mounted: None,
        })
    }

    /// Replace whatever is mounted with the session's current view.
    fn mount_current(&mut self) -> anyhow::Result<()> {
        // old view must be gone before the new one grabs the root
        self._mounted = None;
        let view = self.session.borrow().view();
        let mounted: Box<dyn Any> = match view {
            View::Map => Box::new(MountedMap::mount(
                &self.document,
                &self.view_root,
                self.catalog.clone(),
                self.chart_ids.clone(),
            )?),
            View::Dashboard => Box::new(MountedDashboard::mount(
                &self.document,
                &self.view_root,
                self.chart_ids.clone(),
            )?),
        };
        self._mounted = Some(mounted);
        sync_nav(&self.document, &self.session.borrow());
        Ok(())
    }

    fn switch_to(&mut self, view: View) {
        if !self.session.borrow_mut().switch_view(view) {
            return;
        }
        if let Err(e) = self.mount_current() {
            log::error!("[app] mounting {:?} failed: {:?}", view, e);
        }
    }
}

pub fn sync_nav(document: &web::Document, session: &Session) {
    for (id, view) in [(NAV_MAP_ID, View::Map), (NAV_DASHBOARD_ID, View::Dashboard)] {
        if let Some(el) = document.get_element_by_id(id) {
            let list = el.class_list();
            let _ = if session.view() == view {
                list.add_1(ACTIVE_CLASS)
            } else {
                list.remove_1(ACTIVE_CLASS)
            };
        }
    }
    if let Some(el) = document.get_element_by_id(NAV_AUTH_ID) {
        let label = if session.is_logged_in() { "Logout" } else { "Login" };
        el.set_text_content(Some(label));
    }
}

/// Mount the initial view and hook up the nav bar and login modal.
/// The nav closures own the app from here on.
pub fn start(document: web::Document, catalog: Catalog) -> anyhow::Result<()> {
    let mut app = App::new(document.clone(), catalog)?;
    app.mount_current()?;
    let session = app.session.clone();
    let app = Rc::new(RefCell::new(app));

    for (id, view) in [(NAV_MAP_ID, View::Map), (NAV_DASHBOARD_ID, View::Dashboard)] {
        let app = app.clone();
        dom::add_click_listener(&document, id, move |_ev| {
            app.borrow_mut().switch_to(view);
        });
    }

    {
        let session = session.clone();
        let doc = document.clone();
        dom::add_click_listener(&document, NAV_AUTH_ID, move |_ev| {
            let logged_in = session.borrow().is_logged_in();
            if logged_in {
                session.borrow_mut().logout();
                log::info!("[login] signed out");
            } else {
                session.borrow_mut().open_login();
            }
            modal::sync(&doc, &session.borrow());
            sync_nav(&doc, &session.borrow());
        });
    }

    let doc = document.clone();
    let nav_session = session.clone();
    modal::wire_login_modal(
        &document,
        session,
        Rc::new(move || sync_nav(&doc, &nav_session.borrow())),
    );
    modal::hide(&document);
    Ok(())
}
