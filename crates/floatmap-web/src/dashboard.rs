use std::cell::RefCell;
use std::rc::Rc;

use floatmap_core::chat::{ChartIds, ChatMode};
use floatmap_core::dashboard::{Dashboard, EMPTY_GALLERY_TEXT};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::chat::ChatPanel;
use crate::dom;

const CARD_CLASS: &str = "chart-container";
const CHART_ID_ATTR: &str = "data-chart-id";

#[derive(Clone)]
struct ChartModal {
    overlay: web::HtmlElement,
    title: web::HtmlElement,
}

impl ChartModal {
    fn build(document: &web::Document) -> anyhow::Result<(Self, web::HtmlElement, web::HtmlElement)> {
        let overlay = dom::create(document, "div", "chart-modal-overlay")?;
        let content = dom::create(document, "div", "chart-modal-content")?;
        let close = dom::create(document, "button", "chart-modal-close-btn")?;
        close.set_inner_html("&times;");
        let title = dom::create(document, "h2", "")?;
        let body = dom::create(document, "div", "chart-modal-placeholder")?;
        body.set_text_content(Some("Enlarged Chart View"));
        dom::append(&content, &close)?;
        dom::append(&content, &title)?;
        dom::append(&content, &body)?;
        dom::append(&overlay, &content)?;
        dom::set_visible(&overlay, false);
        Ok((Self { overlay, title }, content, close))
    }

    fn render(&self, dashboard: &Dashboard) {
        match dashboard.selected() {
            Some(card) => {
                self.title.set_text_content(Some(&card.title));
                dom::set_visible(&self.overlay, true);
            }
            None => dom::set_visible(&self.overlay, false),
        }
    }
}

/// Dashboard view: chart-request chat on the left, gallery on the right,
/// enlarged-chart modal on top.
pub struct MountedDashboard {
    root: web::HtmlElement,
    _chat: ChatPanel,
    _clicks: Vec<Closure<dyn FnMut(web::MouseEvent)>>,
}

impl MountedDashboard {
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        ids: Rc<RefCell<ChartIds>>,
    ) -> anyhow::Result<Self> {
        let state = Rc::new(RefCell::new(Dashboard::default()));

        let root = dom::create(document, "div", "dashboard-view")?;
        let side = dom::create(document, "div", "dashboard-chatbot")?;
        let area = dom::create(document, "div", "charts-area")?;
        let (modal, modal_content, modal_close) = ChartModal::build(document)?;

        let chat = {
            let state = state.clone();
            let area = area.clone();
            let doc = document.clone();
            ChatPanel::mount(document, ChatMode::Dashboard, ids, move |req| {
                state.borrow_mut().add_chart(req);
                render_gallery(&doc, &area, &state.borrow());
            })?
        };

        dom::append(&side, &chat.root)?;
        dom::append(&root, &modal.overlay)?;
        dom::append(&root, &side)?;
        dom::append(&root, &area)?;
        dom::append(parent, &root)?;
        render_gallery(document, &area, &state.borrow());

        let mut clicks = Vec::new();

        // one delegated listener for every card
        {
            let state = state.clone();
            let modal = modal.clone();
            clicks.push(dom::listen(&area, "click", move |ev: web::MouseEvent| {
                let Some(id) = clicked_chart_id(&ev) else {
                    return;
                };
                if state.borrow_mut().select(id) {
                    modal.render(&state.borrow());
                }
            }));
        }
        for target in [&modal.overlay, &modal_close] {
            let state = state.clone();
            let modal = modal.clone();
            clicks.push(dom::listen(target, "click", move |_ev: web::MouseEvent| {
                state.borrow_mut().close_modal();
                modal.render(&state.borrow());
            }));
        }
        // clicks inside the content must not reach the overlay
        clicks.push(dom::listen(&modal_content, "click", |ev: web::MouseEvent| {
            ev.stop_propagation();
        }));

        Ok(Self {
            root,
            _chat: chat,
            _clicks: clicks,
        })
    }
}

impl Drop for MountedDashboard {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn clicked_chart_id(ev: &web::MouseEvent) -> Option<u64> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let card = target.closest(&format!(".{}", CARD_CLASS)).ok()??;
    card.get_attribute(CHART_ID_ATTR)?.parse().ok()
}

fn render_gallery(document: &web::Document, area: &web::HtmlElement, dashboard: &Dashboard) {
    area.set_inner_html("");
    if dashboard.is_empty() {
        if let Ok(empty) = dom::create(document, "div", "chart-placeholder chart-gallery-empty") {
            empty.set_text_content(Some(EMPTY_GALLERY_TEXT));
            let _ = dom::append(area, &empty);
        }
        return;
    }
    for chart in dashboard.charts() {
        let card = match build_card(document, chart.id, &chart.title) {
            Ok(card) => card,
            Err(e) => {
                log::warn!("[dashboard] card {}: {:?}", chart.id, e);
                continue;
            }
        };
        let _ = dom::append(area, &card);
    }
}

fn build_card(document: &web::Document, id: u64, title: &str) -> anyhow::Result<web::HtmlElement> {
    let card = dom::create(document, "div", CARD_CLASS)?;
    let _ = card.set_attribute(CHART_ID_ATTR, &id.to_string());
    let heading = dom::create(document, "h3", "")?;
    heading.set_text_content(Some(title));
    let body = dom::create(document, "div", "chart-placeholder")?;
    body.set_text_content(Some("Chart Data Would Be Displayed Here"));
    dom::append(&card, &heading)?;
    dom::append(&card, &body)?;
    Ok(card)
}
