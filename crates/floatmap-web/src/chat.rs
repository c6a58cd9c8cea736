use std::cell::RefCell;
use std::rc::Rc;

use floatmap_core::chat::{ChartIds, ChartRequest, Chat, ChatMode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// "FloatChat AI" panel: header, transcript and input form.
pub struct ChatPanel {
    pub root: web::HtmlElement,
    _submit: Closure<dyn FnMut(web::Event)>,
}

impl ChatPanel {
    /// `on_chart` receives dashboard-mode chart requests.
    pub fn mount(
        document: &web::Document,
        mode: ChatMode,
        ids: Rc<RefCell<ChartIds>>,
        on_chart: impl Fn(ChartRequest) + 'static,
    ) -> anyhow::Result<Self> {
        let root = dom::create(document, "div", "chatbot")?;
        let header = dom::create(document, "div", "chatbot-header")?;
        header.set_text_content(Some("FloatChat AI"));
        let list = dom::create(document, "div", "messages-list")?;

        let form = dom::create(document, "form", "message-form")?;
        let input: web::HtmlInputElement = document
            .create_element("input")
            .map_err(|e| anyhow::anyhow!("create <input>: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        input.set_type("text");
        input.set_placeholder(mode.placeholder());
        let button = dom::create(document, "button", "")?;
        let _ = button.set_attribute("type", "submit");
        button.set_text_content(Some(mode.submit_label()));

        dom::append(&form, &input)?;
        dom::append(&form, &button)?;
        dom::append(&root, &header)?;
        dom::append(&root, &list)?;
        dom::append(&root, &form)?;

        let chat = Rc::new(RefCell::new(Chat::new(mode)));
        render_messages(document, &list, &chat.borrow());

        let doc = document.clone();
        let submit = dom::listen(&form, "submit", move |ev: web::Event| {
            ev.prevent_default();
            let text = input.value();
            let request = chat
                .borrow_mut()
                .submit(&text, || ids.borrow_mut().next_id(dom::now_ms()));
            render_messages(&doc, &list, &chat.borrow());
            input.set_value("");
            if let Some(req) = request {
                on_chart(req);
            }
        });

        Ok(Self {
            root,
            _submit: submit,
        })
    }
}

fn render_messages(document: &web::Document, list: &web::HtmlElement, chat: &Chat) {
    list.set_inner_html("");
    for msg in chat.messages() {
        let class = format!("message {}", msg.sender.css_class());
        if let Ok(el) = dom::create(document, "div", &class) {
            el.set_text_content(Some(&msg.text));
            let _ = dom::append(list, &el);
        }
    }
    list.set_scroll_top(list.scroll_height());
}
