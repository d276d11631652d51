//! Event wiring of a mounted list.
//!
//! One listener per anchor, registered once at start. Rows and pager buttons
//! are re-rendered freely; their clicks reach the controller through the
//! table body / pagination container (`data-id`, `data-page`), so renders never
//! stack listeners.

use std::future::Future;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement};

use super::config::Features;
use super::dom_view::{query, ROW_CHECKBOX};
use super::render::DETAIL_LINK_CLASS;
use super::widget::DomListController;

type Ctrl = Rc<DomListController>;

/// Runs an async handler on the UI thread
fn spawn<F, Fut>(ctrl: &Ctrl, f: F)
where
    F: FnOnce(Ctrl) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(f(ctrl.clone()));
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Closest ancestor (or self) of the event target matching `selector`
fn closest(event: &Event, selector: &str) -> Option<Element> {
    event_element(event)?.closest(selector).ok().flatten()
}

fn on_click(document: &Document, selector: &str, ctrl: &Ctrl, handler: impl Fn(&Ctrl) + 'static) {
    let Some(el) = query(document, selector) else {
        log::debug!("{} not found, click handler skipped", selector);
        return;
    };
    let ctrl = ctrl.clone();
    listen(&el, "click", move |_| handler(&ctrl));
}

fn bind_detail_links(tbody: &Element, ctrl: &Ctrl) {
    let c = ctrl.clone();
    let link_selector = format!("a.{}", DETAIL_LINK_CLASS);
    listen(tbody, "click", move |event| {
        let Some(link) = closest(&event, &link_selector) else {
            return;
        };
        event.prevent_default();
        if let Some(id) = link.get_attribute("data-id") {
            spawn(&c, |c| async move { c.open_detail(&id).await });
        }
    });
}

pub fn bind(ctrl: &Ctrl, features: Features, document: &Document) {
    let config = ctrl.config().clone();
    log::debug!("{}: binding {:?}", config.mode, features);

    if features.table {
        if let Some(tbody) = query(document, &config.table_body_selector) {
            if features.detail_links() {
                bind_detail_links(&tbody, ctrl);
            }

            // row checkbox -> header checkbox
            let c = ctrl.clone();
            listen(&tbody, "change", move |event| {
                let is_row_check = event_element(&event)
                    .map(|el| el.matches(ROW_CHECKBOX).unwrap_or(false))
                    .unwrap_or(false);
                if is_row_check {
                    c.sync_header_check();
                }
            });
        }
    }

    if features.pagination {
        if let Some(container) = query(document, &config.pagination_selector) {
            let c = ctrl.clone();
            listen(&container, "click", move |event| {
                let page = closest(&event, "button[data-page]")
                    .filter(|btn| !btn.has_attribute("disabled"))
                    .and_then(|btn| btn.get_attribute("data-page"))
                    .and_then(|p| p.parse::<u32>().ok());
                if let Some(page) = page {
                    spawn(&c, |c| async move { c.load_list(page).await });
                }
            });
        }
    }

    if features.search {
        on_click(document, &config.search_btn_selector, ctrl, |c| {
            spawn(c, |c| async move { c.search().await })
        });
    }

    if features.create {
        on_click(document, &config.add_btn_selector, ctrl, |c| c.open_create());
    }

    if features.save {
        on_click(document, &config.save_btn_selector, ctrl, |c| {
            spawn(c, |c| async move { c.create().await })
        });
    }

    if features.update {
        on_click(document, &config.update_btn_selector, ctrl, |c| {
            spawn(c, |c| async move { c.update().await })
        });
    }

    if features.delete {
        on_click(document, &config.delete_selected_btn_selector, ctrl, |c| {
            spawn(c, |c| async move { c.delete_selected().await })
        });
    }

    if features.export {
        on_click(document, &config.excel_btn_selector, ctrl, |c| {
            spawn(c, |c| async move { c.export().await })
        });
    }

    if features.check_all {
        if let Some(header) = query(document, &config.check_all_selector) {
            let c = ctrl.clone();
            listen(&header, "change", move |event| {
                let checked = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.checked())
                    .unwrap_or(false);
                c.toggle_all(checked);
            });
        }
    }

    if features.close_buttons {
        // delegated on the document so close buttons inside re-rendered modals keep working
        let c = ctrl.clone();
        let selector = config.close_btn_selector.clone();
        listen(document, "click", move |event| {
            if let Some(btn) = closest(&event, &selector) {
                c.dismiss(btn.get_attribute("data-close").as_deref());
            }
        });
    }
}
