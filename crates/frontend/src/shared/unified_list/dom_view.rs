//! Browser implementation of [`ListView`]

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::shared::export::{download_bytes, XLSX_MIME};

use super::config::{Features, ListConfig};
use super::error::ListError;
use super::pager::PagerModel;
use super::render::{pager_view, table_body_view};
use super::table::TableModel;
use super::view::ListView;

pub const ROW_CHECKBOX: &str = "input[type='checkbox']";

pub fn document() -> Result<Document, ListError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ListError::Dom("No document object".into()))
}

/// First element matching `selector`; invalid selectors count as missing
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    if selector.trim().is_empty() {
        return None;
    }
    document.query_selector(selector).ok().flatten()
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    query(document, selector)?.dyn_into::<HtmlElement>().ok()
}

pub struct DomListView {
    document: Document,
    table_body_selector: String,
    check_all_selector: String,
    rows: RwSignal<TableModel>,
    pager: RwSignal<Option<PagerModel>>,
}

impl DomListView {
    /// Mounts the table body and pager views into their anchors once.
    ///
    /// Later renders only update the signals.
    pub fn mount(config: &ListConfig, features: &Features) -> Result<Self, ListError> {
        let document = document()?;
        let rows = RwSignal::new(TableModel::default());
        let pager = RwSignal::new(None::<PagerModel>);

        if features.table {
            if let Some(tbody) = query_html(&document, &config.table_body_selector) {
                tbody.set_inner_html("");
                leptos::mount::mount_to(tbody, move || {
                    view! { <>{move || table_body_view(rows.get())}</> }
                })
                .forget();
            }
        }

        if features.pagination {
            if let Some(container) = query_html(&document, &config.pagination_selector) {
                container.set_inner_html("");
                leptos::mount::mount_to(container, move || {
                    view! { <>{move || pager_view(pager.get())}</> }
                })
                .forget();
            }
        }

        Ok(Self {
            document,
            table_body_selector: config.table_body_selector.clone(),
            check_all_selector: config.check_all_selector.clone(),
            rows,
            pager,
        })
    }

    fn row_checkboxes(&self) -> Vec<HtmlInputElement> {
        let Some(tbody) = query(&self.document, &self.table_body_selector) else {
            return Vec::new();
        };
        let Ok(nodes) = tbody.query_selector_all(ROW_CHECKBOX) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .collect()
    }

    fn set_display(&self, selector: &str, display: &str) {
        match query_html(&self.document, selector) {
            Some(el) => {
                let _ = el.style().set_property("display", display);
            }
            None => log::debug!("modal {} not found", selector),
        }
    }
}

impl ListView for DomListView {
    fn render_rows(&self, table: TableModel) {
        self.rows.set(table);
    }

    fn render_pager(&self, pager: Option<PagerModel>) {
        self.pager.set(pager);
    }

    fn show_modal(&self, selector: &str) {
        self.set_display(selector, "block");
    }

    fn hide_modal(&self, selector: &str) {
        self.set_display(selector, "none");
    }

    fn input_value(&self, selector: &str) -> Option<String> {
        let el = query(&self.document, selector)?;
        match el.dyn_ref::<HtmlInputElement>() {
            Some(input) => Some(input.value()),
            None => el.text_content(),
        }
    }

    fn set_input_value(&self, selector: &str, value: &str) {
        let Some(el) = query(&self.document, selector) else {
            return;
        };
        match el.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.set_value(value),
            None => el.set_text_content(Some(value)),
        }
    }

    fn checked_row_values(&self) -> Vec<String> {
        self.row_checkboxes()
            .into_iter()
            .filter(|chk| chk.checked())
            .map(|chk| chk.value())
            .collect()
    }

    fn row_check_states(&self) -> Vec<bool> {
        self.row_checkboxes().iter().map(|chk| chk.checked()).collect()
    }

    fn set_row_checks(&self, checked: bool) {
        for chk in self.row_checkboxes() {
            chk.set_checked(checked);
        }
    }

    fn set_header_check(&self, checked: bool) {
        if let Some(header) = query(&self.document, &self.check_all_selector)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            header.set_checked(checked);
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::error!("redirect to {} failed: {:?}", path, e);
            }
        }
    }

    fn save_file(&self, bytes: &[u8], filename: &str) -> Result<(), ListError> {
        download_bytes(bytes, filename, XLSX_MIME)
    }
}
