//! In-memory transport and view for controller tests

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use crate::shared::api_utils::RequestSpec;
use crate::shared::http_client::{HttpResponse, Transport};

use super::error::ListError;
use super::pager::PagerModel;
use super::table::TableModel;
use super::view::ListView;

/// Replies queued responses in order and records every request
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ListError>>>,
    requests: RefCell<Vec<RequestSpec>>,
}

impl FakeTransport {
    pub fn push(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push(status, body.to_string());
    }

    pub fn push_err(&self, err: ListError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: RequestSpec) -> Result<HttpResponse, ListError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ListError::Transport("no response queued".into())))
    }
}

#[derive(Default)]
pub struct FakeView {
    tables: RefCell<Vec<TableModel>>,
    pagers: RefCell<Vec<Option<PagerModel>>>,
    shown: RefCell<Vec<String>>,
    hidden: RefCell<Vec<String>>,
    inputs: RefCell<HashMap<String, String>>,
    rows: RefCell<Vec<(String, bool)>>,
    header: Cell<Option<bool>>,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
    confirm_answer: Cell<bool>,
    redirects: RefCell<Vec<String>>,
    files: RefCell<Vec<(String, Vec<u8>)>>,
}

impl FakeView {
    pub fn set_input(&self, selector: &str, value: &str) {
        self.inputs
            .borrow_mut()
            .insert(selector.to_string(), value.to_string());
    }

    pub fn input(&self, selector: &str) -> Option<String> {
        self.inputs.borrow().get(selector).cloned()
    }

    pub fn set_rows(&self, rows: &[(&str, bool)]) {
        *self.rows.borrow_mut() = rows
            .iter()
            .map(|(id, checked)| (id.to_string(), *checked))
            .collect();
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn last_table(&self) -> Option<TableModel> {
        self.tables.borrow().last().cloned()
    }

    pub fn pagers(&self) -> Vec<Option<PagerModel>> {
        self.pagers.borrow().clone()
    }

    pub fn last_pager(&self) -> Option<PagerModel> {
        self.pagers.borrow().last().cloned().flatten()
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }

    pub fn hidden(&self) -> Vec<String> {
        self.hidden.borrow().clone()
    }

    pub fn header_check(&self) -> Option<bool> {
        self.header.get()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    pub fn saved_files(&self) -> Vec<(String, Vec<u8>)> {
        self.files.borrow().clone()
    }
}

impl ListView for FakeView {
    fn render_rows(&self, table: TableModel) {
        *self.rows.borrow_mut() = table
            .rows()
            .iter()
            .map(|row| (row.id.clone(), false))
            .collect();
        self.tables.borrow_mut().push(table);
    }

    fn render_pager(&self, pager: Option<PagerModel>) {
        self.pagers.borrow_mut().push(pager);
    }

    fn show_modal(&self, selector: &str) {
        self.shown.borrow_mut().push(selector.to_string());
    }

    fn hide_modal(&self, selector: &str) {
        self.hidden.borrow_mut().push(selector.to_string());
    }

    fn input_value(&self, selector: &str) -> Option<String> {
        self.input(selector)
    }

    fn set_input_value(&self, selector: &str, value: &str) {
        self.set_input(selector, value);
    }

    fn checked_row_values(&self) -> Vec<String> {
        self.rows
            .borrow()
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn row_check_states(&self) -> Vec<bool> {
        self.rows.borrow().iter().map(|(_, checked)| *checked).collect()
    }

    fn set_row_checks(&self, checked: bool) {
        for row in self.rows.borrow_mut().iter_mut() {
            row.1 = checked;
        }
    }

    fn set_header_check(&self, checked: bool) {
        self.header.set(Some(checked));
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_string());
    }

    fn save_file(&self, bytes: &[u8], filename: &str) -> Result<(), ListError> {
        self.files
            .borrow_mut()
            .push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }
}
