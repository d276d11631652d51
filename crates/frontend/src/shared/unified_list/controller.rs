//! List controller: search, paging, create / update / delete, detail and export
//!
//! Handlers are `async` and meant to be spawned on the UI thread. Each one
//! finishes with at most one alert; a 401 from any call logs the user out.

use std::cell::Cell;

use contracts::shared::unified_list::{
    value_text, ItemPayload, MutationResult, PageResult, Record, PAGE_SIZE,
};
use serde_json::Value;

use crate::shared::api_utils::{CsrfHeader, HttpMethod, RequestBuilder, RequestSpec};
use crate::shared::date_utils::format_reg_date;
use crate::shared::export::export_file_name;
use crate::shared::http_client::{HttpResponse, Transport};
use crate::system::auth::storage::SessionStore;

use super::config::{ListConfig, ListMessages};
use super::error::ListError;
use super::pager::PagerModel;
use super::selection::{header_checked, parse_ids};
use super::table::TableModel;
use super::view::ListView;

pub const LOGIN_PATH: &str = "/login";

pub struct ListController<T, V, S> {
    config: ListConfig,
    requests: RequestBuilder<S>,
    transport: T,
    view: V,
    // page of the last rendered result
    current_page: Cell<u32>,
}

impl<T, V, S> ListController<T, V, S>
where
    T: Transport,
    V: ListView,
    S: SessionStore,
{
    pub fn new(
        config: ListConfig,
        csrf: Option<CsrfHeader>,
        session: S,
        transport: T,
        view: V,
    ) -> Self {
        Self {
            config,
            requests: RequestBuilder::new(csrf, session),
            transport,
            view,
            current_page: Cell::new(0),
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn current_page(&self) -> u32 {
        self.current_page.get()
    }

    fn messages(&self) -> &ListMessages {
        &self.config.messages
    }

    fn search_term(&self) -> String {
        self.view
            .input_value(&self.config.search_input_selector)
            .unwrap_or_default()
    }

    async fn send(&self, request: RequestSpec) -> Result<HttpResponse, ListError> {
        self.transport.send(request).await?.into_success()
    }

    /// Session is over: tell the user, drop stored data, go to the login page
    fn expire_session(&self) {
        log::warn!("{}: session expired, redirecting to {}", self.config.mode, LOGIN_PATH);
        self.view.alert(&self.messages().session_expired);
        self.requests.session().clear();
        self.view.redirect(LOGIN_PATH);
    }

    fn fail(&self, action: &str, err: ListError, message: &str) {
        match err {
            ListError::Unauthorized => self.expire_session(),
            err => {
                log::error!("{} {}: {}", self.config.mode, action, err);
                self.view.alert(message);
            }
        }
    }

    // ------------------------------------------------------------------
    // list
    // ------------------------------------------------------------------

    /// Fetch `page` with the current search term and render it
    pub async fn load_list(&self, page: u32) {
        if let Err(e) = self.try_load_list(page).await {
            let message = self.messages().query_error.clone();
            self.fail("load", e, &message);
        }
    }

    async fn try_load_list(&self, page: u32) -> Result<(), ListError> {
        let url = self.config.list_url(page, PAGE_SIZE, &self.search_term());
        log::debug!("{}: loading page {}", self.config.mode, page);

        let request = self.requests.build(HttpMethod::Get, url);
        let result: PageResult = self.send(request).await?.json()?;
        self.render_page(result);
        Ok(())
    }

    fn render_page(&self, result: PageResult) {
        let table = TableModel::build(&result.content, &self.config.columns, &self.messages().no_data);
        self.view.render_rows(table);
        self.view.set_header_check(false);
        self.view
            .render_pager(PagerModel::build(result.page, result.total_pages));
        self.current_page.set(result.page);
    }

    /// New search always starts from the first page
    pub async fn search(&self) {
        self.current_page.set(0);
        self.load_list(0).await;
    }

    pub async fn reload(&self) {
        self.load_list(self.current_page.get()).await;
    }

    // ------------------------------------------------------------------
    // create
    // ------------------------------------------------------------------

    pub fn open_create(&self) {
        self.view.show_modal(&self.config.modal_id);
    }

    pub async fn create(&self) {
        match self.try_create().await {
            Ok(result) => {
                if let Some(id) = &result.id {
                    log::debug!("{}: created {}", self.config.mode, id);
                }
                let messages = self.messages();
                self.view
                    .alert(if result.has_status(MutationResult::STATUS_CREATED) {
                        &messages.create_success
                    } else {
                        &messages.create_failure
                    });
                self.view.hide_modal(&self.config.modal_id);
                self.load_list(0).await;
            }
            Err(e) => {
                let message = ListMessages::with_detail(&self.messages().create_failure, e.detail());
                self.fail("create", e, &message);
            }
        }
    }

    async fn try_create(&self) -> Result<MutationResult, ListError> {
        let fields = &self.config.create_fields;
        let payload = ItemPayload {
            title: self.view.input_value(&fields.title).unwrap_or_default(),
            owner: self.view.input_value(&fields.owner).unwrap_or_default(),
        };
        let request = self
            .requests
            .build_json(HttpMethod::Post, self.config.api_url(), &payload)?;
        mutation_result(self.send(request).await?)
    }

    // ------------------------------------------------------------------
    // detail / update
    // ------------------------------------------------------------------

    /// Fetch one record and show it in the detail modal
    pub async fn open_detail(&self, id: &str) {
        match self.try_fetch_detail(id).await {
            Ok(record) => {
                self.fill_detail(id, &record);
                self.view.show_modal(&self.config.detail_modal_id);
            }
            Err(ListError::NotFound) => {
                log::debug!("{}: record {} not found", self.config.mode, id);
                self.view.alert(&self.messages().not_found);
            }
            Err(e) => {
                let message = self.messages().query_error.clone();
                self.fail("detail", e, &message);
            }
        }
    }

    async fn try_fetch_detail(&self, id: &str) -> Result<Record, ListError> {
        let request = self
            .requests
            .build(HttpMethod::Get, self.config.item_url(id));
        let response = self.transport.send(request).await?;
        if response.status == 404 || (response.ok() && response.body.is_empty()) {
            return Err(ListError::NotFound);
        }
        match response.into_success()?.json::<Value>()? {
            Value::Object(record) => Ok(record),
            Value::Null => Err(ListError::NotFound),
            other => Err(ListError::Decode(format!("expected an object, got {}", other))),
        }
    }

    fn fill_detail(&self, requested_id: &str, record: &Record) {
        let fields = &self.config.detail_fields;
        let id = match value_text(record.get("id")) {
            id if id.is_empty() => requested_id.to_string(),
            id => id,
        };
        self.view.set_input_value(&fields.id, &id);
        self.view
            .set_input_value(&fields.title, &value_text(record.get("title")));
        self.view
            .set_input_value(&fields.owner, &value_text(record.get("owner")));
        self.view.set_input_value(
            &fields.reg_date,
            &format_reg_date(&value_text(record.get("regDate"))),
        );
    }

    pub async fn update(&self) {
        match self.try_update().await {
            Ok(result) => {
                let messages = self.messages();
                self.view
                    .alert(if result.has_status(MutationResult::STATUS_UPDATED) {
                        &messages.update_success
                    } else {
                        &messages.update_failure
                    });
                self.view.hide_modal(&self.config.detail_modal_id);
                self.reload().await;
            }
            Err(e) => {
                let message = ListMessages::with_detail(&self.messages().update_failure, e.detail());
                self.fail("update", e, &message);
            }
        }
    }

    async fn try_update(&self) -> Result<MutationResult, ListError> {
        let fields = &self.config.detail_fields;
        let id = self.view.input_value(&fields.id).unwrap_or_default();
        let id = id.trim();
        if id.is_empty() {
            return Err(ListError::NothingSelected);
        }
        let payload = ItemPayload {
            title: self.view.input_value(&fields.title).unwrap_or_default(),
            owner: self.view.input_value(&fields.owner).unwrap_or_default(),
        };
        let request = self
            .requests
            .build_json(HttpMethod::Put, self.config.item_url(id), &payload)?;
        mutation_result(self.send(request).await?)
    }

    // ------------------------------------------------------------------
    // delete
    // ------------------------------------------------------------------

    fn selected_ids(&self) -> Result<Vec<i64>, ListError> {
        let ids = parse_ids(&self.view.checked_row_values());
        if ids.is_empty() {
            return Err(ListError::NothingSelected);
        }
        Ok(ids)
    }

    /// Delete the checked rows after user confirmation
    pub async fn delete_selected(&self) {
        let ids = match self.selected_ids() {
            Ok(ids) => ids,
            Err(_) => {
                self.view.alert(&self.messages().select_to_delete);
                return;
            }
        };
        if !self.view.confirm(&self.messages().delete_confirm(ids.len())) {
            return;
        }

        match self.try_delete(&ids).await {
            Ok(result) => {
                log::debug!(
                    "{}: deleted {} row(s)",
                    self.config.mode,
                    result.count.unwrap_or(ids.len() as u64)
                );
                let fallback = self.messages().delete_success.as_str();
                self.view.alert(result.message_text().unwrap_or(fallback));
                self.reload().await;
            }
            Err(e) => {
                let message = ListMessages::with_detail(&self.messages().delete_failure, e.detail());
                self.fail("delete", e, &message);
            }
        }
    }

    async fn try_delete(&self, ids: &[i64]) -> Result<MutationResult, ListError> {
        log::debug!("{}: deleting {:?}", self.config.mode, ids);
        let request = self
            .requests
            .build_json(HttpMethod::Delete, self.config.api_url(), ids)?;
        mutation_result(self.send(request).await?)
    }

    // ------------------------------------------------------------------
    // export
    // ------------------------------------------------------------------

    pub async fn export(&self) {
        if let Err(e) = self.try_export().await {
            let message = self.messages().export_error.clone();
            self.fail("export", e, &message);
        }
    }

    async fn try_export(&self) -> Result<(), ListError> {
        let url = self.config.export_url(&self.search_term());
        let request = self.requests.build(HttpMethod::Get, url);
        let response = self.send(request).await?;
        self.view
            .save_file(&response.body, &export_file_name(&self.config.mode))
    }

    // ------------------------------------------------------------------
    // selection / modals
    // ------------------------------------------------------------------

    pub fn toggle_all(&self, checked: bool) {
        self.view.set_row_checks(checked);
    }

    pub fn sync_header_check(&self) {
        self.view
            .set_header_check(header_checked(&self.view.row_check_states()));
    }

    /// Hide the modal named by a close button's `data-close`
    pub fn dismiss(&self, target: Option<&str>) {
        let Some(target) = target.map(str::trim).filter(|t| !t.is_empty()) else {
            return;
        };
        if target.starts_with('#') {
            self.view.hide_modal(target);
        } else {
            self.view.hide_modal(&format!("#{}", target));
        }
    }
}

/// Empty 2xx bodies count as a reply without status
fn mutation_result(response: HttpResponse) -> Result<MutationResult, ListError> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(MutationResult::default());
    }
    response.json()
}
