//! Page configuration of a unified list
//!
//! The host page passes a plain JS object to `initUnifiedList`; field names are
//! camelCase there and snake_case here.

use serde::{Deserialize, Serialize};

use super::error::ListError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Record field shown in the column
    pub key: String,
    /// Render the cell as a link opening the detail modal
    #[serde(default)]
    pub is_detail_link: bool,
}

/// Selectors of the detail modal inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailFields {
    pub id: String,
    pub title: String,
    pub owner: String,
    pub reg_date: String,
}

/// Selectors of the create modal inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateFields {
    pub title: String,
    pub owner: String,
}

impl Default for CreateFields {
    fn default() -> Self {
        Self {
            title: "#titleInput".to_string(),
            owner: "#ownerInput".to_string(),
        }
    }
}

/// Тексты сообщений пользователю. Любое поле можно переопределить из конфигурации.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListMessages {
    pub session_expired: String,
    pub query_error: String,
    pub no_data: String,
    pub not_found: String,
    pub create_success: String,
    pub create_failure: String,
    pub update_success: String,
    pub update_failure: String,
    pub select_to_delete: String,
    /// `{count}` is replaced with the number of selected rows
    pub delete_confirm: String,
    pub delete_success: String,
    pub delete_failure: String,
    pub export_error: String,
}

impl Default for ListMessages {
    fn default() -> Self {
        Self {
            session_expired: "세션이 만료되었습니다. 다시 로그인해주세요.".to_string(),
            query_error: "데이터 조회 중 오류가 발생했습니다.".to_string(),
            no_data: "데이터가 없습니다.".to_string(),
            not_found: "데이터를 찾을 수 없습니다.".to_string(),
            create_success: "등록 완료".to_string(),
            create_failure: "등록 실패".to_string(),
            update_success: "수정 완료".to_string(),
            update_failure: "수정 실패".to_string(),
            select_to_delete: "삭제할 항목을 선택하세요.".to_string(),
            delete_confirm: "{count}건을 삭제하시겠습니까?".to_string(),
            delete_success: "삭제 완료".to_string(),
            delete_failure: "삭제 실패".to_string(),
            export_error: "엑셀 다운로드 중 오류가 발생했습니다.".to_string(),
        }
    }
}

impl ListMessages {
    pub fn delete_confirm(&self, count: usize) -> String {
        self.delete_confirm.replace("{count}", &count.to_string())
    }

    /// Failure text followed by what the server said, if anything
    pub fn with_detail(base: &str, detail: Option<&str>) -> String {
        match detail {
            Some(detail) => format!("{} ({})", base, detail),
            None => base.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConfig {
    /// Resource name, used for the export file name
    pub mode: String,
    /// Base resource URL, e.g. `/api/p01a04`
    pub api_url: String,
    pub table_body_selector: String,
    pub pagination_selector: String,
    pub search_input_selector: String,
    pub search_btn_selector: String,
    pub add_btn_selector: String,
    /// Create modal selector
    pub modal_id: String,
    pub save_btn_selector: String,
    pub close_btn_selector: String,
    pub check_all_selector: String,
    pub delete_selected_btn_selector: String,
    pub detail_modal_id: String,
    pub detail_fields: DetailFields,
    pub update_btn_selector: String,
    pub excel_btn_selector: String,
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub create_fields: CreateFields,
    #[serde(default)]
    pub messages: ListMessages,
}

impl ListConfig {
    pub fn validate(&self) -> Result<(), ListError> {
        let required = [
            ("mode", &self.mode),
            ("apiUrl", &self.api_url),
            ("tableBodySelector", &self.table_body_selector),
        ];
        if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ListError::Config(format!("`{}` must not be empty", name)));
        }
        if self.columns.is_empty() {
            return Err(ListError::Config("`columns` must not be empty".to_string()));
        }
        if self.columns.iter().any(|c| c.key.trim().is_empty()) {
            return Err(ListError::Config("column key must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn list_url(&self, page: u32, size: u32, search: &str) -> String {
        format!(
            "{}?page={}&size={}&search={}",
            self.api_url(),
            page,
            size,
            urlencoding::encode(search)
        )
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.api_url(), urlencoding::encode(id))
    }

    pub fn export_url(&self, search: &str) -> String {
        format!("{}/excel?search={}", self.api_url(), urlencoding::encode(search))
    }
}

/// Which parts of the widget have their DOM anchors on the page.
///
/// Computed once at start; a missing element turns its feature off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    pub table: bool,
    pub pagination: bool,
    pub search: bool,
    pub create: bool,
    pub save: bool,
    pub check_all: bool,
    pub delete: bool,
    pub detail: bool,
    pub update: bool,
    pub export: bool,
    pub close_buttons: bool,
}

impl Features {
    /// `exists` answers whether a selector matches an element on the page
    pub fn detect(config: &ListConfig, exists: impl Fn(&str) -> bool) -> Self {
        let has = |selector: &str| !selector.trim().is_empty() && exists(selector);
        Self {
            table: has(&config.table_body_selector),
            pagination: has(&config.pagination_selector),
            search: has(&config.search_btn_selector),
            create: has(&config.add_btn_selector) && has(&config.modal_id),
            save: has(&config.save_btn_selector),
            check_all: has(&config.check_all_selector),
            delete: has(&config.delete_selected_btn_selector),
            detail: has(&config.detail_modal_id),
            update: has(&config.update_btn_selector),
            export: has(&config.excel_btn_selector),
            close_buttons: has(&config.close_btn_selector),
        }
    }

    /// Detail links in rows open a record only when the detail modal exists
    pub fn detail_links(&self) -> bool {
        self.table && self.detail
    }
}
