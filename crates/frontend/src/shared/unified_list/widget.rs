//! JS entry point: `initUnifiedList(config)`
//!
//! ```js
//! const list = initUnifiedList({
//!   mode: "p01a04",
//!   apiUrl: "/api/p01a04",
//!   tableBodySelector: "#dataTable tbody",
//!   // ...
//!   columns: [{ key: "title", isDetailLink: true }, { key: "owner" }],
//! });
//! list.reload();
//! ```

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::shared::api_utils::CsrfHeader;
use crate::shared::http_client::GlooTransport;
use crate::system::auth::storage::LocalStorageSession;

use super::bindings;
use super::config::{Features, ListConfig};
use super::controller::ListController;
use super::dom_view::{document, query, DomListView};
use super::error::ListError;

pub type DomListController = ListController<GlooTransport, DomListView, LocalStorageSession>;

/// Handle of one list instance on the page
#[wasm_bindgen]
pub struct UnifiedList {
    controller: Rc<DomListController>,
}

#[wasm_bindgen]
impl UnifiedList {
    /// Reload the page currently shown
    pub fn reload(&self) {
        let controller = self.controller.clone();
        wasm_bindgen_futures::spawn_local(async move { controller.reload().await });
    }

    #[wasm_bindgen(js_name = currentPage)]
    pub fn current_page(&self) -> u32 {
        self.controller.current_page()
    }
}

impl UnifiedList {
    pub fn init(config: ListConfig) -> Result<Self, ListError> {
        config.validate()?;

        let document = document()?;
        let features = Features::detect(&config, |selector| query(&document, selector).is_some());
        if !features.table {
            log::warn!(
                "{}: table body {} not found, rows will not be shown",
                config.mode,
                config.table_body_selector
            );
        }

        let view = DomListView::mount(&config, &features)?;
        let csrf = CsrfHeader::from_document();
        let controller = Rc::new(ListController::new(
            config,
            csrf,
            LocalStorageSession,
            GlooTransport,
            view,
        ));

        bindings::bind(&controller, features, &document);

        let initial = controller.clone();
        wasm_bindgen_futures::spawn_local(async move { initial.load_list(0).await });

        Ok(Self { controller })
    }
}

#[wasm_bindgen(js_name = initUnifiedList)]
pub fn init_unified_list(config: JsValue) -> Result<UnifiedList, JsValue> {
    let config: ListConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&ListError::Config(e.to_string()).to_string()))?;

    UnifiedList::init(config).map_err(|e| {
        log::error!("initUnifiedList failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}
