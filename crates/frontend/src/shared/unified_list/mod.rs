//! Универсальный список: поиск, пагинация, CRUD, детальная форма и выгрузка в Excel
//! поверх REST ресурса `/api/{mode}`.

mod bindings;
pub mod config;
pub mod controller;
pub mod dom_view;
pub mod error;
pub mod pager;
mod render;
pub mod selection;
pub mod table;
pub mod view;
pub mod widget;

#[cfg(test)]
mod testing;

pub use config::{ColumnSpec, DetailFields, Features, ListConfig, ListMessages};
pub use controller::ListController;
pub use error::ListError;
pub use view::ListView;
pub use widget::{init_unified_list, UnifiedList};
