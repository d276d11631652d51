pub mod api_utils;
pub mod date_utils;
pub mod export;
pub mod http_client;
pub mod unified_list;
