pub mod unified_list;
