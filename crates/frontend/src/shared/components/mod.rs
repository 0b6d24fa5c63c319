pub mod data_table;
pub mod page_header;
pub mod pagination_controls;
pub mod search_select;
pub mod stat_card;
pub mod status_badge;
