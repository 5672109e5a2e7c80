pub mod confirm_dialog;
pub mod empty_state;
pub mod page_header;
pub mod pagination_controls;
pub mod ui;
