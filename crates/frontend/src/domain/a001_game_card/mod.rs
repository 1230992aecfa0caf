//! Game card catalog: the user-editable collection in localStorage plus the
//! read-only default and remote datasets.

pub mod actions;
pub mod api;
pub mod local_data;
pub mod session;
pub mod storage;
pub mod ui;
