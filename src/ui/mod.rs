pub mod book_list;
pub mod coordinator;
pub mod mvi;
pub mod root;
