pub mod add_article;
pub mod details;
pub mod list;
