pub mod notion_database;
pub mod notion_page;
pub mod notion_user;
