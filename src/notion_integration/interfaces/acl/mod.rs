pub mod notion_database_facade;
