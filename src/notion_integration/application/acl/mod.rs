pub mod http_notion_database_facade_impl;
