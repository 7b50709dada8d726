pub mod database_source_facade_notion_impl;
