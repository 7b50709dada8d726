pub mod notion_api_key;
pub mod notion_rich_text;
