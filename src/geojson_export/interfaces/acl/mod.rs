pub mod database_source_facade;
