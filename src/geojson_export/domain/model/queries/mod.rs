pub mod build_feature_collection_query;
