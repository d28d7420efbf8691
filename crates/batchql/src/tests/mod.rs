mod call_document_tests;
mod merge_engine_tests;
mod merge_property_tests;
mod utils;
