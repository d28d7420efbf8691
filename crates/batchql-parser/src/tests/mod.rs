mod graphql_parse_error_tests;
mod graphql_parser_selection_tests;
mod source_position_tests;
mod utils;
