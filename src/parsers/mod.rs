pub mod ios_parser;
