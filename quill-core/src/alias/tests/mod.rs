mod parse_tests;
mod set_tests;
