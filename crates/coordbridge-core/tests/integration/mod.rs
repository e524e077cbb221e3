mod basic_tests;
mod conversion_tests;
