mod fragment_builder_tests;
mod selection_set_tests;
