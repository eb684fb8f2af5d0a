mod exhaustive_variants_proptests;
mod scope_path_tests;
