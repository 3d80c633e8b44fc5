mod selection_map_tests;
mod test_utils;
