mod ir_forest_builder_tests;
