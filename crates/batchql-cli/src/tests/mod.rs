mod merge_cmd_tests;
