mod project_locks_tests;
