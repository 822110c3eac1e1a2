mod memory_session_tests;
