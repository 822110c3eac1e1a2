mod verification_record_tests;
