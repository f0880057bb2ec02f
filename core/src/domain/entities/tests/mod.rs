mod category_tests;
