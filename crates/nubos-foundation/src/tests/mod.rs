mod gesture_recognizer_tests;
