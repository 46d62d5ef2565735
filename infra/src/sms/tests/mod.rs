mod mock_sender_tests;
