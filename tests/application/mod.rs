mod progress_stream_test;
