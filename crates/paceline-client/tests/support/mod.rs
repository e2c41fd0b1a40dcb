pub mod tracker_testkit;
