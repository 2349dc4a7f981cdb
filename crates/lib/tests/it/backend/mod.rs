//! Backend integration tests

mod save_load;
