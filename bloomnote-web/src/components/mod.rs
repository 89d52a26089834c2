pub mod cuckoo;
pub mod flower_field;
pub mod footer;
pub mod header;
pub mod miss_counter;
pub mod secret_bloom;
