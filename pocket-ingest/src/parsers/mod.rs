pub mod operations;

pub use operations::{
    load_operations, parse_operations, parse_operations_bytes, parse_operations_str,
    read_operations,
};
