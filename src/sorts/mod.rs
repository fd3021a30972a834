mod counting_sort;

pub use counting_sort::*;
