// Adjacent-swap sort, quadratic in every case.
pub mod bubble_sort;

// Top-down merge sort with per-merge scratch buffers.
pub mod merge_sort;
