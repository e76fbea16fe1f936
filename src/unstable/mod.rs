// Minimum selection, one swap per outer pass.
pub mod selection_sort;

// Lomuto partition quicksort with last element pivot.
pub mod quick_sort;
