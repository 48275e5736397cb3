pub mod fibonacci_heap;
pub mod indexed_heap;
pub mod traits;

pub use fibonacci_heap::{FibHandle, FibonacciHeap};
pub use indexed_heap::IndexedBinaryHeap;
pub use traits::PriorityQueue;
