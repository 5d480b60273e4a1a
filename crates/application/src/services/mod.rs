mod allocation;

pub use allocation::FallibleAlloc;
