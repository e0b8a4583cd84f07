pub mod debounce;
pub mod rng;
