pub mod lifecycle;

pub use lifecycle::Lifecycle;
