pub mod gesture;
pub mod resolver;
pub mod scheduler;
pub mod zones;
