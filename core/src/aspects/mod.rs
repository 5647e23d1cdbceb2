pub mod calculator;
pub mod movement;
pub mod resolver;
pub mod types;

pub use calculator::AspectCalculator;
pub use movement::classify_movement;
pub use resolver::{match_pair, PairMatch};
pub use types::{Aspect, AspectList, Movement};
