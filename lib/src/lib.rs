#![cfg_attr(feature = "unstable", feature(test))]

mod data;
mod engine;
mod knowledge;
mod results;

pub use data::WordBank;
pub use engine::*;
pub use knowledge::Knowledge;
pub use knowledge::LetterInfo;
pub use knowledge::PositionSet;
pub use results::*;
