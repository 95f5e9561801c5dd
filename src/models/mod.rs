pub mod games;
pub mod player;
