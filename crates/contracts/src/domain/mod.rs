pub mod a001_game_card;
pub mod common;
