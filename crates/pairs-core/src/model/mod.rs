pub mod card;
pub mod catalog;
pub mod deck;
pub mod ladder;
pub mod player;
pub mod score;
