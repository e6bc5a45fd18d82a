pub mod board_grid;
pub mod countdown;
pub mod question_card;
