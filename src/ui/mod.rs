pub mod mvi;
pub mod tictactoe;
