pub mod guesswork;
