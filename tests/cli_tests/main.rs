mod utils;

mod help;
mod rank;
