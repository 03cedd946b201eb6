mod profile;
mod report;
pub mod utils;

fn main() {}
