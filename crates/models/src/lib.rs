pub mod errors;
pub mod db;
pub mod gene;
pub mod transcript;

#[cfg(test)]
mod tests;
