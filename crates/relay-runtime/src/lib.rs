pub mod driver;
pub mod scheduler;

#[cfg(test)]
mod tests;
