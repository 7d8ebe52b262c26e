pub mod context;
pub mod engine;
pub mod formula;
pub mod goal;
pub mod interfaces;
pub mod interpreter;
pub mod syntax;

#[cfg(test)]
mod tests;
