#[cfg(test)]
mod common;


#[cfg(test)]
mod tactics_test;
