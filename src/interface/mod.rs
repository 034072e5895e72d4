pub mod tcp;
pub mod resolver;

#[cfg(test)]
pub(crate) mod fake_board;
