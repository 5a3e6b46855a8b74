pub mod nullable;
pub mod parse;
pub mod validate;

#[cfg(test)]
mod test;
