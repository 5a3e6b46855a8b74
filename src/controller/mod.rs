pub mod auth;
pub mod resource;

#[cfg(test)]
mod test;
