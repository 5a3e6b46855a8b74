pub mod resource;

#[cfg(test)]
mod test;
