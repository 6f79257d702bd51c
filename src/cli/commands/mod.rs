pub mod author;
pub mod note;

#[cfg(test)]
#[path = "author_test.rs"]
mod author_test;
