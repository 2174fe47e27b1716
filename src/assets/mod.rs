pub mod decode;
pub mod source;

#[cfg(test)]
#[path = "../../tests/unit/assets/test_gif.rs"]
pub(crate) mod test_gif;
