pub mod font;
pub mod wrap;

#[cfg(test)]
#[path = "../../tests/unit/text/test_font.rs"]
pub(crate) mod test_font;
