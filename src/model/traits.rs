use std::borrow::Cow;

/// Display names of the five scored dimensions, in column order.
pub const TRAIT_NAMES: [&str; 5] = ["Extra", "Neuro", "Agree", "Cons", "Open"];

/// Name for trait column `column`; columns past the fifth get `Trait<N>`.
pub fn trait_name(column: usize) -> Cow<'static, str> {
    match TRAIT_NAMES.get(column) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("Trait{}", column + 1)),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/traits.rs"]
mod tests;
