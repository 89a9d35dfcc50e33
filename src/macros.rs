// src/macros.rs
//
// String shorthands used across the crate.

/// `s!()` → empty String, `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate two or more `&str` pieces into one String, allocating once.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let parts: &[&str] = &[$first $(, $rest)+];
        parts.concat()
    }};
}
