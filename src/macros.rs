// src/macros.rs

/// String shorthand.
/// `s!()` → `String::new()`, `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Dotted JSON path shorthand for error messages.
/// `dotted!("result", "pageContext")` → `"result.pageContext"`
#[macro_export]
macro_rules! dotted {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push('.');
            s.push_str($rest);
        )+
        s
    }};
}
