// src/macros.rs

/// Owned `String` shorthand.
/// `s!()` is empty, `s!(x)` is `String::from(x)`, `s!("{} {}", a, b)` formats.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($fmt:literal, $($arg:tt)+) => {
        ::std::format!($fmt, $($arg)+)
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into one owned `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $( out.push_str($rest); )+
        out
    }};
}
