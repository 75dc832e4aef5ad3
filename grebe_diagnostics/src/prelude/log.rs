#[macro_export]
macro_rules! log {
    ($tag: tt, $($arg: expr),* $(,)*) => {
        println!("[ {} ] {}", $tag, $($arg),*);
    };
}

#[macro_export]
macro_rules! elog {
    ($tag: tt, $($arg: expr),* $(,)*) => {
        eprintln!("[ {} ] {}", $tag, $($arg),*);
    };
}

#[macro_export]
macro_rules! lok {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        log!("OK", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! lerr {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        elog!("ERROR", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! lwarn {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        elog!("WARNING", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! linfo {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        log!("INFO", format_args!($fmt, $($arg),*));
    };
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! ldebug {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        elog!("DEBUG", format_args!($fmt, $($arg),*));
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! ldebug {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        ()
    };
}
