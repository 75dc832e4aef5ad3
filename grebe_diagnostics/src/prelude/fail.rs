/// Endpoint of `verify!` and `fatal!`: reports the condition to every
/// registered log sink, then panics. Stays active in release builds.
pub fn fail(cond: &str, file: &'static str, line: u32) -> ! {
    crate::log::emit_log_msg(file, line, "FATAL", cond);
    panic!("[ FATAL ] {} ({}:{})", cond, file, line);
}

/// Checks `$cond` in every build configuration, unlike `debug_assert!`.
#[macro_export]
macro_rules! verify {
    ($cond: expr) => {
        if !$cond {
            $crate::prelude::fail(stringify!($cond), file!(), line!());
        }
    };
}

/// Unconditional failure with a formatted message.
#[macro_export]
macro_rules! fatal {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::prelude::fail(&format!($fmt, $($arg),*), file!(), line!())
    };
}
