use std::sync::Mutex;

/// A sink for diagnostic messages. Registered sinks observe every message
/// routed through `emit_log_msg`, including the report of a failed `verify!`.
pub trait Logger: Send {
    fn log(&mut self, file: &'static str, line: u32, tag: &'static str, msg: &str);
}

lazy_static! {
    static ref LOGGERS: Mutex<Vec<Box<dyn Logger>>> = Mutex::new(vec![]);
}

#[inline]
pub fn emit_log_msg(file: &'static str, line: u32, tag: &'static str, msg: &str) {
    let mut loggers = LOGGERS.lock().unwrap();
    loggers
        .iter_mut()
        .for_each(|logger| logger.log(file, line, tag, msg));
}

/// Basic logger printing to stdout, or stderr for DEBUG and FATAL tags.
pub struct Println_Logger;

impl Logger for Println_Logger {
    fn log(&mut self, _file: &'static str, _line: u32, tag: &'static str, msg: &str) {
        match tag {
            "DEBUG" | "FATAL" => eprintln!("[ {} ] {}", tag, msg),
            _ => println!("[ {} ] {}", tag, msg),
        }
    }
}

pub fn add_default_logger() {
    add_logger(Box::new(Println_Logger {}));
}

pub fn add_logger(logger: Box<dyn Logger>) {
    let mut loggers = LOGGERS.lock().unwrap();
    loggers.push(logger);
}
