mod line_logger;

pub use line_logger::LineLogger;
