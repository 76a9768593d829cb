//!HID usage pages
mod consumer;

pub use consumer::Consumer;
