//! Decoders for USB HID consumer control reports captured from a keyboard
//! firmware's report stream
//!
//! A captured report buffer is copied into its fixed binary layout at
//! construction and exposed as an immutable view pairing the capture
//! timestamp with the decoded key state. Intended for test harnesses and
//! capture analysis on the observing side of the wire.
#![no_std]

//Allow the use of std in tests
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod page;
pub mod report;
