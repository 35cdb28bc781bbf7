//! Parser tests for the MCUXpresso CSV trace format

pub mod mcux_tests;
