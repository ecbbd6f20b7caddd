//! Embedded word lists
//!
//! Category word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/categories.rs"));
