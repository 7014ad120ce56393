#![forbid(unsafe_code)]

//! `satori` is a headless implementation of the Satori message markup in Rust.
//!
//! Adapters hand markup strings to [`parse`] / [`parse_elements`] and read the resulting raw
//! nodes or typed [`Element`]s; going the other way, `to_string()` on an element renders the
//! canonical markup.
//!
//! ```
//! use satori::{Element, ParseOptions, parse_elements};
//!
//! let elements = parse_elements(r#"<at id="1"/> hi"#, ParseOptions::strict())?;
//! assert_eq!(elements[0], Element::at("1"));
//! assert_eq!(elements[1].to_string(), " hi");
//! # Ok::<(), satori::Error>(())
//! ```

pub use satori_core::*;
