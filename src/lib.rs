//! # collada
//!
//! A pure Rust reader for COLLADA (`.dae`) documents.
//!
//! COLLADA is an XML interchange format for 3D assets. This library reads a
//! document in a single streaming pass and assembles the asset libraries it
//! understands into a typed [`Document`]: images, materials, effects,
//! geometries, cameras and lights.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Streaming assembly driven by start/text/end events, independent of how
//!   the text is split into fragments
//! - Forward compatible: unknown elements and `<extra>` blocks are skipped
//! - Zipped archives (`.zae`) located through their `manifest.xml`
//!
//! ## Example
//!
//! ```
//! use collada::Document;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = r#"<COLLADA version="1.5.0">
//!   <library_lights>
//!     <light id="sun">
//!       <technique_common>
//!         <directional><color>1 1 0.9</color></directional>
//!       </technique_common>
//!     </light>
//!   </library_lights>
//! </COLLADA>"#;
//!
//! let document: Document = xml.parse()?;
//! let sun = document.light("sun").expect("light exists");
//! assert_eq!(sun.source.color().blue, 0.9);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod builder;
pub mod error;
pub mod model;
pub mod parser;
mod uri;

pub use error::{Error, ErrorContext, Result};
pub use model::*;
pub use uri::Uri;

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek};
use std::path::Path;
use std::str::FromStr;

impl Document {
    /// Parse a COLLADA document from a buffered reader
    ///
    /// # Example
    ///
    /// ```no_run
    /// use collada::Document;
    /// use std::fs::File;
    /// use std::io::BufReader;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let file = BufReader::new(File::open("scene.dae")?);
    /// let document = Document::from_reader(file)?;
    /// println!("{} geometries", document.geometries().count());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_config(reader, ParserConfig::default())
    }

    /// Parse a COLLADA document from a buffered reader with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use collada::{Document, ParserConfig};
    ///
    /// let xml = r#"<COLLADA><library_geometries><geometry><mesh>
    ///   <source id="s"><float_array id="a" count="1">1 2</float_array></source>
    ///   <vertices id="v"/>
    /// </mesh></geometry></library_geometries></COLLADA>"#;
    ///
    /// // Surplus values are rejected unless strict counting is turned off
    /// assert!(Document::from_reader(xml.as_bytes()).is_err());
    ///
    /// let config = ParserConfig::new().with_strict_array_counts(false);
    /// assert!(Document::from_reader_with_config(xml.as_bytes(), config).is_ok());
    /// ```
    pub fn from_reader_with_config<R: BufRead>(reader: R, config: ParserConfig) -> Result<Self> {
        parser::parse_reader(reader, config)
    }

    /// Parse a `.dae` file from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse the root document of a zipped `.zae` archive
    ///
    /// # Example
    ///
    /// ```no_run
    /// use collada::Document;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let document = Document::from_zae(File::open("scene.zae")?)?;
    /// println!("{} libraries", document.library_count());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_zae<R: Read + Seek>(reader: R) -> Result<Self> {
        archive::read_zae(reader)
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(xml: &str) -> Result<Self> {
        parser::parse_document(xml)
    }
}
