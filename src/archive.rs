//! Zipped COLLADA archives (`.zae`)
//!
//! A `.zae` file is a ZIP archive holding a `manifest.xml` at its root. The
//! manifest's `<dae_root>` element names the archive entry containing the
//! root COLLADA document; textures and other resources sit beside it.

use crate::error::{Error, Result};
use crate::model::{Document, ParserConfig};
use crate::parser::{get_local_name, parse_document_with_config, resolve_reference};
use log::debug;
use quick_xml::Reader as XmlReader;
use quick_xml::events::Event;
use std::io::{Read, Seek};
use urlencoding::decode;
use zip::ZipArchive;

/// Path of the manifest inside an archive
pub const MANIFEST_PATH: &str = "manifest.xml";

/// An open `.zae` archive
pub struct ZaeArchive<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> ZaeArchive<R> {
    /// Open an archive from a reader
    pub fn open(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Archive entry named by the manifest's `<dae_root>`
    pub fn root_path(&mut self) -> Result<String> {
        let manifest = self.read_text(MANIFEST_PATH)?;
        let root = read_dae_root(&manifest)?;
        normalize_entry_name(&root)
    }

    /// Text of the root COLLADA document
    pub fn read_root(&mut self) -> Result<String> {
        let path = self.root_path()?;
        debug!("Reading COLLADA root document '{}' from archive", path);
        self.read_text(&path)
    }

    /// Read an entry as UTF-8 text
    pub fn read_text(&mut self, name: &str) -> Result<String> {
        let mut file = self
            .archive
            .by_name(name)
            .map_err(|_| Error::MissingFile(name.to_string()))?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(content)
    }

    /// Read an entry as raw bytes, e.g. a texture
    pub fn read_file(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(name)
            .map_err(|_| Error::MissingFile(name.to_string()))?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    /// Check if an entry exists
    pub fn has_file(&mut self, name: &str) -> bool {
        self.archive.by_name(name).is_ok()
    }

    /// Names of all entries
    pub fn file_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }
}

/// Parse the root document of a `.zae` archive
pub fn read_zae<R: Read + Seek>(reader: R) -> Result<Document> {
    read_zae_with_config(reader, ParserConfig::default())
}

/// Parse the root document of a `.zae` archive with custom configuration
pub fn read_zae_with_config<R: Read + Seek>(reader: R, config: ParserConfig) -> Result<Document> {
    let mut archive = ZaeArchive::open(reader)?;
    let xml = archive.read_root()?;
    parse_document_with_config(&xml, config)
}

/// Extract the text of `<dae_root>` from a manifest
fn read_dae_root(manifest: &str) -> Result<String> {
    let mut reader = XmlReader::from_str(manifest);
    // References split the text into several events; trim once at the end
    reader.config_mut().trim_text(false);

    let mut in_root = false;
    let mut root = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::DocType(_)) => {
                return Err(Error::InvalidXml(
                    "DTD declarations are not allowed in manifest.xml".to_string(),
                ));
            }
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let name_str = std::str::from_utf8(name.as_ref())
                    .map_err(|e| Error::InvalidXml(e.to_string()))?;
                in_root = get_local_name(name_str) == "dae_root";
            }
            Ok(Event::Text(ref e)) if in_root => {
                let text = e.decode().map_err(|e| Error::InvalidXml(e.to_string()))?;
                root.push_str(&text);
            }
            Ok(Event::GeneralRef(ref e)) if in_root => {
                let name = std::str::from_utf8(e).map_err(|e| Error::InvalidXml(e.to_string()))?;
                root.push_str(&resolve_reference(name)?);
            }
            Ok(Event::End(_)) if in_root => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    let root = root.trim();
    if root.is_empty() {
        return Err(Error::invalid_xml_element(
            "dae_root",
            "manifest.xml does not name a root document",
        ));
    }
    Ok(root.to_string())
}

/// Turn a `<dae_root>` URI into an archive entry name
fn normalize_entry_name(uri: &str) -> Result<String> {
    let decoded = decode(uri)
        .map_err(|e| Error::invalid_reference(uri, format!("percent escapes are not UTF-8: {}", e)))?;
    let mut name: &str = &decoded;
    while let Some(rest) = name.strip_prefix("./") {
        name = rest;
    }
    Ok(name.trim_start_matches('/').to_string())
}
