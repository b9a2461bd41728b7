//! The push-driven assembly engine

use super::Attributes;
use super::dispatch::{Action, dispatch};
use super::mode::{ContextStack, Frame, Mode};
use crate::builder::{Builder, Node};
use crate::error::{Error, ErrorContext, Result};
use crate::model::{Document, ParserConfig};
use log::{debug, trace};

/// Turns start/text/end events into a [`Document`]
///
/// The handler is independent of the XML tokenizer: any event source that
/// reports local element names, attributes and text fragments can drive it.
/// After the first error every further call fails with
/// [`Error::IllegalState`].
///
/// # Example
///
/// ```
/// use collada::parser::{Attributes, DocumentHandler};
///
/// let mut handler = DocumentHandler::new();
/// let none = Attributes::new();
/// handler.start_element("COLLADA", &none).unwrap();
/// handler.start_element("library_lights", &none).unwrap();
/// handler.end_element("library_lights").unwrap();
/// handler.end_element("COLLADA").unwrap();
///
/// let document = handler.finish().unwrap();
/// assert_eq!(document.light_libraries.len(), 1);
/// ```
#[derive(Debug)]
pub struct DocumentHandler {
    config: ParserConfig,
    stack: ContextStack,
    document: Document,
    poisoned: bool,
    /// Path of the element being closed, reported if building it fails
    closing: Option<String>,
}

impl DocumentHandler {
    /// Create a handler with the default configuration
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a handler with a custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            stack: ContextStack::new(),
            document: Document::new(),
            poisoned: false,
            closing: None,
        }
    }

    /// Current grammar position
    pub fn mode(&self) -> Mode {
        self.stack.mode()
    }

    /// Number of open modes above the root
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Report the start of an element
    pub fn start_element(&mut self, local_name: &str, attrs: &Attributes) -> Result<()> {
        self.guarded(|handler| handler.enter_element(local_name, attrs))
    }

    /// Report a fragment of character data
    pub fn text(&mut self, fragment: &str) -> Result<()> {
        self.guarded(|handler| handler.stack.builder_mut().text(fragment))
    }

    /// Report the end of an element
    pub fn end_element(&mut self, local_name: &str) -> Result<()> {
        self.guarded(|handler| handler.leave_element(local_name))
    }

    /// Return the finished document
    ///
    /// Fails unless every opened construct has been closed.
    pub fn finish(self) -> Result<Document> {
        if self.poisoned {
            return Err(Error::IllegalState(
                "the document is unavailable after a parse error".to_string(),
            ));
        }
        if self.stack.mode() != Mode::Root {
            return Err(Error::IllegalState(format!(
                "the document is incomplete: '{}' is still open",
                self.stack.path()
            )));
        }
        debug!(
            "Parsed COLLADA document: {} image, {} material, {} effect, {} geometry, {} camera and {} light libraries",
            self.document.image_libraries.len(),
            self.document.material_libraries.len(),
            self.document.effect_libraries.len(),
            self.document.geometry_libraries.len(),
            self.document.camera_libraries.len(),
            self.document.light_libraries.len(),
        );
        Ok(self.document)
    }

    fn guarded<F>(&mut self, event: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if self.poisoned {
            return Err(Error::IllegalState(
                "no events are accepted after a parse error".to_string(),
            ));
        }
        event(self).map_err(|err| {
            self.poisoned = true;
            let path = self.closing.take().unwrap_or_else(|| self.stack.path());
            let mut context = ErrorContext::new().path(path);
            if matches!(err, Error::InvalidModel(_)) {
                context = context
                    .hint("use ParserConfig::with_strict_array_counts(false) to accept surplus values");
            }
            err.with_context(&context)
        })
    }

    fn enter_element(&mut self, local_name: &str, attrs: &Attributes) -> Result<()> {
        let Some(action) = dispatch(self.stack.mode(), local_name) else {
            return Ok(());
        };
        match action {
            Action::Attach(leaf) => self.stack.builder_mut().attach(leaf, attrs),
            Action::Wrap(mode) => self.push(mode, Builder::None),
            Action::Open(mode) => {
                let builder = Builder::open(mode, attrs, &self.config)?;
                self.push(mode, builder)
            }
        }
    }

    fn push(&mut self, mode: Mode, builder: Builder) -> Result<()> {
        if self.stack.depth() >= self.config.max_depth() {
            return Err(Error::InvalidXml(format!(
                "element nesting exceeds the maximum depth of {}",
                self.config.max_depth()
            )));
        }
        self.stack.enter(mode, builder);
        trace!("Entered {:?} at depth {}", mode, self.stack.depth());
        Ok(())
    }

    fn leave_element(&mut self, local_name: &str) -> Result<()> {
        if self.stack.mode().tag_name() != Some(local_name) {
            return Ok(());
        }
        self.closing = Some(self.stack.path());
        self.close_frame()?;
        self.closing = None;
        Ok(())
    }

    fn close_frame(&mut self) -> Result<()> {
        let Frame { mode, builder } = self.stack.leave()?;
        trace!("Left {:?}, back at depth {}", mode, self.stack.depth());

        match builder.build(mode)? {
            None => Ok(()),
            Some(Node::Library(library)) => {
                debug!(
                    "Assembled <{}> with {} item(s)",
                    library.kind(),
                    library.len()
                );
                library.assemble_into(&mut self.document);
                Ok(())
            }
            Some(node) => match self.stack.owner_mut() {
                Some(owner) => owner.absorb(node),
                None => Err(Error::IllegalState(format!(
                    "no open element can hold {}",
                    node.kind()
                ))),
            },
        }
    }
}

impl Default for DocumentHandler {
    fn default() -> Self {
        Self::new()
    }
}
