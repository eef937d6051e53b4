// Document rendering: `compose` lays a reconciled profile out as a
// paginated document model; a `DocumentSink` turns that model into bytes.
// The sink is the only part that knows about an output format.

pub mod compose;
pub mod text;

use serde::Serialize;

use crate::errors::AppError;

pub use compose::compose;
pub use text::TextSink;

/// Visual weight of a line of text. Sinks map these to fonts and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Normal,
    Strong,
    Accent,
    Muted,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Centered agency banner.
    Banner { text: String },
    Title { text: String },
    /// Section heading with a rule under it.
    Section { text: String },
    Subheading { text: String },
    Line { text: String, tone: Tone, indent: u8 },
    Bullet { text: String },
    /// Shaded full-width box.
    Callout { text: String, tone: Tone },
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    Spacer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn line(&mut self, text: impl Into<String>, tone: Tone, indent: u8) {
        self.push(Block::Line {
            text: text.into(),
            tone,
            indent,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileDocument {
    pub file_stem: String,
    pub footer: String,
    pub pages: Vec<Page>,
}

/// Consumes a composed document.
pub trait DocumentSink {
    fn write_document(&mut self, document: &ProfileDocument) -> Result<(), AppError>;
}
