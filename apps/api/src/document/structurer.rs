//! Document structuring — folds the classified line stream into renderable blocks.
//!
//! A single pass with an explicit two-state list machine: `Closed` until the
//! first bullet opens a list, `Open` until any non-bullet line (or the end of
//! input) closes it. Consecutive bullets therefore always collapse into one
//! list block, and two list blocks can never sit next to each other.

use serde::{Deserialize, Serialize};

use crate::document::classifier::{ClassifiedLine, LineRole, BULLET_GLYPHS};

/// A structural unit of the rendered document. No markup format is implied;
/// the presentation layer decides how each block is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    List { items: Vec<String> },
}

/// Ordered block sequence produced from one resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDocument {
    pub blocks: Vec<Block>,
}

enum ListState {
    Closed,
    Open(Vec<String>),
}

/// Folds classified lines into a structured document. Total: an empty line
/// list yields an empty document.
pub fn structure_document(lines: &[ClassifiedLine]) -> StructuredDocument {
    let mut blocks: Vec<Block> = Vec::new();
    let mut state = ListState::Closed;

    for line in lines {
        match line.role {
            LineRole::Bullet => {
                let item = strip_bullet(&line.text);
                match &mut state {
                    ListState::Open(items) => items.push(item),
                    ListState::Closed => state = ListState::Open(vec![item]),
                }
            }
            role => {
                if let ListState::Open(items) = std::mem::replace(&mut state, ListState::Closed) {
                    blocks.push(Block::List { items });
                }
                emit_block(&mut blocks, role, &line.text);
            }
        }
    }

    if let ListState::Open(items) = state {
        blocks.push(Block::List { items });
    }

    StructuredDocument { blocks }
}

/// Emits the block for a non-bullet line. Name and contact lines form the
/// document header: a contiguous run coalesces into a single level-1 heading,
/// one source line per text line.
fn emit_block(blocks: &mut Vec<Block>, role: LineRole, text: &str) {
    match role {
        LineRole::Name | LineRole::ContactInfo => {
            if let Some(Block::Heading { level: 1, text: header }) = blocks.last_mut() {
                header.push('\n');
                header.push_str(text);
            } else {
                blocks.push(Block::Heading {
                    level: 1,
                    text: text.to_string(),
                });
            }
        }
        LineRole::SectionHeader => blocks.push(Block::Heading {
            level: 2,
            text: text.to_string(),
        }),
        LineRole::DatedHeading => blocks.push(Block::Heading {
            level: 3,
            text: text.to_string(),
        }),
        LineRole::Paragraph => blocks.push(Block::Paragraph {
            text: text.to_string(),
        }),
        // Bullets are handled by the list machine before this point.
        LineRole::Bullet => unreachable!("bullet lines never reach emit_block"),
    }
}

/// Strips one leading bullet glyph and the whitespace after it.
fn strip_bullet(text: &str) -> String {
    text.strip_prefix(BULLET_GLYPHS)
        .unwrap_or(text)
        .trim_start()
        .to_string()
}
