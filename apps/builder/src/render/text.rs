use std::io::Write;

use crate::errors::AppError;
use crate::render::{Block, DocumentSink, ProfileDocument, Tone};

const PAGE_WIDTH: usize = 78;

/// Plain-text rendition: one form feed between pages, footer with page number.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_block(&mut self, block: &Block) -> std::io::Result<()> {
        match block {
            Block::Banner { text } => writeln!(self.out, "{:^width$}", text, width = PAGE_WIDTH),
            Block::Title { text } => writeln!(self.out, "{}\n", text),
            Block::Section { text } => {
                writeln!(self.out, "\n{}", text)?;
                writeln!(self.out, "{}", "─".repeat(PAGE_WIDTH))
            }
            Block::Subheading { text } => writeln!(self.out, "{}", text),
            Block::Line { text, tone, indent } => {
                let pad = "  ".repeat(*indent as usize);
                match tone {
                    Tone::Strong => writeln!(self.out, "{pad}{}", text.to_uppercase()),
                    Tone::Muted => writeln!(self.out, "{pad}({text})"),
                    _ => writeln!(self.out, "{pad}{text}"),
                }
            }
            Block::Bullet { text } => writeln!(self.out, "    • {}", text),
            Block::Callout { text, .. } => {
                let rule = "═".repeat(PAGE_WIDTH);
                writeln!(self.out, "{rule}\n {text}\n{rule}")
            }
            Block::Table { headers, rows } => self.write_table(headers, rows),
            Block::Spacer => writeln!(self.out),
        }
    }

    fn write_table(&mut self, headers: &[String], rows: &[Vec<String>]) -> std::io::Result<()> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        let format_row = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| {
                    let pad = width.saturating_sub(cell.chars().count());
                    format!("{cell}{}", " ".repeat(pad))
                })
                .collect::<Vec<_>>()
                .join(" | ")
        };

        writeln!(self.out, "{}", format_row(headers))?;
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(self.out, "{}", separator.join("-+-"))?;
        for row in rows {
            writeln!(self.out, "{}", format_row(row.as_slice()))?;
        }
        Ok(())
    }
}

impl<W: Write> DocumentSink for TextSink<W> {
    fn write_document(&mut self, document: &ProfileDocument) -> Result<(), AppError> {
        let total = document.pages.len();
        for (number, page) in document.pages.iter().enumerate() {
            if number > 0 {
                write!(self.out, "\x0c")?;
            }
            for block in &page.blocks {
                self.write_block(block)?;
            }
            writeln!(
                self.out,
                "\n{:^width$}",
                format!("{}  |  Page {} of {}", document.footer, number + 1, total),
                width = PAGE_WIDTH
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Page;

    #[test]
    fn test_text_output() {
        let mut page = Page::default();
        page.push(Block::Title {
            text: "Jane Doe".to_string(),
        });
        page.line("★ Charge Nurse Experience", Tone::Strong, 2);
        page.push(Block::Table {
            headers: vec!["Category".to_string(), "Skills".to_string()],
            rows: vec![vec!["Equipment".to_string(), "Impella".to_string()]],
        });
        let document = ProfileDocument {
            file_stem: "Jane Doe_Profile".to_string(),
            footer: "Profile Builder Pro  |  06/01/2024".to_string(),
            pages: vec![page, Page::default()],
        };

        let mut sink = TextSink::new(Vec::new());
        sink.write_document(&document).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert!(text.starts_with("Jane Doe\n"));
        assert!(text.contains("    ★ CHARGE NURSE EXPERIENCE"));
        assert!(text.contains("Category  | Skills"));
        assert!(text.contains("Equipment | Impella"));
        assert!(text.contains("Page 1 of 2"));
        assert!(text.contains("Page 2 of 2"));
        assert_eq!(text.matches('\x0c').count(), 1);
    }
}
