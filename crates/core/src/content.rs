//! Article body to renderable blocks.
//!
//! [`LineClassifier`] maps each input line to exactly one [`ContentBlock`]
//! using first-match-wins prefix rules. Code fences are not paired: every
//! line starting with three backticks becomes its own `CodeFence` block and
//! the lines between fences are classified like any other line.
//!
//! [`CommonMarkClassifier`] is a real markdown parser behind the same
//! [`TextToBlocks`] seam. It groups fenced code into one block and does not
//! keep the one-block-per-line shape.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading1,
    Heading2,
    CodeFence,
    Paragraph,
    /// Blank line, rendered as nothing
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub kind: BlockKind,
    pub text: String,
}

impl ContentBlock {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn skip() -> Self {
        Self::new(BlockKind::Skip, String::new())
    }

    pub fn is_skip(&self) -> bool {
        self.kind == BlockKind::Skip
    }
}

/// Converts raw article text into an ordered list of blocks
pub trait TextToBlocks {
    fn to_blocks(&self, raw: &str) -> Vec<ContentBlock>;
}

/// Prefix-based line classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    /// Classify a single line. Leading and trailing whitespace is ignored.
    pub fn classify_line(line: &str) -> ContentBlock {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("# ") {
            ContentBlock::new(BlockKind::Heading1, rest)
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            ContentBlock::new(BlockKind::Heading2, rest)
        } else if trimmed.starts_with("```") {
            ContentBlock::new(BlockKind::CodeFence, trimmed)
        } else if !trimmed.is_empty() {
            ContentBlock::new(BlockKind::Paragraph, trimmed)
        } else {
            ContentBlock::skip()
        }
    }
}

impl TextToBlocks for LineClassifier {
    fn to_blocks(&self, raw: &str) -> Vec<ContentBlock> {
        raw.split('\n').map(Self::classify_line).collect()
    }
}

/// Classify `raw` with the line rules. One block per `\n`-separated line.
pub fn classify(raw: &str) -> Vec<ContentBlock> {
    LineClassifier.to_blocks(raw)
}

/// CommonMark-backed classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkClassifier;

impl TextToBlocks for CommonMarkClassifier {
    fn to_blocks(&self, raw: &str) -> Vec<ContentBlock> {
        let mut blocks = Vec::new();
        let mut current: Option<(BlockKind, String)> = None;

        for event in Parser::new(raw) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    flush(&mut blocks, &mut current);
                    let kind = if level == HeadingLevel::H1 {
                        BlockKind::Heading1
                    } else {
                        BlockKind::Heading2
                    };
                    current = Some((kind, String::new()));
                }
                Event::Start(Tag::CodeBlock(_)) => {
                    flush(&mut blocks, &mut current);
                    current = Some((BlockKind::CodeFence, String::new()));
                }
                Event::Start(Tag::Item) => {
                    flush(&mut blocks, &mut current);
                    current = Some((BlockKind::Paragraph, String::new()));
                }
                Event::Start(Tag::Paragraph) => {
                    // Loose list items wrap their text in a paragraph
                    if current.is_none() {
                        current = Some((BlockKind::Paragraph, String::new()));
                    }
                }
                Event::End(
                    TagEnd::Heading(_) | TagEnd::CodeBlock | TagEnd::Paragraph | TagEnd::Item,
                ) => flush(&mut blocks, &mut current),
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, buf)) = current.as_mut() {
                        buf.push_str(&text);
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some((_, buf)) = current.as_mut() {
                        buf.push(' ');
                    }
                }
                _ => {}
            }
        }
        flush(&mut blocks, &mut current);

        blocks
    }
}

fn flush(blocks: &mut Vec<ContentBlock>, current: &mut Option<(BlockKind, String)>) {
    if let Some((kind, text)) = current.take() {
        let text = match kind {
            BlockKind::CodeFence => text.trim_end().to_string(),
            _ => text.trim().to_string(),
        };
        if !text.is_empty() {
            blocks.push(ContentBlock::new(kind, text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_examples() {
        assert_eq!(
            LineClassifier::classify_line("# Next.js 15入門指南"),
            ContentBlock::new(BlockKind::Heading1, "Next.js 15入門指南")
        );
        assert_eq!(
            LineClassifier::classify_line("## 安裝與設置"),
            ContentBlock::new(BlockKind::Heading2, "安裝與設置")
        );
        assert_eq!(
            LineClassifier::classify_line("```bash"),
            ContentBlock::new(BlockKind::CodeFence, "```bash")
        );
        assert_eq!(
            LineClassifier::classify_line("一般段落文字"),
            ContentBlock::new(BlockKind::Paragraph, "一般段落文字")
        );
        assert_eq!(LineClassifier::classify_line(""), ContentBlock::skip());
    }

    #[test]
    fn test_classify_trims_indentation() {
        assert_eq!(
            LineClassifier::classify_line("      ## 結論   "),
            ContentBlock::new(BlockKind::Heading2, "結論")
        );
        assert_eq!(
            LineClassifier::classify_line("\t```\r"),
            ContentBlock::new(BlockKind::CodeFence, "```")
        );
        assert!(LineClassifier::classify_line("   \t ").is_skip());
    }

    #[test]
    fn test_first_match_wins() {
        // "### " is neither "# " nor "## "
        assert_eq!(
            LineClassifier::classify_line("### deeper"),
            ContentBlock::new(BlockKind::Paragraph, "### deeper")
        );
        // Bare markers without the trailing space are paragraphs
        assert_eq!(
            LineClassifier::classify_line("#"),
            ContentBlock::new(BlockKind::Paragraph, "#")
        );
        assert_eq!(
            LineClassifier::classify_line("#tag"),
            ContentBlock::new(BlockKind::Paragraph, "#tag")
        );
        assert_eq!(
            LineClassifier::classify_line("``not a fence"),
            ContentBlock::new(BlockKind::Paragraph, "``not a fence")
        );
    }

    #[test]
    fn test_one_block_per_line() {
        let raw = "\n  # Title\n\n  text\n  ```js\n  let x = 1;\n  ```\n";
        let blocks = classify(raw);
        assert_eq!(blocks.len(), raw.split('\n').count());
        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Skip,
                BlockKind::Heading1,
                BlockKind::Skip,
                BlockKind::Paragraph,
                BlockKind::CodeFence,
                BlockKind::Paragraph,
                BlockKind::CodeFence,
                BlockKind::Skip,
            ]
        );
    }

    #[test]
    fn test_empty_input_is_single_skip() {
        assert_eq!(classify(""), vec![ContentBlock::skip()]);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let raw = "# A\n\n## B\n```\ncode\n```\npara";
        assert_eq!(classify(raw), classify(raw));
    }

    #[test]
    fn test_code_fences_are_not_grouped() {
        let blocks = classify("```bash\nnpm run dev\n```");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::new(BlockKind::CodeFence, "```bash"),
                ContentBlock::new(BlockKind::Paragraph, "npm run dev"),
                ContentBlock::new(BlockKind::CodeFence, "```"),
            ]
        );
    }

    #[test]
    fn test_trait_object_matches_free_function() {
        let classifier: Box<dyn TextToBlocks> = Box::new(LineClassifier);
        let raw = "# x\ny";
        assert_eq!(classifier.to_blocks(raw), classify(raw));
    }

    #[test]
    fn test_commonmark_groups_code_blocks() {
        let raw = "# Title\n\nIntro **bold** text.\n\n## Setup\n\n```bash\ncd app\nnpm run dev\n```\n";
        let blocks = CommonMarkClassifier.to_blocks(raw);
        assert_eq!(
            blocks,
            vec![
                ContentBlock::new(BlockKind::Heading1, "Title"),
                ContentBlock::new(BlockKind::Paragraph, "Intro bold text."),
                ContentBlock::new(BlockKind::Heading2, "Setup"),
                ContentBlock::new(BlockKind::CodeFence, "cd app\nnpm run dev"),
            ]
        );
    }

    #[test]
    fn test_commonmark_list_items_become_paragraphs() {
        let raw = "1. first\n2. second `code`\n\n### Deep heading\n";
        let blocks = CommonMarkClassifier.to_blocks(raw);
        assert_eq!(
            blocks,
            vec![
                ContentBlock::new(BlockKind::Paragraph, "first"),
                ContentBlock::new(BlockKind::Paragraph, "second code"),
                ContentBlock::new(BlockKind::Heading2, "Deep heading"),
            ]
        );
    }
}
