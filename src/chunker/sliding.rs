//! Sliding-window passage segmentation over characters

use crate::error::{QaError, Result};

use super::normalize_whitespace;

/// Half-open character range `[start, end)` in the normalized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Fixed-size window advanced by a fixed stride.
///
/// Offsets count characters, not bytes. The final window always ends at
/// the end of the text, whatever `(len - size) % stride` is.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    /// Window width in characters
    size: usize,
    /// Step between window starts in characters
    stride: usize,
}

impl Segmenter {
    pub fn new(size: usize, stride: usize) -> Result<Self> {
        if size == 0 {
            return Err(QaError::InvalidConfig("passage size must be > 0".into()));
        }
        if stride == 0 || stride > size {
            return Err(QaError::InvalidConfig(format!(
                "passage stride must be in 1..={} (got {})",
                size, stride
            )));
        }
        Ok(Self { size, stride })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Window positions over a text of `len` characters
    pub fn spans(&self, len: usize) -> Vec<Span> {
        if len <= self.size {
            return vec![Span { start: 0, end: len }];
        }

        let mut spans = Vec::with_capacity((len - self.size) / self.stride + 2);
        let mut start = 0;
        loop {
            let end = (start + self.size).min(len);
            spans.push(Span { start, end });
            if end == len {
                break;
            }
            start += self.stride;
        }
        spans
    }

    /// Normalize `text` and cut it into trimmed passage strings.
    ///
    /// Whitespace-only input yields a single empty passage.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let normalized = normalize_whitespace(text);

        // Byte offset of every char boundary, including the end of the text
        let boundaries: Vec<usize> = normalized
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(normalized.len()))
            .collect();
        let len = boundaries.len() - 1;

        self.spans(len)
            .into_iter()
            .map(|span| {
                normalized[boundaries[span.start]..boundaries[span.end]]
                    .trim()
                    .to_string()
            })
            .collect()
    }
}

/// Segment `text` with a one-off [`Segmenter`]
pub fn segment(text: &str, size: usize, stride: usize) -> Result<Vec<String>> {
    Ok(Segmenter::new(size, stride)?.segment(text))
}
