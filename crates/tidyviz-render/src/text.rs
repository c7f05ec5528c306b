// File: crates/tidyviz-render/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; left/right anchored and rotated text.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Font request for one run of text.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec<'a> {
    pub size_px: f32,
    pub color: skia::Color,
    pub families: &'a [&'a str],
    pub bold: bool,
}

/// Horizontal anchor of a text run relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size_px.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_families(spec.families);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    /// Lay out `text`, wrapping at `max_width` pixels.
    pub fn layout(&self, text: &str, spec: &TextSpec, max_width: f32) -> Paragraph {
        self.layout_highlighted(text, spec, max_width, &[])
    }

    /// Like [`layout`](Self::layout), but whole words listed in `highlights` get their own colour.
    pub fn layout_highlighted(
        &self,
        text: &str,
        spec: &TextSpec,
        max_width: f32,
        highlights: &[(&str, skia::Color)],
    ) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let base = Self::make_style(spec);
        builder.push_style(&base);
        for (run, hit) in style_runs(text, highlights) {
            match hit {
                Some(i) => {
                    let mut style = base.clone();
                    style.set_color(highlights[i].1);
                    builder.push_style(&style);
                    builder.add_text(run);
                    builder.pop();
                }
                None => {
                    builder.add_text(run);
                }
            }
        }
        let mut paragraph = builder.build();
        paragraph.layout(max_width.max(1.0));
        paragraph
    }

    pub fn measure_width(&self, text: &str, spec: &TextSpec) -> f32 {
        self.layout(text, spec, 100_000.0).longest_line()
    }

    /// Single line with its top-left (Start) or top-right (End) corner at `(x, y)`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, spec: &TextSpec, anchor: Anchor) {
        let p = self.layout(text, spec, 100_000.0);
        let dx = match anchor {
            Anchor::Start => 0.0,
            Anchor::End => -p.longest_line(),
        };
        p.paint(canvas, (x + dx, y));
    }

    /// Lines stacked downward from `(x, y)`; returns the total height drawn.
    pub fn draw_lines(&self, canvas: &skia::Canvas, lines: &[String], x: f32, y: f32, spec: &TextSpec) -> f32 {
        let mut cursor = y;
        for line in lines {
            let p = self.layout(line, spec, 100_000.0);
            p.paint(canvas, (x, cursor));
            cursor += p.height();
        }
        cursor - y
    }

    /// One line rotated `degrees` counter-clockwise about `(x, y)`, vertically centred on it.
    pub fn draw_rotated(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, degrees: f32, spec: &TextSpec, anchor: Anchor) {
        let p = self.layout(text, spec, 100_000.0);
        let dx = match anchor {
            Anchor::Start => 0.0,
            Anchor::End => -p.longest_line(),
        };
        canvas.save();
        canvas.translate((x, y));
        // Skia rotates clockwise with Y pointing down
        canvas.rotate(-degrees, None);
        p.paint(canvas, (dx, -p.height() * 0.5));
        canvas.restore();
    }
}

/// Split `text` into runs; a run equal to one of the highlight words carries its index.
/// Words are matched whole, ignoring trailing punctuation.
pub(crate) fn style_runs<'t>(text: &'t str, highlights: &[(&str, skia::Color)]) -> Vec<(&'t str, Option<usize>)> {
    let mut runs: Vec<(&'t str, Option<usize>)> = Vec::new();
    let mut plain_from = 0;
    let mut offset = 0;
    for piece in text.split_inclusive(char::is_whitespace) {
        let core = piece.trim_end_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation());
        if let Some(i) = highlights.iter().position(|(w, _)| !w.is_empty() && *w == core) {
            if plain_from < offset {
                runs.push((&text[plain_from..offset], None));
            }
            runs.push((&text[offset..offset + core.len()], Some(i)));
            plain_from = offset + core.len();
        }
        offset += piece.len();
    }
    if plain_from < text.len() {
        runs.push((&text[plain_from..], None));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: skia::Color = skia::Color::from_rgb(0x35, 0x97, 0x8f);
    const BROWN: skia::Color = skia::Color::from_rgb(0xbf, 0x81, 0x2d);

    #[test]
    fn highlighted_words_get_own_runs() {
        let runs = style_runs("lists 5 births and 2\ndeaths on a leap day", &[("births", GREEN), ("deaths", BROWN)]);
        assert_eq!(
            runs,
            vec![
                ("lists 5 ", None),
                ("births", Some(0)),
                (" and 2\n", None),
                ("deaths", Some(1)),
                (" on a leap day", None),
            ]
        );
    }

    #[test]
    fn trailing_punctuation_stays_plain() {
        let runs = style_runs("no deaths.", &[("deaths", BROWN)]);
        assert_eq!(runs, vec![("no ", None), ("deaths", Some(0)), (".", None)]);
    }

    #[test]
    fn partial_words_do_not_match() {
        let text = "rebirths happen";
        assert_eq!(style_runs(text, &[("births", GREEN)]), vec![(text, None)]);
        assert!(style_runs("", &[("births", GREEN)]).is_empty());
    }
}
