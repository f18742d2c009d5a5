//! Text-level repairs applied to a minutes page before it is parsed.
//!
//! Older minutes leave most `<P>` tags unterminated. The rules here are:
//!
//! 1. Every paragraph close tag is case-folded to `</p>`.
//! 2. Every paragraph open tag is case-folded to `<p ...>` (attributes kept)
//!    and, except for the first, prefixed with a synthesized `</p>`.
//! 3. Runs of consecutive close tags produced by rule 2 collapse to one.
//!
//! Separately, [`MarkupRules::truncate_at_boundary`] drops everything from the
//! first bold `References`/`Appendix` heading onward.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::ScrapeResult;

const DOCUMENT_CLOSE: &str = "</body></html>";

pub struct MarkupRules {
    open_paragraph: Regex,
    close_paragraph: Regex,
    repeated_close: Regex,
    boundary_heading: Regex,
}

impl MarkupRules {
    pub fn new() -> ScrapeResult<Self> {
        Ok(Self {
            open_paragraph: Regex::new(r"(?i)<p(\s[^>]*)?>")?,
            close_paragraph: Regex::new(r"(?i)</p\s*>")?,
            repeated_close: Regex::new(r"</p>(?:\s*</p>)+")?,
            boundary_heading: Regex::new(r"(?i)<(?:b|strong)>\s*(?:references|appendix)")?,
        })
    }

    pub fn repair_paragraphs(&self, html: &str) -> String {
        let closed = self.close_paragraph.replace_all(html, "</p>");

        let mut seen_first = false;
        let opened = self.open_paragraph.replace_all(&closed, |caps: &Captures| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            if seen_first {
                format!("</p><p{attrs}>")
            } else {
                seen_first = true;
                format!("<p{attrs}>")
            }
        });

        self.repeated_close.replace_all(&opened, "</p>").into_owned()
    }

    /// Cuts `html` at the first references/appendix heading and closes the document.
    pub fn truncate_at_boundary<'a>(&self, html: &'a str) -> Cow<'a, str> {
        match self.boundary_heading.find(html) {
            Some(m) => Cow::Owned(format!("{}{}", &html[..m.start()], DOCUMENT_CLOSE)),
            None => Cow::Borrowed(html),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unterminated_paragraphs_get_closed() {
        let rules = MarkupRules::new().unwrap();
        assert_eq!(rules.repair_paragraphs("<P>a<P>b</P>"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn well_formed_paragraphs_keep_a_single_closer() {
        let rules = MarkupRules::new().unwrap();
        let html = "<p>a</p>\n<p class=\"x\">b</p>";
        assert_eq!(rules.repair_paragraphs(html), "<p>a</p><p class=\"x\">b</p>");
    }

    #[test]
    fn similar_tags_are_not_treated_as_paragraphs() {
        let rules = MarkupRules::new().unwrap();
        assert_eq!(
            rules.repair_paragraphs("<P ALIGN=center>a<pre>x</pre><P>b"),
            "<p ALIGN=center>a<pre>x</pre></p><p>b"
        );
    }

    #[test]
    fn truncates_at_first_heading_case_insensitively() {
        let rules = MarkupRules::new().unwrap();
        let html = "<p>keep</p><STRONG>References</STRONG><p>drop</p><b>Appendix</b>";
        assert_eq!(rules.truncate_at_boundary(html), "<p>keep</p></body></html>");

        let html = "<p>keep</p><b> APPENDIX 1</b><p>drop</p>";
        assert_eq!(rules.truncate_at_boundary(html), "<p>keep</p></body></html>");
    }

    #[test]
    fn no_heading_means_no_truncation() {
        let rules = MarkupRules::new().unwrap();
        let html = "<p>See the references in the staff report.</p>";
        assert!(matches!(rules.truncate_at_boundary(html), Cow::Borrowed(_)));
    }
}
