//! Card content
//!
//! Static copy shown on each card. The layout never depends on it: cards are
//! fixed width and the text wraps inside them.

use serde::{Deserialize, Serialize};

/// One card of the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Highlighted band at the top of the card
    pub headline: String,
    /// Main paragraph
    pub body: String,
    /// Small print under the body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footnote: Option<String>,
    /// Call-to-action label at the bottom
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Card {
    pub fn new(headline: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            body: body.into(),
            footnote: None,
            link: None,
        }
    }

    pub fn with_footnote(mut self, footnote: impl Into<String>) -> Self {
        self.footnote = Some(footnote.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Heading shown above the cards
pub const DEFAULT_TITLE: &str = "How membership works";

/// The four built-in cards
pub fn default_cards() -> Vec<Card> {
    vec![
        Card::new(
            "Ut accumsan, nisl ac mollis scelerisque, risus.",
            "Aliquam sagittis massa sed pharetra condimentum. Praesent in metus suscipit.*",
        )
        .with_footnote(
            "*Praesent eget est maximus neque malesuada molestie in id nulla. \
             Mauris accumsan, libero eget placerat.",
        ),
        Card::new(
            "Donec porta, mauris et consectetur semper.",
            "Suspendisse potenti. Mauris in nulla rutrum, sodales felis id, commodo enim. \
             Morbi quis consectetur nibh. In a dolor.",
        )
        .with_link("Nam id lacus."),
        Card::new(
            "Vestibulum mollis metus sit amet risus.",
            "Donec rutrum mi sed augue porta, sed tristique purus ullamcorper. \
             Vestibulum ante ipsum primis in.",
        )
        .with_link("Nam id lacus."),
        Card::new(
            "Vivamus porta vehicula lectus, a ultrices.",
            "Nunc sit amet placerat velit. Quisque facilisis neque est, ut ornare odio \
             facilisis nec. Ut turpis.",
        ),
    ]
}
