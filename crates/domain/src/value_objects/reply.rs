//! Replies returned to the assistant platform.
//!
//! Every handled request produces exactly one `Reply`: either plain text or
//! a list of rich cards rendered by the chat front-end.

use serde::{Deserialize, Serialize};

/// Reply for a request whose required parameters are missing.
pub const REPHRASE_TEXT: &str = "I apologize, but I couldn't understand your request. Could you please rephrase or provide more details?";

/// Title shared by every ticket tracking card.
pub const TICKET_DETAILS_TITLE: &str = "Here are the details of your ticket.";

/// Title of the canned fallback card.
pub const FALLBACK_TITLE: &str = "Oops! It seems I didn't quite understand your request. No worries, though! If you have any questions or need assistance with anything related to your travel plans, feel free to get in touch with us.";

/// Business contact lines on the canned fallback card.
pub const FALLBACK_LINES: [&str; 4] = [
    "Address: 601 Macpherson Road #01-08A, Grantral Mall @ Macpherson, Singapore 368242",
    "Email: enquiry@transtar.travel",
    "Phone: +65 6295 9009",
    "Our friendly team is here to assist you with any inquiries you may have. Don't hesitate to reach out, and we'll be happy to help you! 😊",
];

/// Rendering style of a rich card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Description,
    Info,
    List,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Description => "description",
            CardKind::Info => "info",
            CardKind::List => "list",
        }
    }
}

/// A single rich card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    pub subtitle: Option<String>,
    pub text: Vec<String>,
    pub image: Option<String>,
    pub action_link: Option<String>,
}

impl Card {
    pub fn new(kind: CardKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            subtitle: None,
            text: Vec::new(),
            image: None,
            action_link: None,
        }
    }

    pub fn description(title: impl Into<String>) -> Self {
        Self::new(CardKind::Description, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(CardKind::Info, title)
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.text.push(line.into());
        self
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Blank image URLs are dropped rather than rendered as broken images.
    pub fn with_image(mut self, url: Option<String>) -> Self {
        self.image = url.filter(|u| !u.trim().is_empty());
        self
    }

    pub fn with_action_link(mut self, url: impl Into<String>) -> Self {
        self.action_link = Some(url.into());
        self
    }
}

/// The one reply written for a webhook request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    PlainText { text: String },
    RichContent { cards: Vec<Card> },
}

impl Reply {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Reply::PlainText { text: text.into() }
    }

    pub fn rich(cards: Vec<Card>) -> Self {
        Reply::RichContent { cards }
    }

    /// The "please rephrase" reply for missing parameters.
    pub fn rephrase() -> Self {
        Self::plain_text(REPHRASE_TEXT)
    }

    /// The canned card with business contact details.
    pub fn fallback() -> Self {
        Self::rich(vec![
            Card::description(FALLBACK_TITLE).with_lines(FALLBACK_LINES)
        ])
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }

    pub fn is_plain_text(&self) -> bool {
        matches!(self, Reply::PlainText { .. })
    }

    /// Text of a plain reply, `None` for rich content.
    pub fn text(&self) -> Option<&str> {
        match self {
            Reply::PlainText { text } => Some(text),
            Reply::RichContent { .. } => None,
        }
    }

    /// Cards of a rich reply, empty for plain text.
    pub fn cards(&self) -> &[Card] {
        match self {
            Reply::PlainText { .. } => &[],
            Reply::RichContent { cards } => cards,
        }
    }
}
