//! Display surfaces that composed cards are attached to.

use crate::classifier::SignalClass;
use crate::composer::PresentationNode;
use crate::models::ReportHeader;
use serde::Serialize;

/// Anything cards can be attached to
pub trait DisplaySurface {
    /// Attach one card after the ones already attached
    fn attach(&mut self, node: PresentationNode);

    /// Record the header of the report the cards came from
    fn set_header(&mut self, _header: ReportHeader) {}
}

/// In-memory card container, rendered by [`crate::render`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CardDeck {
    pub header: ReportHeader,
    pub cards: Vec<PresentationNode>,
}

impl CardDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Count of cards per signal class
    pub fn summary(&self) -> SignalSummary {
        SignalSummary::from_nodes(&self.cards)
    }

    /// Drop cards whose signal strength is known and whose magnitude is
    /// below `min_strength`. Sell strengths are negative.
    pub fn retain_min_strength(&mut self, min_strength: f64) {
        self.cards.retain(|node| {
            node.record
                .signal_strength
                .is_none_or(|strength| strength.abs() >= min_strength)
        });
    }
}

impl DisplaySurface for CardDeck {
    fn attach(&mut self, node: PresentationNode) {
        self.cards.push(node);
    }

    fn set_header(&mut self, header: ReportHeader) {
        self.header = header;
    }
}

/// Number of cards in each signal class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SignalSummary {
    pub buy: usize,
    pub sell: usize,
    pub neutral: usize,
}

impl SignalSummary {
    pub fn from_nodes(nodes: &[PresentationNode]) -> Self {
        nodes
            .iter()
            .fold(Self::default(), |mut summary, node| {
                match node.classes.signal {
                    SignalClass::Buy => summary.buy += 1,
                    SignalClass::Sell => summary.sell += 1,
                    SignalClass::Neutral => summary.neutral += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.buy + self.sell + self.neutral
    }
}
