/// Stateless skip-to-content affordance: one activation target that moves
/// focus to the carousel landmark. It exchanges no data with the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipLink {
    pub label: String,
    pub target: String,
}

impl Default for SkipLink {
    fn default() -> Self {
        Self {
            label: "Skip to image carousel".to_string(),
            target: "carousel-region".to_string(),
        }
    }
}

/// Which surface keyboard input is routed to. The carousel holds focus by
/// default; Tab cycles between it and the skip link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    SkipLink,
    #[default]
    Carousel,
}

impl FocusTarget {
    pub fn toggled(self) -> Self {
        match self {
            FocusTarget::SkipLink => FocusTarget::Carousel,
            FocusTarget::Carousel => FocusTarget::SkipLink,
        }
    }
}
