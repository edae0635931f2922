use crate::carousel::Carousel;
use crate::skip_link::{FocusTarget, SkipLink};
use crate::transition::Motion;

/// Pointer state the projection folds into the frame; purely cosmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hover {
    pub left_arrow: bool,
    pub right_arrow: bool,
}

/// Everything the draw layer paints for one frame, and everything an
/// assistive layer would read: a labeled carousel region, one visible
/// slide, and tab-like pagination with a selected entry. Built by
/// [`project`], a pure function of the carousel state; no part of the
/// frame survives into the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub region_label: &'static str,
    pub carousel_focused: bool,
    pub slides: Vec<SlideView>,
    pub tabs: Vec<TabView>,
    pub left_arrow: ArrowView,
    pub right_arrow: ArrowView,
    pub caption: Option<String>,
    /// Link of the active slide, shown alongside the caption when present.
    pub link: Option<String>,
    /// Position readout for the active slide ("Slide 2 of 5").
    pub status: String,
    /// Present only while the skip link holds focus, like a web skip link
    /// appearing on focus.
    pub skip_link: Option<SkipLink>,
    pub motion: Option<Motion>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub index: usize,
    /// Exactly one slide is visible per frame; hidden slides are skipped
    /// by the draw layer and by assistive tooling alike.
    pub visible: bool,
    /// 1-based position label for the slide's image role.
    pub label: String,
    pub alt: Option<String>,
}

/// Tab-like pagination entry: a selected/unselected state and a reference
/// to the slide it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabView {
    pub controls: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowView {
    pub label: &'static str,
    pub hovered: bool,
}

pub fn project(
    carousel: &Carousel,
    motion: Option<Motion>,
    hover: Hover,
    focus: FocusTarget,
    skip_link: &SkipLink,
) -> Frame {
    let len = carousel.len();
    let current = carousel.current_index();

    let slides: Vec<SlideView> = carousel
        .slides()
        .iter()
        .enumerate()
        .map(|(index, record)| SlideView {
            index,
            visible: index == current,
            label: format!("Slide {} of {}", index + 1, len),
            alt: record.alt.clone(),
        })
        .collect();

    // The status readout is the active slide's own position label.
    let status = slides[current].label.clone();

    let tabs = (0..len)
        .map(|index| TabView {
            controls: index,
            selected: index == current,
        })
        .collect();

    Frame {
        region_label: "Image carousel",
        carousel_focused: focus == FocusTarget::Carousel,
        slides,
        tabs,
        left_arrow: ArrowView {
            label: "Previous slide",
            hovered: hover.left_arrow,
        },
        right_arrow: ArrowView {
            label: "Next slide",
            hovered: hover.right_arrow,
        },
        caption: carousel.current().caption.clone(),
        link: carousel.current().link.clone(),
        status,
        skip_link: (focus == FocusTarget::SkipLink).then(|| skip_link.clone()),
        motion,
    }
}
