use thiserror::Error;

use crate::slide::SlideRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// Construction precondition: a carousel needs at least one slide.
    #[error("a carousel requires at least one slide")]
    EmptySequence,
    /// `go_to` target outside `[0, len)`. The transition is rejected and
    /// the active slide is left unchanged.
    #[error("slide index {index} is out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },
}

/// Ordered, non-empty sequence of slides. Emptiness is checked once at
/// construction so the index arithmetic below never divides by zero.
#[derive(Debug, Clone)]
pub struct SlideSequence {
    records: Vec<SlideRecord>,
}

impl SlideSequence {
    pub fn new(records: Vec<SlideRecord>) -> Result<Self, CarouselError> {
        if records.is_empty() {
            return Err(CarouselError::EmptySequence);
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideRecord> {
        self.records.iter()
    }
}

/// The carousel's presentation state: a slide sequence and the active
/// index. Every navigation surface (arrows, pagination, keyboard, swipe,
/// auto-advance) funnels into the three transitions below; rendering is a
/// read-only projection of this state and never mutates it.
#[derive(Debug)]
pub struct Carousel {
    slides: SlideSequence,
    current: usize,
}

impl Carousel {
    pub fn new(slides: SlideSequence) -> Self {
        Self { slides, current: 0 }
    }

    pub fn from_records(records: Vec<SlideRecord>) -> Result<Self, CarouselError> {
        Ok(Self::new(SlideSequence::new(records)?))
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &SlideSequence {
        &self.slides
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The active slide. The index invariant makes the lookup total.
    pub fn current(&self) -> &SlideRecord {
        &self.slides.records[self.current]
    }

    /// Moves to the next slide, wrapping past the end.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.slides.len();
    }

    /// Moves to the previous slide, wrapping before the start.
    pub fn retreat(&mut self) {
        self.current = (self.current + self.slides.len() - 1) % self.slides.len();
    }

    /// Jumps directly to `index`. Out-of-range targets are rejected and
    /// leave the active slide unchanged.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slides.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.current = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn records(n: usize) -> Vec<SlideRecord> {
        (0..n)
            .map(|i| SlideRecord::from_source(format!("img-{i}.jpg")))
            .collect()
    }

    fn carousel(n: usize) -> Carousel {
        Carousel::from_records(records(n)).expect("non-empty sequence")
    }

    #[test]
    fn empty_sequence_is_rejected_at_construction() {
        let err = Carousel::from_records(Vec::new()).expect_err("empty sequence");
        assert_eq!(err, CarouselError::EmptySequence);
    }

    #[test]
    fn starts_on_the_first_slide() {
        let c = carousel(3);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.current().source, "img-0.jpg");
    }

    #[test]
    fn advance_wraps_past_the_last_slide() {
        let mut c = carousel(3);
        c.advance();
        c.advance();
        assert_eq!(c.current_index(), 2);
        c.advance();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn retreat_wraps_before_the_first_slide() {
        let mut c = carousel(3);
        c.retreat();
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn single_slide_navigation_stays_put() {
        let mut c = carousel(1);
        c.advance();
        assert_eq!(c.current_index(), 0);
        c.retreat();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn go_to_selects_the_exact_slide() {
        let mut c = carousel(5);
        c.go_to(3).expect("index in range");
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.current().source, "img-3.jpg");
    }

    #[test]
    fn go_to_out_of_range_is_rejected_and_state_unchanged() {
        let mut c = carousel(3);
        c.go_to(1).expect("index in range");

        let err = c.go_to(3).expect_err("index out of range");
        assert_eq!(err, CarouselError::OutOfRange { index: 3, len: 3 });
        assert_eq!(c.current_index(), 1);

        let err = c.go_to(usize::MAX).expect_err("index out of range");
        assert_eq!(
            err,
            CarouselError::OutOfRange {
                index: usize::MAX,
                len: 3
            }
        );
        assert_eq!(c.current_index(), 1);
    }

    proptest! {
        /// advance then retreat is the identity, and vice versa, from any
        /// reachable state.
        #[test]
        fn advance_and_retreat_are_inverse(len in 1usize..32, start in 0usize..32) {
            let mut c = carousel(len);
            c.go_to(start % len).unwrap();
            let origin = c.current_index();

            c.advance();
            c.retreat();
            prop_assert_eq!(c.current_index(), origin);

            c.retreat();
            c.advance();
            prop_assert_eq!(c.current_index(), origin);
        }

        /// advance applied `len` times walks the full cycle back to the
        /// starting slide.
        #[test]
        fn full_cycle_returns_to_start(len in 1usize..32, start in 0usize..32) {
            let mut c = carousel(len);
            c.go_to(start % len).unwrap();
            let origin = c.current_index();

            for _ in 0..len {
                c.advance();
            }
            prop_assert_eq!(c.current_index(), origin);
        }

        /// Any in-range target is accepted and becomes the active slide.
        #[test]
        fn go_to_reaches_every_valid_index(len in 1usize..32, target in 0usize..32) {
            let mut c = carousel(len);
            let target = target % len;
            prop_assert!(c.go_to(target).is_ok());
            prop_assert_eq!(c.current_index(), target);
            prop_assert_eq!(c.current().source.as_str(), format!("img-{target}.jpg").as_str());
        }
    }
}
