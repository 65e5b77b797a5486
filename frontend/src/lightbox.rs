use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub src: &'static str,
    pub alt: &'static str,
    /// Unique within one gallery, doubles as the tile key.
    pub caption: &'static str,
}

/// Moves `index` by `delta` positions around a ring of `len` slots.
/// Rings of zero or one slot never move.
pub fn step_index(index: usize, delta: isize, len: usize) -> usize {
    if len <= 1 {
        return index;
    }
    let len = len as isize;
    ((index as isize + delta).rem_euclid(len)) as usize
}

#[derive(Debug, Clone, PartialEq)]
pub enum LightboxAction {
    Open { items: &'static [GalleryItem], index: usize },
    Next,
    Prev,
    Close,
}

/// Maps a `KeyboardEvent.key` to the action it triggers while the lightbox is
/// open.
pub fn key_action(key: &str) -> Option<LightboxAction> {
    match key {
        "ArrowLeft" => Some(LightboxAction::Prev),
        "ArrowRight" => Some(LightboxAction::Next),
        "Escape" => Some(LightboxAction::Close),
        _ => None,
    }
}

/// `open_index` is either `None` or a valid index into `items`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightboxState {
    items: &'static [GalleryItem],
    open_index: Option<usize>,
}

impl LightboxState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open_index.is_some()
    }

    #[cfg(test)]
    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    pub fn active(&self) -> Option<&'static GalleryItem> {
        self.open_index.and_then(|index| self.items.get(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Applies `action`, returning the next state. Invalid transitions leave
    /// the state as it was.
    pub fn apply(&self, action: LightboxAction) -> Self {
        match action {
            LightboxAction::Open { items, index } => {
                if index >= items.len() {
                    warn!("Ignoring lightbox open at {} of {} items", index, items.len());
                    return self.clone();
                }
                debug!("Lightbox opened at {}", items[index].caption);
                Self { items, open_index: Some(index) }
            }
            LightboxAction::Next => self.shift(1),
            LightboxAction::Prev => self.shift(-1),
            LightboxAction::Close => {
                if self.is_open() {
                    debug!("Lightbox closed");
                }
                Self::closed()
            }
        }
    }

    fn shift(&self, delta: isize) -> Self {
        match self.open_index {
            Some(index) => Self {
                items: self.items,
                open_index: Some(step_index(index, delta, self.items.len())),
            },
            None => self.clone(),
        }
    }
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &[GalleryItem] = &[
        GalleryItem { src: "/a.jpg", alt: "Reception", caption: "Reception" },
        GalleryItem { src: "/b.jpg", alt: "Operatory", caption: "Operatory" },
        GalleryItem { src: "/c.jpg", alt: "Sterilisation", caption: "Sterilisation" },
        GalleryItem { src: "/d.jpg", alt: "Waiting area", caption: "Waiting area" },
    ];

    const OTHER: &[GalleryItem] = &[
        GalleryItem { src: "/x.jpg", alt: "Scanner", caption: "Scanner" },
        GalleryItem { src: "/y.jpg", alt: "X-ray", caption: "X-ray" },
    ];

    const SINGLE: &[GalleryItem] = &[GalleryItem { src: "/s.jpg", alt: "Team", caption: "Team" }];

    fn open(items: &'static [GalleryItem], index: usize) -> LightboxState {
        LightboxState::closed().apply(LightboxAction::Open { items, index })
    }

    #[test]
    fn starts_closed() {
        let state = LightboxState::closed();
        assert!(!state.is_open());
        assert_eq!(state.active(), None);
    }

    #[test]
    fn next_n_times_returns_to_start() {
        for start in 0..ITEMS.len() {
            let mut state = open(ITEMS, start);
            for _ in 0..ITEMS.len() {
                state = state.apply(LightboxAction::Next);
            }
            assert_eq!(state.open_index(), Some(start));
        }
    }

    #[test]
    fn prev_then_next_is_identity() {
        for start in 0..ITEMS.len() {
            let state = open(ITEMS, start);
            let there_and_back = state.apply(LightboxAction::Prev).apply(LightboxAction::Next);
            assert_eq!(there_and_back, state);
            let back_and_there = state.apply(LightboxAction::Next).apply(LightboxAction::Prev);
            assert_eq!(back_and_there, state);
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(open(ITEMS, 0).apply(LightboxAction::Prev).open_index(), Some(3));
        assert_eq!(open(ITEMS, 3).apply(LightboxAction::Next).open_index(), Some(0));
    }

    #[test]
    fn single_item_does_not_move() {
        let state = open(SINGLE, 0);
        assert_eq!(state.apply(LightboxAction::Next), state);
        assert_eq!(state.apply(LightboxAction::Prev), state);
    }

    #[test]
    fn navigation_while_closed_is_a_no_op() {
        let closed = LightboxState::closed();
        assert_eq!(closed.apply(LightboxAction::Next), closed);
        assert_eq!(closed.apply(LightboxAction::Prev), closed);
    }

    #[test]
    fn close_discards_index_and_reopen_is_fresh() {
        let state = open(ITEMS, 2).apply(LightboxAction::Next);
        let closed = state.apply(LightboxAction::Close);
        assert_eq!(closed, LightboxState::closed());

        let reopened = closed.apply(LightboxAction::Open { items: OTHER, index: 1 });
        assert_eq!(reopened.open_index(), Some(1));
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.active().map(|item| item.caption), Some("X-ray"));
    }

    #[test]
    fn open_while_open_reassigns() {
        let state = open(ITEMS, 3).apply(LightboxAction::Open { items: OTHER, index: 0 });
        assert_eq!(state.active().map(|item| item.caption), Some("Scanner"));
    }

    #[test]
    fn out_of_range_open_is_rejected() {
        let closed = LightboxState::closed();
        assert_eq!(closed.apply(LightboxAction::Open { items: ITEMS, index: 4 }), closed);

        let state = open(ITEMS, 1);
        assert_eq!(state.apply(LightboxAction::Open { items: OTHER, index: 5 }), state);
        assert_eq!(closed.apply(LightboxAction::Open { items: &[], index: 0 }), closed);
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(key_action("ArrowLeft"), Some(LightboxAction::Prev));
        assert_eq!(key_action("ArrowRight"), Some(LightboxAction::Next));
        assert_eq!(key_action("Escape"), Some(LightboxAction::Close));
        assert_eq!(key_action("Enter"), None);
    }

    #[test]
    fn step_index_wraps_both_directions() {
        assert_eq!(step_index(0, -1, 3), 2);
        assert_eq!(step_index(2, 1, 3), 0);
        assert_eq!(step_index(1, 5, 3), 0);
        assert_eq!(step_index(0, 1, 0), 0);
    }
}
