//! Indexed storage for a line's section chain.
//!
//! Sections live in an arena of slots. Two maps index the arena by station:
//! `by_up` maps a station to the section leaving it, `by_down` to the section
//! arriving at it. Because a valid chain is a simple path, each station has at
//! most one entry in each map, so terminal and interior lookups are O(1).
//!
//! This module only stores and indexes. The rules deciding which edits are
//! legal live in [`Line`](super::Line); `SectionChain` assumes it is handed
//! edits that keep the path simple.

use std::collections::HashMap;
use std::iter::FusedIterator;

use super::{Section, Station, StationId};

/// Arena slot index.
type SlotIdx = usize;

#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct SectionChain {
    slots: Vec<Option<Section>>,
    free: Vec<SlotIdx>,
    by_up: HashMap<StationId, SlotIdx>,
    by_down: HashMap<StationId, SlotIdx>,
    first: Option<Station>,
    last: Option<Station>,
    len: usize,
}

impl SectionChain {
    /// Number of sections.
    pub(super) fn len(&self) -> usize {
        self.len
    }

    pub(super) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if any section touches the station.
    pub(super) fn contains(&self, station: &Station) -> bool {
        self.by_up.contains_key(&station.id()) || self.by_down.contains_key(&station.id())
    }

    /// Most upstream station.
    pub(super) fn first(&self) -> Option<&Station> {
        self.first.as_ref()
    }

    /// Most downstream station.
    pub(super) fn last(&self) -> Option<&Station> {
        self.last.as_ref()
    }

    /// Section leaving `station`, if any.
    pub(super) fn leaving(&self, station: &Station) -> Option<(SlotIdx, &Section)> {
        let idx = *self.by_up.get(&station.id())?;
        self.slots[idx].as_ref().map(|s| (idx, s))
    }

    /// Section arriving at `station`, if any.
    pub(super) fn arriving(&self, station: &Station) -> Option<(SlotIdx, &Section)> {
        let idx = *self.by_down.get(&station.id())?;
        self.slots[idx].as_ref().map(|s| (idx, s))
    }

    /// Start a chain from its first section.
    pub(super) fn seed(&mut self, section: Section) {
        debug_assert!(self.is_empty());
        self.first = Some(section.up().clone());
        self.last = Some(section.down().clone());
        self.insert(section);
    }

    /// Add a section ending at the current first station.
    pub(super) fn push_front(&mut self, section: Section) {
        debug_assert_eq!(self.first.as_ref(), Some(section.down()));
        self.first = Some(section.up().clone());
        self.insert(section);
    }

    /// Add a section starting at the current last station.
    pub(super) fn push_back(&mut self, section: Section) {
        debug_assert_eq!(self.last.as_ref(), Some(section.up()));
        self.last = Some(section.down().clone());
        self.insert(section);
    }

    /// Replace one section with a consecutive pair covering the same ends.
    pub(super) fn split(&mut self, idx: SlotIdx, head: Section, tail: Section) {
        self.remove(idx);
        self.insert(head);
        self.insert(tail);
    }

    /// Remove the section leaving the first station.
    pub(super) fn pop_front(&mut self) -> Option<Section> {
        let first = self.first.clone()?;
        let (idx, _) = self.leaving(&first)?;
        let removed = self.remove(idx)?;
        self.first = Some(removed.down().clone());
        Some(removed)
    }

    /// Remove the section arriving at the last station.
    pub(super) fn pop_back(&mut self) -> Option<Section> {
        let last = self.last.clone()?;
        let (idx, _) = self.arriving(&last)?;
        let removed = self.remove(idx)?;
        self.last = Some(removed.up().clone());
        Some(removed)
    }

    /// Replace two consecutive sections with their fusion.
    pub(super) fn fuse(&mut self, arriving: SlotIdx, leaving: SlotIdx, fused: Section) {
        self.remove(arriving);
        self.remove(leaving);
        self.insert(fused);
    }

    /// Sections in order from the first station.
    pub(super) fn iter(&self) -> Sections<'_> {
        Sections {
            chain: self,
            next: self.first.as_ref(),
            remaining: self.len,
        }
    }

    fn insert(&mut self, section: Section) -> SlotIdx {
        let up = section.up().id();
        let down = section.down().id();

        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(section);
                idx
            }
            None => {
                self.slots.push(Some(section));
                self.slots.len() - 1
            }
        };

        self.by_up.insert(up, idx);
        self.by_down.insert(down, idx);
        self.len += 1;
        idx
    }

    fn remove(&mut self, idx: SlotIdx) -> Option<Section> {
        let section = self.slots.get_mut(idx)?.take()?;

        if self.by_up.get(&section.up().id()) == Some(&idx) {
            self.by_up.remove(&section.up().id());
        }
        if self.by_down.get(&section.down().id()) == Some(&idx) {
            self.by_down.remove(&section.down().id());
        }

        self.free.push(idx);
        self.len -= 1;
        Some(section)
    }
}

/// Iterator over a chain's sections from upstream to downstream.
pub struct Sections<'a> {
    chain: &'a SectionChain,
    next: Option<&'a Station>,
    remaining: usize,
}

impl<'a> Iterator for Sections<'a> {
    type Item = &'a Section;

    fn next(&mut self) -> Option<&'a Section> {
        if self.remaining == 0 {
            return None;
        }
        let chain: &'a SectionChain = self.chain;
        let (_, section) = chain.leaving(self.next?)?;
        self.next = Some(section.down());
        self.remaining -= 1;
        Some(section)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// A simple path visits every section once, so `remaining` is exact.
impl ExactSizeIterator for Sections<'_> {}

impl FusedIterator for Sections<'_> {}
