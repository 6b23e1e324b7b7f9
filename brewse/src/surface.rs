//! Delegated interaction registry, rebuilt from scratch on every render.
//!
//! Rendering is the only authority on what is interactive. While drawing, the
//! UI registers rectangular zones (tagged with markers, linked to an explicit
//! parent) plus flat lists of click and key rules. The shell resolves raw
//! terminal events against the registry of the last completed frame, so hit
//! targets always match what is actually on screen.
//!
//! Click resolution mirrors event delegation: find the topmost zone under the
//! position, collect the markers of that zone and all its ancestors, then
//! fire every rule whose target appears in the chain (a rule without a target
//! matches any click) unless its ignore marker appears too. All matching
//! rules fire, in registration order.

use ratatui::layout::{Position, Rect};

use crate::events::AppEvent;
use crate::input::Key;

/// Tags attached to zones and matched against rule targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// One catalog grid cell, tagged with the item id
    ItemCell(u64),
    /// The retry control on the error and empty screens
    RepeatButton,
    /// Full-frame backdrop behind the detail overlay
    PopupWrapper,
    /// Interior of the detail popup
    PopupContent,
    /// Dismiss control on the popup border
    CloseIcon,
    /// The order button inside the popup
    MenuButton,
    /// Any order menu entry, primary or secondary
    MenuEntry,
    /// One primary order menu entry, tagged with its index
    MenuEntryAt(usize),
}

/// Handle to a registered zone, used to declare children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneId(usize);

#[derive(Debug, Clone, PartialEq)]
struct Zone {
    rect: Rect,
    markers: Vec<Marker>,
    parent: Option<ZoneId>,
}

#[derive(Debug, Clone, PartialEq)]
struct ClickRule {
    target: Option<Marker>,
    ignore: Option<Marker>,
    event: AppEvent,
}

#[derive(Debug, Clone, PartialEq)]
struct KeyRule {
    key: Key,
    event: AppEvent,
}

/// One frame's worth of zones and rules.
///
/// An instance is only ever valid for the frame that built it; the shell
/// replaces it wholesale after each successful draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interactions {
    zones: Vec<Zone>,
    click_rules: Vec<ClickRule>,
    key_rules: Vec<KeyRule>,
}

impl Interactions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone and return its handle.
    ///
    /// The parent link is explicit rather than geometric: a child overflowing
    /// its parent's rect (a menu dropping below its button) still chains
    /// through it during dispatch.
    pub fn zone(&mut self, parent: Option<ZoneId>, rect: Rect, markers: &[Marker]) -> ZoneId {
        let id = ZoneId(self.zones.len());
        self.zones.push(Zone {
            rect,
            markers: markers.to_vec(),
            parent,
        });
        id
    }

    /// Register a delegated click rule.
    ///
    /// `target` of None matches every click; `ignore` suppresses the rule
    /// when the marker appears anywhere in the hit chain.
    pub fn on_click(&mut self, target: Option<Marker>, ignore: Option<Marker>, event: AppEvent) {
        self.click_rules.push(ClickRule {
            target,
            ignore,
            event,
        });
    }

    pub fn on_key(&mut self, key: Key, event: AppEvent) {
        self.key_rules.push(KeyRule { key, event });
    }

    /// Resolve a click into the events of every matching rule, in
    /// registration order. A position outside all zones resolves to nothing.
    pub fn dispatch_click(&self, x: u16, y: u16) -> Vec<AppEvent> {
        let Some(hit) = self.hit_zone(x, y) else {
            return Vec::new();
        };
        let chain = self.marker_chain(hit);

        self.click_rules
            .iter()
            .filter(|rule| {
                let target_hit = rule.target.is_none_or(|marker| chain.contains(&marker));
                let ignore_hit = rule.ignore.is_some_and(|marker| chain.contains(&marker));
                target_hit && !ignore_hit
            })
            .map(|rule| rule.event.clone())
            .collect()
    }

    /// Resolve a key press into the events of every rule bound to that key,
    /// in registration order.
    pub fn dispatch_key(&self, key: Key) -> Vec<AppEvent> {
        self.key_rules
            .iter()
            .filter(|rule| rule.key == key)
            .map(|rule| rule.event.clone())
            .collect()
    }

    /// Rect of the first zone carrying `marker`, if any. Test harnesses use
    /// this to aim synthetic clicks.
    pub fn find_zone(&self, marker: Marker) -> Option<Rect> {
        self.zones
            .iter()
            .find(|zone| zone.markers.contains(&marker))
            .map(|zone| zone.rect)
    }

    /// The topmost zone under a position. Zones are registered in paint
    /// order, so the last containing zone is the one drawn on top.
    fn hit_zone(&self, x: u16, y: u16) -> Option<ZoneId> {
        self.zones
            .iter()
            .rposition(|zone| zone.rect.contains(Position { x, y }))
            .map(ZoneId)
    }

    /// Markers of the hit zone and every ancestor up to a root.
    fn marker_chain(&self, hit: ZoneId) -> Vec<Marker> {
        let mut chain = Vec::new();
        let mut current = Some(hit);
        while let Some(ZoneId(index)) = current {
            let zone = &self.zones[index];
            chain.extend_from_slice(&zone.markers);
            current = zone.parent;
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn all_matching_rules_fire_in_registration_order() {
        let mut ix = Interactions::new();
        let root = ix.zone(None, rect(0, 0, 40, 20), &[Marker::PopupWrapper]);
        ix.zone(Some(root), rect(2, 2, 6, 3), &[Marker::RepeatButton]);

        ix.on_click(Some(Marker::RepeatButton), None, AppEvent::RepeatDataLoading);
        ix.on_click(Some(Marker::PopupWrapper), None, AppEvent::DeselectItem);
        ix.on_click(None, None, AppEvent::SetMenu(false));

        let events = ix.dispatch_click(4, 3);
        assert_eq!(
            events,
            vec![
                AppEvent::RepeatDataLoading,
                AppEvent::DeselectItem,
                AppEvent::SetMenu(false),
            ]
        );
    }

    #[test]
    fn missing_target_matches_any_click() {
        let mut ix = Interactions::new();
        ix.zone(None, rect(0, 0, 10, 10), &[]);
        ix.on_click(None, None, AppEvent::SetMenu(false));

        assert_eq!(ix.dispatch_click(5, 5), vec![AppEvent::SetMenu(false)]);
    }

    #[test]
    fn ignore_marker_anywhere_in_the_chain_suppresses_the_rule() {
        let mut ix = Interactions::new();
        let wrapper = ix.zone(None, rect(0, 0, 40, 20), &[Marker::PopupWrapper]);
        let content = ix.zone(Some(wrapper), rect(10, 5, 20, 10), &[Marker::PopupContent]);
        ix.zone(Some(content), rect(12, 7, 5, 1), &[Marker::MenuButton]);

        ix.on_click(
            Some(Marker::PopupWrapper),
            Some(Marker::PopupContent),
            AppEvent::DeselectItem,
        );

        // Deep inside the content: the ignore marker sits mid-chain
        assert_eq!(ix.dispatch_click(13, 7), Vec::<AppEvent>::new());
        // On the backdrop: no ignore marker anywhere in the chain
        assert_eq!(ix.dispatch_click(1, 1), vec![AppEvent::DeselectItem]);
    }

    #[test]
    fn last_registered_zone_wins_the_hit_test() {
        let mut ix = Interactions::new();
        ix.zone(None, rect(0, 0, 20, 10), &[Marker::ItemCell(1)]);
        // Painted later over the same spot, so it occludes the cell
        ix.zone(None, rect(0, 0, 20, 10), &[Marker::PopupWrapper]);

        ix.on_click(Some(Marker::ItemCell(1)), None, AppEvent::SetMenu(true));
        ix.on_click(Some(Marker::PopupWrapper), None, AppEvent::DeselectItem);

        assert_eq!(ix.dispatch_click(5, 5), vec![AppEvent::DeselectItem]);
    }

    #[test]
    fn child_overflowing_its_parent_still_chains_through_it() {
        let mut ix = Interactions::new();
        let button = ix.zone(None, rect(5, 5, 8, 3), &[Marker::MenuButton]);
        // The menu drops below the button, completely outside its rect
        ix.zone(Some(button), rect(5, 8, 8, 3), &[Marker::MenuEntry]);

        ix.on_click(Some(Marker::MenuButton), None, AppEvent::SetMenu(true));

        assert_eq!(ix.dispatch_click(6, 9), vec![AppEvent::SetMenu(true)]);
    }

    #[test]
    fn click_outside_every_zone_resolves_to_nothing() {
        let mut ix = Interactions::new();
        ix.zone(None, rect(0, 0, 10, 10), &[]);
        ix.on_click(None, None, AppEvent::DeselectItem);

        assert_eq!(ix.dispatch_click(30, 30), Vec::<AppEvent>::new());
    }

    #[test]
    fn key_rules_fire_only_for_their_key() {
        let mut ix = Interactions::new();
        ix.on_key(Key::Esc, AppEvent::DeselectItem);
        ix.on_key(Key::Esc, AppEvent::SetMenu(false));
        ix.on_key(Key::Enter, AppEvent::SetMenu(true));

        assert_eq!(
            ix.dispatch_key(Key::Esc),
            vec![AppEvent::DeselectItem, AppEvent::SetMenu(false)]
        );
        assert_eq!(ix.dispatch_key(Key::Char('x')), Vec::<AppEvent>::new());
    }

    #[test]
    fn a_fresh_registry_dispatches_nothing() {
        let ix = Interactions::new();
        assert_eq!(ix.dispatch_click(0, 0), Vec::<AppEvent>::new());
        assert_eq!(ix.dispatch_key(Key::Esc), Vec::<AppEvent>::new());
    }
}
