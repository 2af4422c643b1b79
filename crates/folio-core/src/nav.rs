//! Header navigation: anchor scrolling and the mobile menu state machine.

pub const LABEL_OPEN: &str = "Open navigation menu";
pub const LABEL_CLOSE: &str = "Close navigation menu";

/// What a same-page link click should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Bare `#`: leave the click alone.
    Ignore,
    /// Prevent the default jump and, if `selector` resolves, scroll to it.
    ScrollTo { selector: &'a str },
}

pub fn anchor_action(href: &str) -> AnchorAction<'_> {
    if href == "#" {
        AnchorAction::Ignore
    } else {
        AnchorAction::ScrollTo { selector: href }
    }
}

/// Document scroll position that puts `target_offset_top` just below the
/// sticky header.
#[inline]
pub fn anchor_scroll_top(target_offset_top: f64, header_offset: f64) -> f64 {
    target_offset_top - header_offset
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEvent {
    ToggleClick,
    LinkClick,
    /// Click anywhere in the document outside the header.
    OutsideClick { viewport_width: f64 },
    Escape,
    Resize { viewport_width: f64 },
}

/// Attribute/class writes the front-end must perform after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavChange {
    Opened,
    Closed { focus_toggle: bool },
}

impl NavChange {
    pub fn is_open(&self) -> bool {
        matches!(self, NavChange::Opened)
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }

    pub fn aria_label(&self) -> &'static str {
        if self.is_open() {
            LABEL_CLOSE
        } else {
            LABEL_OPEN
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MobileNav {
    open: bool,
    breakpoint_px: f64,
}

impl MobileNav {
    pub fn new(breakpoint_px: f64) -> Self {
        Self {
            open: false,
            breakpoint_px,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Widths at or below the breakpoint use the collapsible menu.
    #[inline]
    pub fn is_mobile_width(&self, viewport_width: f64) -> bool {
        viewport_width <= self.breakpoint_px
    }

    pub fn handle(&mut self, event: NavEvent) -> Option<NavChange> {
        let change = match event {
            NavEvent::ToggleClick => {
                if self.open {
                    NavChange::Closed {
                        focus_toggle: false,
                    }
                } else {
                    NavChange::Opened
                }
            }
            NavEvent::LinkClick if self.open => NavChange::Closed {
                focus_toggle: false,
            },
            NavEvent::OutsideClick { viewport_width }
                if self.open && self.is_mobile_width(viewport_width) =>
            {
                NavChange::Closed {
                    focus_toggle: false,
                }
            }
            // always handled: focus returns to the toggle even if already closed
            NavEvent::Escape => NavChange::Closed { focus_toggle: true },
            NavEvent::Resize { viewport_width }
                if self.open && !self.is_mobile_width(viewport_width) =>
            {
                NavChange::Closed {
                    focus_toggle: false,
                }
            }
            _ => return None,
        };
        self.open = change.is_open();
        log::debug!("[nav] {:?} -> {:?}", event, change);
        Some(change)
    }
}
