/// One-way visibility flags for a fixed set of observed elements.
///
/// Elements are addressed by the index they had when the set was gathered.
/// A flag flips to visible on the first qualifying intersection and never
/// flips back, no matter what the observer reports afterwards.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    visible: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            visible: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Feed one intersection sample. Returns `true` only when this sample is
    /// the one that made the element visible; callers write the class then.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        self.mark(index)
    }

    /// Force an element visible (used for above-the-fold content on load).
    pub fn mark(&mut self, index: usize) -> bool {
        match self.visible.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}
