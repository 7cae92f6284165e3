/// Turns absolute pointer positions into the per-move deltas the carousel
/// consumes. Only the pointer that started the drag is tracked.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    active: Option<(i32, f32)>,
}

impl PointerTracker {
    pub fn begin(&mut self, pointer_id: i32, x: f32) -> bool {
        if self.active.is_some() || !x.is_finite() {
            return false;
        }
        self.active = Some((pointer_id, x));
        true
    }

    /// Delta since the previous position, or `None` for foreign pointers.
    pub fn update(&mut self, pointer_id: i32, x: f32) -> Option<f32> {
        let (id, last) = self.active.as_mut()?;
        if *id != pointer_id || !x.is_finite() {
            return None;
        }
        let delta = x - *last;
        *last = x;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        match self.active {
            Some((id, _)) if id == pointer_id => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_deltas_for_the_tracked_pointer_only() {
        let mut t = PointerTracker::default();
        assert!(t.begin(1, 100.0));
        assert!(!t.begin(2, 50.0));
        assert_eq!(t.update(1, 80.0), Some(-20.0));
        assert_eq!(t.update(2, 10.0), None);
        assert_eq!(t.update(1, 95.0), Some(15.0));
        assert!(!t.end(2));
        assert!(t.end(1));
        assert_eq!(t.update(1, 0.0), None);
    }
}
