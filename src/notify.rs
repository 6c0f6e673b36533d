use std::time::Duration;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);
pub const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: Option<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            title: title.into(),
            description,
        });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    /// Returns whether a toast was removed; dismissing twice is a no-op.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        before != self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Mensaje enviado", None);
        let b = queue.push(ToastKind::Error, "Error", Some("offline".to_string()));
        assert_ne!(a, b);
        assert_eq!(queue.items().len(), 2);

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
        assert_eq!(queue.items()[0].description.as_deref(), Some("offline"));
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut queue = ToastQueue::default();
        let ids: Vec<u64> = (0..5)
            .map(|i| queue.push(ToastKind::Success, format!("toast {i}"), None))
            .collect();
        let kept: Vec<u64> = queue.items().iter().map(|t| t.id).collect();
        assert_eq!(kept, &ids[2..]);
    }

    #[test]
    fn test_ids_not_reused() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "a", None);
        queue.dismiss(a);
        let b = queue.push(ToastKind::Success, "b", None);
        assert!(b > a);
    }
}
