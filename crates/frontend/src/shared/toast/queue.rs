#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast--info",
            ToastKind::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered list of visible toasts, oldest first
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message });
        id
    }

    /// Removing an id that is already gone is a no-op
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_remove() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastKind::Info, "Category added successfully".into());
        let b = q.push(ToastKind::Error, "Unauthorized".into());
        assert_ne!(a, b);
        assert_eq!(q.items().len(), 2);

        q.remove(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].message, "Unauthorized");

        q.remove(a);
        assert_eq!(q.items().len(), 1);
    }

    #[test]
    fn test_ids_not_reused() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastKind::Info, "x".into());
        q.remove(a);
        let b = q.push(ToastKind::Info, "y".into());
        assert!(b > a);
    }
}
