mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn cell_rect_copy_and_equality() {
        let r = CellRect {
            x: 10,
            y: 0,
            width: 8,
            height: 6,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn window_id_display() {
        let id = WindowId::new("notes");
        assert_eq!(id.to_string(), "notes");
        assert_eq!(id.as_str(), "notes");
    }

    #[test]
    fn window_id_from_relative_joins_components() {
        let id = WindowId::from_relative(Path::new("a/b")).unwrap();
        assert_eq!(id.as_str(), "a/b");

        let id = WindowId::from_relative(Path::new("./a")).unwrap();
        assert_eq!(id.as_str(), "a");
    }

    #[test]
    fn window_id_from_empty_relative_is_none() {
        assert!(WindowId::from_relative(Path::new("")).is_none());
        assert!(WindowId::from_relative(Path::new(".")).is_none());
    }

    #[test]
    fn window_id_orders_lexicographically() {
        let mut ids = vec![WindowId::new("b"), WindowId::new("a/c"), WindowId::new("a")];
        ids.sort();
        let names: Vec<&str> = ids.iter().map(|i| i.as_str()).collect();
        assert_eq!(names, ["a", "a/c", "b"]);
    }

    #[test]
    fn window_id_is_within() {
        let a = WindowId::new("a");
        assert!(WindowId::new("a").is_within(&a));
        assert!(WindowId::new("a/b").is_within(&a));
        assert!(!WindowId::new("ab").is_within(&a));
        assert!(!WindowId::new("b/a").is_within(&a));
    }

    #[test]
    fn window_id_serialization() {
        let id = WindowId::new("a/b");
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: WindowId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn scope_display() {
        assert_eq!(Scope::Root.to_string(), "root");
        assert_eq!(Scope::Window.to_string(), "window");
    }
}
