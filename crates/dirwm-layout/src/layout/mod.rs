mod calculation;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_empty_layout() {
        let engine = LayoutEngine::default();
        let result = engine.compute(Vec::<(u32, usize, usize)>::new());
        assert!(result.is_empty());
    }

    #[test]
    fn single_pane_at_origin() {
        let engine = LayoutEngine::default();
        let result = engine.compute([("a", 4, 6)]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].1.x, 0);
        assert_eq!(result[0].1.y, 0);
        assert_eq!(result[0].1.width, 4);
        assert_eq!(result[0].1.height, 6);
    }

    #[test]
    fn flow_packs_left_to_right() {
        let engine = LayoutEngine::default();
        let result = engine.compute([("a", 5, 5), ("b", 3, 6), ("c", 7, 4)]);
        let xs: Vec<usize> = result.iter().map(|(_, r)| r.x).collect();
        assert_eq!(xs, [0, 7, 12]);
        assert!(result.iter().all(|(_, r)| r.y == 0));
    }

    #[test]
    fn flow_keeps_input_order() {
        let engine = LayoutEngine::default();
        let result = engine.compute([("z", 1, 5), ("a", 1, 5)]);
        assert_eq!(result[0].0, "z");
        assert_eq!(result[1].0, "a");
    }

    #[test]
    fn gap_changes_step() {
        let engine = LayoutEngine { gap: 0 };
        let result = engine.compute([(1, 5, 5), (2, 3, 5), (3, 7, 5)]);
        let xs: Vec<usize> = result.iter().map(|(_, r)| r.x).collect();
        assert_eq!(xs, [0, 5, 8]);
    }

    #[test]
    fn compute_is_deterministic() {
        let engine = LayoutEngine::default();
        let input = [("a", 4, 6), ("b", 9, 5)];
        assert_eq!(engine.compute(input), engine.compute(input));
    }
}
