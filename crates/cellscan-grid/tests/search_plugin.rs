//! End-to-end behavior of the search plugin hosted by `Grid`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use cellscan_grid::{
    CellValue, CellVisit, DisablePolicy, Grid, GridHandle, GridSettings, QueryOptions,
    SettingsUpdate, DEFAULT_CALLBACK, DEFAULT_QUERY_METHOD, DEFAULT_SEARCH_RESULT_CLASS,
};

mod common {
    use super::*;

    pub(super) fn search_grid() -> Grid {
        Grid::sample(5, 5, GridSettings::default().with_search(true))
    }

    pub(super) fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    /// Coordinates of every cell carrying `class` after the last render.
    pub(super) fn decorated(grid: &Grid, class: &str) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..grid.row_count() {
            for col in 0..grid.col_count() {
                if grid.cell(row, col).is_some_and(|c| c.has_class(class)) {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    pub(super) fn row(index: usize) -> Vec<(usize, usize)> {
        (0..5).map(|col| (index, col)).collect()
    }
}

use common::{counter, decorated, row, search_grid};

mod enabling {
    use super::*;

    #[test]
    fn test_exposes_search_when_enabled() {
        let mut grid = search_grid();
        assert!(grid.search().is_some());
    }

    #[test]
    fn test_no_search_when_disabled() {
        let mut grid = Grid::sample(5, 5, GridSettings::default().with_search(false));
        assert!(grid.search().is_none());
    }

    #[test]
    fn test_disabled_by_default() {
        let mut grid = Grid::sample(5, 5, GridSettings::default());
        assert!(grid.search().is_none());
        assert!(!grid.has_search());
    }

    #[test]
    fn test_disable_with_update_settings() {
        let mut grid = search_grid();
        assert!(grid.search().is_some());

        grid.update_settings(SettingsUpdate::search(false));

        assert!(grid.search().is_none());
    }

    #[test]
    fn test_enable_with_update_settings() {
        let mut grid = Grid::sample(5, 5, GridSettings::default());
        assert!(grid.search().is_none());

        grid.update_settings(SettingsUpdate::search(true));

        assert!(grid.search().is_some());
    }

    #[test]
    fn test_repeated_toggling_leaves_one_hook() {
        let mut grid = Grid::sample(5, 5, GridSettings::default());
        let hooks = grid.hooks();

        for _ in 0..3 {
            grid.update_settings(SettingsUpdate::search(true));
            grid.update_settings(SettingsUpdate::search(true));
            assert_eq!(hooks.count_for("search"), 1);

            grid.update_settings(SettingsUpdate::search(false));
            grid.update_settings(SettingsUpdate::search(false));
            assert_eq!(hooks.count(), 0);
        }
    }

    #[test]
    fn test_settings_subscribers_see_toggles() {
        let mut grid = Grid::sample(2, 2, GridSettings::default());
        let mut rx = grid.subscribe_settings();

        grid.update_settings(SettingsUpdate::search(true));

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().search);
        assert!(grid.settings().search);
    }

    #[test]
    fn test_reset_policy_forgets_custom_defaults() {
        let mut grid = search_grid();
        grid.search()
            .unwrap()
            .set_default_query_method(|_, _| true);

        grid.update_settings(SettingsUpdate::search(false));
        grid.update_settings(SettingsUpdate::search(true));

        // Built-in method again: "zzz" matches nothing
        assert!(grid.search().unwrap().query("zzz").is_empty());
    }

    #[test]
    fn test_preserve_policy_keeps_custom_defaults() {
        let settings = GridSettings::default()
            .with_search(true)
            .with_disable_policy(DisablePolicy::Preserve);
        let mut grid = Grid::sample(5, 5, settings);
        grid.search()
            .unwrap()
            .set_default_query_method(|_, _| true);

        grid.update_settings(SettingsUpdate::search(false));
        assert!(grid.search().is_none());
        grid.update_settings(SettingsUpdate::search(true));

        assert_eq!(grid.search().unwrap().query("zzz").len(), 25);
    }
}

mod query_method {
    use super::*;

    #[test]
    fn test_uses_builtin_query_method_by_default() {
        let mut grid = search_grid();
        let mut search = grid.search().unwrap();

        let method = search.default_query_method();
        assert!(method.matches("a", &CellValue::from("A0")));
        assert!(!method.matches("A*", &CellValue::from("A0")));

        assert_eq!(search.query("A").len(), 5);
    }

    #[test]
    fn test_uses_custom_default_query_method() {
        let calls = counter();
        let seen = calls.clone();

        let mut grid = search_grid();
        let mut search = grid.search().unwrap();
        search.set_default_query_method(move |_, _| {
            seen.fetch_add(1, Ordering::SeqCst);
            false
        });

        search.query("A");

        assert_eq!(calls.load(Ordering::SeqCst), 25);
    }

    #[test]
    fn test_uses_method_passed_to_query() {
        let default_calls = counter();
        let call_calls = counter();
        let (d, c) = (default_calls.clone(), call_calls.clone());

        let mut grid = search_grid();
        let mut search = grid.search().unwrap();
        search.set_default_query_method(move |_, _| {
            d.fetch_add(1, Ordering::SeqCst);
            false
        });

        let options = QueryOptions::new().query_method(move |_, _| {
            c.fetch_add(1, Ordering::SeqCst);
            false
        });
        search.query_with("A", options);

        assert_eq!(call_calls.load(Ordering::SeqCst), 25);
        assert_eq!(default_calls.load(Ordering::SeqCst), 0);

        // The per-call method did not replace the default
        search.query("A");
        assert_eq!(default_calls.load(Ordering::SeqCst), 25);
    }
}

mod default_query_method {
    use super::*;

    #[test]
    fn test_default_query_method_runs_once_per_cell() {
        let calls = counter();
        let seen = calls.clone();
        let options = QueryOptions::new().query_method(move |phrase: &str, value: &CellValue| {
            seen.fetch_add(1, Ordering::SeqCst);
            DEFAULT_QUERY_METHOD(phrase, value)
        });

        let mut grid = search_grid();
        let mut search = grid.search().unwrap();
        let counted = search.query_with("A", options);
        let plain = search.query("A");

        assert_eq!(calls.load(Ordering::SeqCst), 25);
        assert_eq!(counted, plain);
    }

    #[test]
    fn test_finds_phrase() {
        let mut grid = search_grid();
        let result = grid.search().unwrap().query("A");

        assert_eq!(result.len(), 5);
        for (i, m) in result.iter().enumerate() {
            assert_eq!(m.row, i);
            assert_eq!(m.col, 0);
            assert_eq!(m.data, grid.data_at_cell(i, 0));
        }
    }

    #[test]
    fn test_case_insensitive() {
        let mut grid = search_grid();
        let mut search = grid.search().unwrap();

        assert_eq!(search.query("a").len(), 5);
        assert_eq!(search.query("A").len(), 5);
    }

    #[test]
    fn test_query_is_literal_not_pattern() {
        let mut grid = search_grid();
        assert!(grid.search().unwrap().query("A*").is_empty());
    }

    #[test]
    fn test_single_match_scenario() {
        let letters = ["A", "B", "C", "D", "E"];
        let data = letters
            .iter()
            .enumerate()
            .map(|(r, letter)| {
                let mut cells = vec![CellValue::from(*letter)];
                cells.extend((1..5).map(|c| CellValue::from(format!("x{}{}", r, c))));
                cells
            })
            .collect();
        let mut grid = Grid::new(data, GridSettings::default().with_search(true)).unwrap();

        let result = grid.search().unwrap().query("A");

        assert_eq!(result.len(), 1);
        assert_eq!((result[0].row, result[0].col), (0, 0));
        assert_eq!(result[0].data, CellValue::from("A"));
    }

    #[test]
    fn test_numbers_match_display_form() {
        let data = vec![vec![CellValue::from(10.0), CellValue::from(2.5), CellValue::Empty]];
        let mut grid = Grid::new(data, GridSettings::default().with_search(true)).unwrap();

        let result = grid.search().unwrap().query("1");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].data, CellValue::Number(10.0));
        assert_eq!(grid.search().unwrap().query(".").len(), 1);
    }
}

mod search_callback {
    use super::*;

    #[test]
    fn test_invokes_default_callback_for_each_cell() {
        let mut grid = search_grid();
        grid.search().unwrap().query("A");

        for r in 0..5 {
            for c in 0..5 {
                assert!(grid.cell_meta(r, c).is_some(), "no meta at ({}, {})", r, c);
            }
        }
    }

    #[test]
    fn test_default_callback_runs_once_per_cell() {
        let calls = counter();
        let seen = calls.clone();
        let options = QueryOptions::new().callback(move |visit: &mut CellVisit<'_>| {
            seen.fetch_add(1, Ordering::SeqCst);
            DEFAULT_CALLBACK(visit)
        });

        let mut grid = search_grid();
        grid.search().unwrap().query_with("A", options);

        assert_eq!(calls.load(Ordering::SeqCst), 25);
        for r in 0..5 {
            for c in 0..5 {
                let flagged = grid.cell_meta(r, c).is_some_and(|m| m.is_search_result);
                assert_eq!(flagged, c == 0, "flag at ({}, {})", r, c);
            }
        }
    }

    #[test]
    fn test_change_default_callback() {
        let calls = counter();
        let seen = calls.clone();

        let mut grid = search_grid();
        let mut search = grid.search().unwrap();
        search.set_default_callback(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        search.query("A");

        assert_eq!(calls.load(Ordering::SeqCst), 25);
        // The built-in callback never ran
        for r in 0..5 {
            for c in 0..5 {
                assert!(grid.cell_meta(r, c).is_none());
            }
        }
    }

    #[test]
    fn test_invokes_custom_callback_for_each_tested_cell() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = calls.clone();
        let options = QueryOptions::new().callback(move |visit: &mut CellVisit<'_>| {
            recorded.lock().push((
                visit.host().row_count(),
                visit.row(),
                visit.col(),
                visit.value().clone(),
                visit.is_match(),
            ));
        });

        let mut grid = search_grid();
        grid.search().unwrap().query_with("A", options);

        let calls = calls.lock();
        assert_eq!(calls.len(), 25);
        for r in 0..5 {
            for c in 0..5 {
                let (rows, row, col, value, is_match) = &calls[r * 5 + c];
                assert_eq!(*rows, 5);
                assert_eq!((*row, *col), (r, c));
                assert_eq!(*value, grid.data_at_cell(r, c));
                assert_eq!(*is_match, c == 0);
            }
        }
    }

    #[test]
    fn test_default_callback_flags_matched_cells() {
        let mut grid = search_grid();
        grid.search().unwrap().query("1");

        for r in 0..5 {
            for c in 0..5 {
                let flagged = grid.cell_meta(r, c).is_some_and(|m| m.is_search_result);
                assert_eq!(flagged, r == 1, "cell ({}, {})", r, c);
            }
        }
    }

    #[test]
    fn test_new_query_overwrites_flags() {
        let mut grid = search_grid();
        grid.search().unwrap().query("1");
        grid.search().unwrap().query("C");

        for r in 0..5 {
            for c in 0..5 {
                let flagged = grid.cell_meta(r, c).is_some_and(|m| m.is_search_result);
                assert_eq!(flagged, c == 2, "cell ({}, {})", r, c);
            }
        }
    }
}

mod search_result_decorator {
    use super::*;

    #[test]
    fn test_adds_default_class_to_matches() {
        let mut grid = search_grid();
        grid.search().unwrap().query("1");

        grid.render();

        assert_eq!(decorated(&grid, DEFAULT_SEARCH_RESULT_CLASS), row(1));
    }

    #[test]
    fn test_adds_custom_class_to_matches() {
        let settings = GridSettings::default()
            .with_search(true)
            .with_search_result_class("customSearchResultClass");
        let mut grid = Grid::sample(5, 5, settings);
        grid.search().unwrap().query("1");

        grid.render();

        assert_eq!(decorated(&grid, "customSearchResultClass"), row(1));
        assert!(decorated(&grid, DEFAULT_SEARCH_RESULT_CLASS).is_empty());
    }

    #[test]
    fn test_rerender_after_new_query_moves_class() {
        let mut grid = search_grid();
        grid.search().unwrap().query("1");
        grid.render();
        grid.search().unwrap().query("3");
        grid.render();
        grid.render();

        assert_eq!(decorated(&grid, DEFAULT_SEARCH_RESULT_CLASS), row(3));
    }

    #[test]
    fn test_class_change_through_settings() {
        let mut grid = search_grid();
        grid.search().unwrap().query("1");
        grid.render();

        grid.update_settings(SettingsUpdate::search_result_class("hit"));
        grid.render();

        assert_eq!(decorated(&grid, "hit"), row(1));
        assert!(decorated(&grid, DEFAULT_SEARCH_RESULT_CLASS).is_empty());
        assert_eq!(grid.search().unwrap().search_result_class(), "hit");
    }

    #[test]
    fn test_clearing_class_setting_restores_default() {
        let mut grid = search_grid();
        grid.search().unwrap().query("1");
        grid.update_settings(SettingsUpdate::search_result_class("hit"));
        grid.render();

        grid.update_settings(SettingsUpdate::clear_search_result_class());
        grid.render();

        assert!(grid.settings().search_result_class.is_none());
        assert_eq!(decorated(&grid, DEFAULT_SEARCH_RESULT_CLASS), row(1));
        assert!(decorated(&grid, "hit").is_empty());
        assert_eq!(
            grid.search().unwrap().search_result_class(),
            DEFAULT_SEARCH_RESULT_CLASS
        );
    }

    #[test]
    fn test_class_change_through_handle() {
        let mut grid = search_grid();
        let mut search = grid.search().unwrap();
        search.query("2");
        search.set_search_result_class("found");

        grid.render();

        assert_eq!(decorated(&grid, "found"), row(2));
    }

    #[test]
    fn test_disabled_plugin_does_not_decorate() {
        let mut grid = search_grid();
        grid.search().unwrap().query("1");
        grid.update_settings(SettingsUpdate::search(false));

        grid.render();

        assert!(decorated(&grid, DEFAULT_SEARCH_RESULT_CLASS).is_empty());
    }
}
