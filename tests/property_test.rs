//! Property-based tests for the playback controller.

mod common;

use common::{Harness, catalog_of};
use proptest::prelude::*;
use std::sync::Arc;

// ===== Helpers =====

fn ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("song-{i}")).collect()
}

fn harness_with(n: usize) -> Harness {
    let ids = ids(n);
    let refs = ids.iter().map(String::as_str).collect::<Vec<_>>();
    Harness::new(catalog_of(&refs))
}

fn current_idx(h: &Harness) -> usize {
    let id = h.current_id().unwrap();
    h.player.catalog().position(&id).unwrap()
}

// ===== Property Tests =====

proptest! {
    /// Property: N skips forward over an N-song catalog land on the start
    #[test]
    fn full_lap_returns_to_start(n in 1usize..12, start in 0usize..12) {
        let start = start % n;
        let mut h = harness_with(n);
        h.play(start);

        for _ in 0..n {
            h.player.next_song();
        }
        prop_assert_eq!(current_idx(&h), start);

        for _ in 0..n {
            h.player.prev_song();
        }
        prop_assert_eq!(current_idx(&h), start);
    }

    /// Property: next then prev is the identity, in either order
    #[test]
    fn next_and_prev_cancel(n in 1usize..12, start in 0usize..12, steps in 0usize..30) {
        let start = start % n;
        let mut h = harness_with(n);
        h.play(start);

        for _ in 0..steps {
            h.player.next_song();
        }
        prop_assert_eq!(current_idx(&h), (start + steps) % n);

        for _ in 0..steps {
            h.player.prev_song();
        }
        prop_assert_eq!(current_idx(&h), start);
    }

    /// Property: a skip always leaves exactly one live instance
    #[test]
    fn at_most_one_live_instance(n in 1usize..6, ops in prop::collection::vec(0u8..4, 1..25)) {
        let mut h = harness_with(n);

        for op in ops {
            match op {
                0 => h.player.next_song(),
                1 => h.player.prev_song(),
                2 => h.player.pause_song(),
                _ => h.player.resume_song(),
            }
            h.player.pump_events();
            prop_assert!(h.engine.live() <= 1);
        }

        h.player.shutdown();
        prop_assert_eq!(h.engine.live(), 0);
    }

    /// Property: seeking sets progress to exactly the requested fraction
    #[test]
    fn seek_sets_progress(fraction in 0.0f64..=1.0) {
        let mut h = harness_with(3);
        h.play(0);

        h.player.seek(fraction);
        prop_assert_eq!(h.player.state().progress, fraction);
    }

    /// Property: volume changes touch nothing but volume
    #[test]
    fn volume_leaves_playback_alone(volume in 0.0f32..=1.0, playing in any::<bool>()) {
        let mut h = harness_with(3);
        h.play(1);
        if !playing {
            h.player.pause_song();
            h.player.pump_events();
        }
        let before = h.player.state().clone();

        h.player.set_volume(volume);
        h.player.pump_events();

        let after = h.player.state();
        prop_assert_eq!(after.volume, volume);
        prop_assert_eq!(after.is_playing, before.is_playing);
        prop_assert_eq!(after.progress, before.progress);
        prop_assert!(Arc::ptr_eq(
            after.current_song.as_ref().unwrap(),
            before.current_song.as_ref().unwrap()
        ));
    }

    /// Property: progress stays within [0, 1] whatever the engine reports
    #[test]
    fn polled_progress_is_bounded(
        position in 0u64..10_000,
        reported in proptest::option::of(0u64..1_000)
    ) {
        let mut h = harness_with(2);
        h.play(0);
        h.engine.set_position(std::time::Duration::from_secs(position));
        h.engine.set_reported_duration(reported.map(std::time::Duration::from_secs));

        h.player.poll_progress();
        let progress = h.player.state().progress;
        prop_assert!((0.0..=1.0).contains(&progress));
    }
}
