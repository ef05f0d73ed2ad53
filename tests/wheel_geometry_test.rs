use lunch_spinner::core::geometry::{
    rotation_with_revolutions, segment_center, segment_under_pointer, target_delta, FULL_TURN,
};
use lunch_spinner::core::layout::wheel_layout;
use lunch_spinner::core::selector::pick_with_draw;
use lunch_spinner::core::spinner::{SpinRequest, Spinner};
use lunch_spinner::{DietaryFilters, Item, Roster};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_forced_draw_scenario() {
    let items = vec![Item::new("a", "A", 1), Item::new("b", "B", 3)];
    let winner = pick_with_draw(&items, 2.5).unwrap();
    assert_eq!(items[winner].name, "B");
}

#[test]
fn test_four_segment_wheel_lands_second_segment_under_pointer() {
    assert_eq!(segment_center(1, 4).unwrap(), 135.0);

    let delta = target_delta(1, 4, 5).unwrap();
    assert_eq!(delta.rem_euclid(FULL_TURN), 135.0);
    assert_eq!(segment_under_pointer(delta, 4).unwrap(), 1);

    let next = rotation_with_revolutions(720.0, 1, 4, 5).unwrap();
    assert_eq!(next, 720.0 + delta);
}

/// 每一次旋轉的增量都讓指針停在當次的得主上
#[test]
fn test_each_spin_delta_points_at_its_winner() {
    let roster = Roster::with_defaults();
    let items = roster.items(&DietaryFilters::default());
    let mut spinner = Spinner::default();
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..50 {
        let before = spinner.rotation();
        let result = match spinner.request_spin(&items, &mut rng).unwrap() {
            SpinRequest::Started(result) => result,
            other => panic!("expected a started spin, got {:?}", other),
        };
        spinner.finish();

        let delta = result.final_rotation - before;
        assert!(delta > 4.0 * FULL_TURN);
        assert!(delta < 8.0 * FULL_TURN);
        assert_eq!(
            segment_under_pointer(delta, items.len()).unwrap(),
            result.winner_index
        );
    }
}

#[test]
fn test_layout_matches_roster_order() {
    let items = Roster::with_defaults().items(&DietaryFilters::default());
    let layout = wheel_layout(&items).unwrap();

    assert_eq!(layout.len(), 8);
    for (segment, item) in layout.iter().zip(&items) {
        assert_eq!(segment.item_id, item.id);
        assert!((segment.end_angle - segment.start_angle - 45.0).abs() < 1e-9);
    }
    assert_eq!(layout[6].label, "Mediterrane…");
}
