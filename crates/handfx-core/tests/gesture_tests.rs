mod common;

use common::*;
use handfx_core::gesture::classify_fingers;
use handfx_core::hand::LANDMARKS_PER_HAND;
use handfx_core::{classify, FingerState, FxError, Gesture, Hand, Landmark};

#[test]
fn empty_hand_list_is_no_hands() {
    assert_eq!(classify(&[]), Gesture::NoHands);
}

#[test]
fn any_hand_is_never_no_hands() {
    for bits in 0u8..32 {
        let f = fingers(
            bits & 1 != 0,
            bits & 2 != 0,
            bits & 4 != 0,
            bits & 8 != 0,
            bits & 16 != 0,
        );
        assert_ne!(classify(&[hand_with(f)]), Gesture::NoHands, "bits={bits:05b}");
    }
}

#[test]
fn all_tips_above_joints_is_open_hand() {
    assert_eq!(classify(&[open_hand()]), Gesture::OpenHand);
}

#[test]
fn all_tips_below_joints_is_fist() {
    assert_eq!(classify(&[fist()]), Gesture::Fist);
}

#[test]
fn named_shapes() {
    assert_eq!(classify(&[peace()]), Gesture::Peace);
    assert_eq!(
        classify(&[hand_with(fingers(false, true, false, false, false))]),
        Gesture::Pointing
    );
    assert_eq!(
        classify(&[hand_with(fingers(true, true, false, false, false))]),
        Gesture::ThumbsUp
    );
}

#[test]
fn unnamed_shapes_report_finger_count() {
    // a lone thumb is not pointing
    assert_eq!(
        classify(&[hand_with(fingers(true, false, false, false, false))]),
        Gesture::Fingers(1)
    );
    assert_eq!(
        classify(&[hand_with(fingers(false, true, false, false, true))]),
        Gesture::Fingers(2)
    );
    assert_eq!(
        classify(&[hand_with(fingers(false, true, true, true, false))]),
        Gesture::Fingers(3)
    );
    assert_eq!(
        classify(&[hand_with(fingers(false, true, true, true, true))]),
        Gesture::Fingers(4)
    );
}

#[test]
fn only_the_first_hand_is_classified() {
    assert_eq!(classify(&[fist(), open_hand()]), Gesture::Fist);
    assert_eq!(classify(&[open_hand(), fist()]), Gesture::OpenHand);
}

#[test]
fn classification_is_deterministic() {
    let hands = [peace()];
    let first = classify(&hands);
    for _ in 0..10 {
        assert_eq!(classify(&hands), first);
    }
}

#[test]
fn finger_state_reads_tip_against_joint() {
    let f = FingerState::of(&peace());
    assert_eq!(f, fingers(false, true, true, false, false));
    assert_eq!(f.extended_count(), 2);
    assert_eq!(classify_fingers(f), Gesture::Peace);
}

#[test]
fn tip_level_with_joint_is_not_extended() {
    let mut points = [Landmark::new(0.5, 0.5, 0.0); LANDMARKS_PER_HAND];
    points[8].y = 0.5;
    points[5].y = 0.5;
    let f = FingerState::of(&Hand::new(points));
    assert!(!f.index);
    assert_eq!(f.extended_count(), 0);
}

#[test]
fn labels_match_hud_text() {
    assert_eq!(Gesture::NoHands.label(), "NO HANDS DETECTED");
    assert_eq!(Gesture::Fist.label(), "FIST");
    assert_eq!(Gesture::Pointing.label(), "POINTING");
    assert_eq!(Gesture::Peace.label(), "PEACE");
    assert_eq!(Gesture::OpenHand.label(), "OPEN HAND");
    assert_eq!(Gesture::ThumbsUp.label(), "THUMBS UP");
    assert_eq!(Gesture::Fingers(3).label(), "3 FINGERS");
}

#[test]
fn hand_requires_exactly_21_landmarks() {
    let short = vec![Landmark::default(); 20];
    assert_eq!(
        Hand::from_landmarks(&short),
        Err(FxError::LandmarkCount {
            expected: 21,
            found: 20
        })
    );
    let full = vec![Landmark::default(); 21];
    assert!(Hand::from_landmarks(&full).is_ok());
}
