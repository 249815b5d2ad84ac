//! End-to-end inference over the reference scenarios and random listings.

use proptest::prelude::*;
use rover_core::{Command, Position};
use rover_infer::{
    simulate, CandidateSet, Evaluation, InferConfig, InferenceResult, Inferrer,
    InstructionSequence, SlotMode,
};
use rover_test_utils::strategies::{
    arb_back_mode, arb_candidate_order, arb_command, arb_heading, arb_position, arb_sequence,
};
use rover_test_utils::{reference_scenarios, Scenario};

#[test]
fn reference_scenarios_sequential() {
    for scenario in reference_scenarios() {
        assert_eq!(
            scenario.run().unwrap(),
            scenario.expected,
            "scenario {}",
            scenario.name
        );
    }
}

#[test]
fn reference_scenarios_parallel() {
    for scenario in reference_scenarios() {
        for workers in [1, 2, 4] {
            let mut config = scenario.config.clone();
            config.evaluation = Evaluation::Parallel { workers };
            let parallel = scenario.clone().with_config(config);
            assert_eq!(
                parallel.run().unwrap(),
                scenario.expected,
                "scenario {} with {workers} workers",
                scenario.name
            );
        }
    }
}

#[test]
fn reference_messages() {
    let by_name = |name: &str| -> Scenario {
        reference_scenarios()
            .into_iter()
            .find(|s| s.name == name)
            .unwrap()
    };

    let right = by_name("right-then-two-forwards");
    assert_eq!(
        right.run().unwrap().message(right.target).to_string(),
        "The first instruction should be TURN RIGHT to reach the target 0,-2"
    );

    let unreachable = by_name("three-left-turns-unreachable");
    assert_eq!(
        unreachable.run().unwrap().message(unreachable.target).to_string(),
        "No valid instruction found to reach the target."
    );
}

#[test]
fn repeated_calls_share_no_state() {
    let inferrer = Inferrer::default();
    let seq = InstructionSequence::parse(["???", "FORWARD", "FORWARD"]);
    let first = inferrer.infer_first(&seq, Position::new(0, -2)).unwrap();
    let _ = inferrer.infer_first(&seq, Position::new(3, 0)).unwrap();
    let again = inferrer.infer_first(&seq, Position::new(0, -2)).unwrap();
    assert_eq!(first, again);
}

proptest! {
    #[test]
    fn planted_command_is_explained(
        seq in arb_sequence(20),
        planted in arb_command(),
        order in arb_candidate_order(),
        back_mode in arb_back_mode(),
        start_heading in arb_heading(),
    ) {
        let config = InferConfig { back_mode, start_heading, ..Default::default() };
        let truth = {
            let mut s = seq.as_slice().to_vec();
            s[0] = planted.into();
            InstructionSequence::new(s)
        };
        let target = simulate(truth.as_slice(), &config).position().unwrap();
        let inferrer = Inferrer::new(config).unwrap();

        let result = inferrer.infer(&truth, 0, &order, target).unwrap();
        let found = result.command().unwrap();
        // Anything outranking the planted command must reproduce the target too.
        prop_assert!(order.rank(found) <= order.rank(planted));
        let reports = inferrer.trials(&truth, 0, &order, target).unwrap();
        let found_report = reports.iter().find(|r| r.candidate == found).unwrap();
        prop_assert!(found_report.matches(target));
    }

    #[test]
    fn far_targets_are_never_found(
        seq in arb_sequence(8),
        target in arb_position(40),
    ) {
        // Eight instructions cannot move the robot more than eight units.
        prop_assume!(target.manhattan(Position::ORIGIN) > 8);
        let result = Inferrer::default()
            .infer(&seq, 0, &CandidateSet::default(), target)
            .unwrap();
        prop_assert_eq!(result, InferenceResult::NotFound);
    }

    #[test]
    fn insert_mode_recovers_a_dropped_command(
        seq in arb_sequence(12),
        dropped in arb_command(),
        slot_seed in 0usize..16,
    ) {
        let slot = slot_seed % (seq.len() + 1);
        let mut full = seq.as_slice().to_vec();
        full.insert(slot, dropped.into());
        let config = InferConfig { slot_mode: SlotMode::Insert, ..Default::default() };
        let target = simulate(&full, &config).position().unwrap();

        let result = Inferrer::new(config)
            .unwrap()
            .infer(&seq, slot, &CandidateSet::default(), target)
            .unwrap();
        prop_assert!(result.is_found());
        let set = CandidateSet::default();
        prop_assert!(set.rank(result.command().unwrap()) <= set.rank(dropped));
    }

    #[test]
    fn single_candidate_sets_only_ever_return_that_candidate(
        seq in arb_sequence(10),
        only in arb_command(),
        target in arb_position(3),
    ) {
        let set = CandidateSet::from([only]);
        let result = Inferrer::default().infer(&seq, 0, &set, target).unwrap();
        let allowed = [InferenceResult::NotFound, InferenceResult::Found(only)];
        prop_assert!(allowed.contains(&result));
    }
}

#[test]
fn candidates_outside_default_order_are_respected() {
    let seq = InstructionSequence::parse(["???", "TURN LEFT"]);
    let set = CandidateSet::from([Command::TurnRight, Command::TurnLeft, Command::Forward]);
    assert_eq!(
        Inferrer::default()
            .infer(&seq, 0, &set, Position::ORIGIN)
            .unwrap(),
        InferenceResult::Found(Command::TurnRight)
    );
}
