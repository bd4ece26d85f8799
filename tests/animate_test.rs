use approx::assert_relative_eq;
use impetus::prelude::*;
use impetus::{AnimationError, ConfigError};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Runs `config` to completion on a fixed-step driver and returns every emitted value.
fn run(config: AnimationConfig, step: f64) -> Vec<Value> {
    let driver = SyncDriver::new(step);
    let output = Rc::new(RefCell::new(Vec::new()));
    let completed = Rc::new(Cell::new(false));
    let (sink, done) = (output.clone(), completed.clone());
    config
        .driver(driver.clone())
        .on_update(move |v| sink.borrow_mut().push(v))
        .on_complete(move || done.set(true))
        .start()
        .unwrap();
    driver.run();
    assert!(completed.get(), "animation did not complete");
    let values = output.borrow().clone();
    values
}

fn numbers(values: Vec<Value>) -> Vec<f64> {
    values
        .into_iter()
        .map(|v| v.as_number().expect("expected a number"))
        .collect()
}

fn rounded(values: Vec<Value>) -> Vec<i64> {
    numbers(values).into_iter().map(|v| v.round() as i64).collect()
}

fn texts(values: Vec<Value>) -> Vec<String> {
    values.into_iter().map(|v| v.to_string()).collect()
}

fn assert_all_near(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, *e, epsilon = 1e-9);
    }
}

mod keyframes {
    use super::*;

    fn linear() -> AnimationConfig {
        AnimationConfig::new().duration(100.0).ease(Easing::Linear)
    }

    #[test]
    fn animates_with_default_settings() {
        let output = numbers(run(linear().to(100), 20.0));

        assert_all_near(&output, &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn animates_from_and_to() {
        let output = numbers(run(linear().from(50).to(150), 20.0));

        assert_all_near(&output, &[50.0, 70.0, 90.0, 110.0, 130.0, 150.0]);
    }

    #[test]
    fn animates_through_sequence() {
        let output = numbers(run(linear().to([0, 50, -20]).duration(200.0), 20.0));

        assert_all_near(
            &output,
            &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 36.0, 22.0, 8.0, -6.0, -20.0],
        );
    }

    #[test]
    fn sequence_wins_over_explicit_spring() {
        let output = numbers(run(linear().to([0, 100]).kind(GeneratorKind::Spring), 20.0));

        assert_all_near(&output, &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn velocity_with_duration_stays_keyframes() {
        let output = numbers(run(linear().from(0).to(100).velocity(50.0), 20.0));

        assert_all_near(&output, &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn animates_through_color_sequence() {
        let output = texts(run(linear().to(["#f00", "#0f0", "#00f"]), 20.0));

        assert_eq!(
            output,
            vec![
                "rgba(255, 0, 0, 1)",
                "rgba(198, 161, 0, 1)",
                "rgba(114, 228, 0, 1)",
                "rgba(0, 228, 114, 1)",
                "rgba(0, 161, 198, 1)",
                "rgba(0, 0, 255, 1)",
            ]
        );
    }

    #[test]
    fn animates_between_colors() {
        let output = texts(run(linear().from("#f00").to("#00f"), 20.0));

        assert_eq!(
            output,
            vec![
                "rgba(255, 0, 0, 1)",
                "rgba(228, 0, 114, 1)",
                "rgba(198, 0, 161, 1)",
                "rgba(161, 0, 198, 1)",
                "rgba(114, 0, 228, 1)",
                "rgba(0, 0, 255, 1)",
            ]
        );
    }

    #[test]
    fn animates_unit_strings() {
        let output = texts(run(linear().from("0%").to("200%"), 20.0));

        assert_eq!(output, vec!["0%", "40%", "80%", "120%", "160%", "200%"]);
    }

    #[test]
    fn negative_elapsed_delays_start() {
        let output = numbers(run(linear().to(100).elapsed(-100.0), 20.0));

        assert_all_near(
            &output,
            &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 20.0, 40.0, 60.0, 80.0, 100.0],
        );
    }

    #[test]
    fn offsets_reshape_segments() {
        let output = numbers(run(
            linear().to([0, 100, 200]).offsets(vec![0.0, 0.8, 1.0]),
            20.0,
        ));

        assert_all_near(&output, &[0.0, 25.0, 50.0, 75.0, 100.0, 200.0]);
    }

    #[test]
    fn per_segment_easing() {
        let output = numbers(run(
            linear()
                .to([0, 100, 200])
                .eases(vec![Easing::Linear, Easing::InQuad]),
            25.0,
        ));

        assert_all_near(&output, &[0.0, 50.0, 100.0, 125.0, 200.0]);
    }

    #[test]
    fn default_easing_is_not_linear() {
        let output = numbers(run(AnimationConfig::new().to(100).duration(100.0), 20.0));

        assert_eq!(output.len(), 6);
        assert!(output[1] < 20.0);
        assert!(output[4] > 80.0);
        assert_eq!(output[5], 100.0);
    }
}

mod repeat {
    use super::*;

    fn linear() -> AnimationConfig {
        AnimationConfig::new()
            .to(100)
            .duration(100.0)
            .ease(Easing::Linear)
    }

    #[test]
    fn loops() {
        let output = numbers(run(linear().repeat(Repeat::Times(1)), 20.0));

        assert_all_near(
            &output,
            &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 20.0, 40.0, 60.0, 80.0, 100.0],
        );
    }

    #[test]
    fn reverses() {
        let output = numbers(run(
            linear()
                .repeat(Repeat::Times(1))
                .repeat_type(RepeatType::Reverse),
            20.0,
        ));

        assert_all_near(
            &output,
            &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 80.0, 60.0, 40.0, 20.0, 0.0],
        );
        let cycle = output.len() / 2;
        for i in 0..=cycle {
            assert_relative_eq!(output[i], output[output.len() - 1 - i], epsilon = 1e-9);
        }
    }

    #[test]
    fn mirrors() {
        let output = numbers(run(
            linear()
                .ease(Easing::OutQuad)
                .repeat(Repeat::Times(1))
                .repeat_type(RepeatType::Mirror),
            20.0,
        ));

        assert_all_near(
            &output,
            &[0.0, 36.0, 64.0, 84.0, 96.0, 100.0, 64.0, 36.0, 16.0, 4.0, 0.0],
        );
    }

    #[test]
    fn mirror_differs_from_reverse_with_nonlinear_easing() {
        let eased = || {
            linear()
                .ease(Easing::OutQuad)
                .repeat(Repeat::Times(1))
        };
        let mirrored = numbers(run(eased().repeat_type(RepeatType::Mirror), 20.0));
        let reversed = numbers(run(eased().repeat_type(RepeatType::Reverse), 20.0));

        assert_ne!(mirrored, reversed);
    }

    #[test]
    fn holds_during_repeat_delay() {
        let output = numbers(run(
            linear().repeat(Repeat::Times(2)).repeat_delay(100.0),
            20.0,
        ));

        let mut expected = vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0];
        for _ in 0..2 {
            expected.extend([100.0; 5]);
            expected.extend([20.0, 40.0, 60.0, 80.0, 100.0]);
        }
        assert_all_near(&output, &expected);
    }

    #[test]
    fn holds_during_repeat_delay_when_reversing() {
        let output = numbers(run(
            linear()
                .repeat(Repeat::Times(2))
                .repeat_delay(100.0)
                .repeat_type(RepeatType::Reverse),
            20.0,
        ));

        let mut expected = vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0];
        expected.extend([100.0; 5]);
        expected.extend([80.0, 60.0, 40.0, 20.0, 0.0]);
        expected.extend([0.0; 5]);
        expected.extend([20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_all_near(&output, &expected);
    }

    #[test]
    fn holds_during_repeat_delay_when_mirroring() {
        let output = numbers(run(
            linear()
                .ease(Easing::OutQuad)
                .repeat(Repeat::Times(2))
                .repeat_delay(100.0)
                .repeat_type(RepeatType::Mirror),
            20.0,
        ));

        let mut expected = vec![0.0, 36.0, 64.0, 84.0, 96.0, 100.0];
        expected.extend([100.0; 5]);
        expected.extend([64.0, 36.0, 16.0, 4.0, 0.0]);
        expected.extend([0.0; 5]);
        expected.extend([36.0, 64.0, 84.0, 96.0, 100.0]);
        assert_all_near(&output, &expected);
    }

    #[test]
    fn fires_on_repeat_once_per_boundary() {
        let driver = SyncDriver::new(20.0);
        let events = Rc::new(RefCell::new(Vec::new()));
        let (updates, repeats, completes) = (events.clone(), events.clone(), events.clone());
        linear()
            .repeat(Repeat::Times(2))
            .repeat_delay(40.0)
            .driver(driver.clone())
            .on_update(move |v| updates.borrow_mut().push(format!("update {v}")))
            .on_repeat(move || repeats.borrow_mut().push("repeat".to_string()))
            .on_complete(move || completes.borrow_mut().push("complete".to_string()))
            .start()
            .unwrap();
        driver.run();

        let events = events.borrow();
        assert_eq!(events.iter().filter(|e| *e == "repeat").count(), 2);
        // The boundary's held value is reported before the repeat.
        let first_repeat = events.iter().position(|e| e == "repeat").unwrap();
        assert_eq!(events[first_repeat - 1], "update 100");
        assert_eq!(events.last().map(String::as_str), Some("complete"));
    }

    #[test]
    fn infinite_repeat_runs_until_stopped() {
        let driver = SyncDriver::new(20.0);
        let updates = Rc::new(Cell::new(0));
        let count = updates.clone();
        let controls: Rc<RefCell<Option<AnimationControls>>> = Rc::new(RefCell::new(None));
        let handle = controls.clone();
        let started = linear()
            .repeat(Repeat::Infinite)
            .driver(driver.clone())
            .on_update(move |_| {
                count.set(count.get() + 1);
                if count.get() == 50 {
                    if let Some(controls) = handle.borrow().as_ref() {
                        controls.stop();
                    }
                }
            })
            .start()
            .unwrap();
        *controls.borrow_mut() = Some(started.clone());

        assert_eq!(driver.run(), 50);
        assert_eq!(updates.get(), 50);
        assert_eq!(started.playback(), Playback::Stopped);
    }
}

mod springs {
    use super::*;

    const UNDERDAMPED: [i64; 31] = [
        100, 371, 884, 1259, 1343, 1204, 1006, 883, 873, 937, 1011, 1050, 1046, 1018, 991, 980,
        984, 996, 1005, 1008, 1005, 1001, 998, 997, 998, 1000, 1001, 1001, 1001, 1000, 1000,
    ];

    fn underdamped() -> AnimationConfig {
        AnimationConfig::new()
            .from(100)
            .to(1000)
            .stiffness(300.0)
            .rest_speed(10.0)
            .rest_delta(0.5)
    }

    #[test]
    fn runs_underdamped() {
        assert_eq!(rounded(run(underdamped(), 50.0)), UNDERDAMPED.to_vec());
    }

    #[test]
    fn runs_overdamped() {
        let output = rounded(run(underdamped().damping(100.0), 250.0));

        assert_eq!(
            output,
            vec![100, 571, 802, 909, 958, 981, 991, 996, 998, 999, 1000]
        );
    }

    #[test]
    fn runs_critically_damped() {
        let config = AnimationConfig::new()
            .from(100)
            .to(1000)
            .stiffness(100.0)
            .damping(20.0)
            .rest_speed(10.0)
            .rest_delta(0.5);

        assert_eq!(
            rounded(run(config, 50.0)),
            vec![
                100, 181, 338, 498, 635, 741, 821, 878, 918, 945, 964, 976, 984, 990, 993, 996, 997,
                998, 999, 999, 1000
            ]
        );
    }

    #[test]
    fn runs_explicit_spring_with_defaults() {
        let config = AnimationConfig::new()
            .kind(GeneratorKind::Spring)
            .from(0)
            .to(200)
            .rest_speed(10.0)
            .rest_delta(0.5);

        assert_eq!(
            rounded(run(config, 50.0)),
            vec![
                0, 21, 68, 122, 170, 205, 225, 232, 231, 224, 215, 207, 200, 197, 195, 195, 196,
                197, 199, 200, 200, 201, 201, 201, 201, 200
            ]
        );
    }

    #[test]
    fn runs_on_colors() {
        let output = texts(run(
            AnimationConfig::new()
                .from("#f00")
                .to("#00f")
                .stiffness(300.0)
                .rest_speed(10.0)
                .rest_delta(0.5),
            50.0,
        ));

        assert_eq!(
            output,
            vec![
                "rgba(255, 0, 0, 1)",
                "rgba(213, 0, 140, 1)",
                "rgba(92, 0, 238, 1)",
                "rgba(0, 0, 255, 1)",
                "rgba(0, 0, 255, 1)",
                "rgba(0, 0, 255, 1)",
                "rgba(0, 0, 255, 1)",
                "rgba(92, 0, 238, 1)",
                "rgba(96, 0, 236, 1)",
                "rgba(67, 0, 246, 1)",
                "rgba(0, 0, 255, 1)",
                "rgba(0, 0, 255, 1)",
                "rgba(0, 0, 255, 1)",
                "rgba(0, 0, 255, 1)",
                "rgba(25, 0, 254, 1)",
                "rgba(38, 0, 252, 1)",
                "rgba(34, 0, 253, 1)",
                "rgba(18, 0, 254, 1)",
                "rgba(0, 0, 255, 1)",
                "rgba(0, 0, 255, 1)",
                "rgba(0, 0, 255, 1)",
                "rgba(0, 0, 255, 1)",
            ]
        );
    }

    #[test]
    fn repeats() {
        let output = rounded(run(underdamped().repeat(Repeat::Times(1)), 50.0));

        let mut expected = UNDERDAMPED.to_vec();
        expected.extend_from_slice(&UNDERDAMPED[1..]);
        assert_eq!(output, expected);
    }

    #[test]
    fn repeats_with_delay() {
        let output = rounded(run(
            underdamped().repeat(Repeat::Times(2)).repeat_delay(300.0),
            50.0,
        ));

        let mut expected = UNDERDAMPED.to_vec();
        for _ in 0..2 {
            expected.extend([1000; 6]);
            expected.extend_from_slice(&UNDERDAMPED[1..]);
        }
        assert_eq!(output, expected);
    }

    #[test]
    fn repeats_reversed() {
        let output = rounded(run(
            underdamped()
                .repeat(Repeat::Times(1))
                .repeat_type(RepeatType::Reverse),
            50.0,
        ));

        let mut expected = UNDERDAMPED.to_vec();
        expected.extend(UNDERDAMPED[..UNDERDAMPED.len() - 1].iter().rev());
        assert_eq!(output, expected);
    }

    #[test]
    fn repeats_reversed_with_delay() {
        let output = rounded(run(
            underdamped()
                .repeat(Repeat::Times(2))
                .repeat_type(RepeatType::Reverse)
                .repeat_delay(300.0),
            100.0,
        ));

        let forward: Vec<i64> = UNDERDAMPED.iter().step_by(2).copied().collect();
        let mut expected = forward.clone();
        expected.extend([1000; 3]);
        expected.extend(forward[..forward.len() - 1].iter().rev());
        expected.extend([100; 3]);
        expected.extend_from_slice(&forward[1..]);
        assert_eq!(output, expected);
    }

    #[test]
    fn repeats_mirrored() {
        let output = rounded(run(
            underdamped()
                .repeat(Repeat::Times(1))
                .repeat_type(RepeatType::Mirror),
            50.0,
        ));

        let mut expected = UNDERDAMPED.to_vec();
        expected.extend([
            729, 216, -159, -243, -104, 94, 217, 227, 163, 89, 50, 54, 82, 109, 120, 116, 104, 95,
            92, 95, 99, 102, 103, 102, 100, 99, 99, 99, 100, 100,
        ]);
        assert_eq!(output, expected);
    }

    #[test]
    fn repeats_mirrored_with_delay() {
        let output = rounded(run(
            underdamped()
                .repeat(Repeat::Times(2))
                .repeat_type(RepeatType::Mirror)
                .repeat_delay(300.0),
            100.0,
        ));

        let forward: Vec<i64> = UNDERDAMPED.iter().step_by(2).copied().collect();
        let mut expected = forward.clone();
        expected.extend([1000; 3]);
        expected.extend([
            216, -243, 94, 227, 89, 54, 109, 116, 95, 95, 102, 102, 99, 99, 100,
        ]);
        expected.extend([100; 3]);
        expected.extend_from_slice(&forward[1..]);
        assert_eq!(output, expected);
    }

    #[test]
    fn finishes_with_explicit_velocity() {
        let output = run(
            AnimationConfig::new()
                .from(100)
                .to(1000)
                .stiffness(300.0)
                .velocity(200.0)
                .repeat(Repeat::Times(2))
                .repeat_type(RepeatType::Mirror)
                .repeat_delay(300.0),
            100.0,
        );

        assert_eq!(output.last(), Some(&Value::Number(1000.0)));
    }

    #[test]
    fn duration_based_spring_finishes_on_time() {
        let output = numbers(run(
            AnimationConfig::new()
                .kind(GeneratorKind::Spring)
                .to(100)
                .duration(500.0)
                .bounce(0.3),
            50.0,
        ));

        assert_eq!(output.len(), 11);
        assert_eq!(output.last(), Some(&100.0));
        assert!(output.iter().any(|v| *v > 100.0), "bouncy spring should overshoot");
    }

    #[test]
    fn explicit_kind_ignores_easing() {
        let output = numbers(run(
            AnimationConfig::new()
                .kind(GeneratorKind::Spring)
                .to(100)
                .duration(100.0)
                .ease(Easing::Linear),
            20.0,
        ));

        assert_ne!(output, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(output.last(), Some(&100.0));
    }

    #[test]
    fn runs_on_unit_strings_with_duration() {
        let output = texts(run(
            AnimationConfig::new()
                .kind(GeneratorKind::Spring)
                .from("0%")
                .to("200%")
                .duration(100.0)
                .ease(Easing::Linear),
            50.0,
        ));

        assert_eq!(output.len(), 3);
        assert_eq!(output[0], "0%");
        assert_eq!(output[2], "200%");
        let overshoot: f64 = output[1]
            .strip_suffix('%')
            .and_then(|number| number.parse().ok())
            .expect("expected a percentage");
        assert!(overshoot > 200.0 && overshoot < 210.0, "{overshoot}");
    }
}

mod decay {
    use super::*;

    fn thrown(velocity: f64) -> AnimationConfig {
        AnimationConfig::new()
            .kind(GeneratorKind::Decay)
            .from(100)
            .velocity(velocity)
            .power(0.8)
    }

    #[test]
    fn stays_still_with_no_velocity() {
        let output = rounded(run(thrown(0.0).time_constant(750.0), 200.0));

        assert_eq!(output, vec![100]);
    }

    #[test]
    fn glides_to_rest() {
        let output = rounded(run(thrown(100.0), 200.0));

        assert_eq!(output, vec![100, 135, 154, 166, 172, 175, 177, 179, 179, 180]);
    }

    #[test]
    fn modifies_target() {
        let output = rounded(run(thrown(100.0).modify_target(|v| v * 2.0), 200.0));

        assert_eq!(
            output,
            vec![100, 213, 277, 313, 334, 345, 352, 355, 357, 358, 359, 360]
        );
    }

    #[test]
    fn repeats() {
        let output = rounded(run(thrown(100.0).repeat(Repeat::Times(1)), 200.0));

        let glide = [135, 154, 166, 172, 175, 177, 179, 179, 180];
        let mut expected = vec![100];
        expected.extend(glide);
        expected.extend(glide);
        assert_eq!(output, expected);
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn stops_from_inside_update() {
        let driver = SyncDriver::new(20.0);
        let output = Rc::new(RefCell::new(Vec::new()));
        let stopped = Rc::new(Cell::new(0));
        let completed = Rc::new(Cell::new(false));
        let controls: Rc<RefCell<Option<AnimationControls>>> = Rc::new(RefCell::new(None));
        let (sink, handle) = (output.clone(), controls.clone());
        let (stops, done) = (stopped.clone(), completed.clone());
        let started = AnimationConfig::new()
            .to(100)
            .duration(100.0)
            .ease(Easing::Linear)
            .driver(driver.clone())
            .on_update(move |v| {
                let v = v.as_number().unwrap();
                sink.borrow_mut().push(v);
                if v == 40.0 {
                    if let Some(controls) = handle.borrow().as_ref() {
                        controls.stop();
                        controls.stop();
                    }
                }
            })
            .on_stop(move || stops.set(stops.get() + 1))
            .on_complete(move || done.set(true))
            .start()
            .unwrap();
        *controls.borrow_mut() = Some(started.clone());
        driver.run();

        assert_eq!(*output.borrow(), vec![0.0, 20.0, 40.0]);
        assert_eq!(stopped.get(), 1);
        assert!(!completed.get());
        assert_eq!(started.playback(), Playback::Stopped);
    }

    #[test]
    fn independent_runs_share_a_driver() {
        let driver = ManualDriver::new();
        let (fast, slow) = (
            Rc::new(RefCell::new(Vec::new())),
            Rc::new(RefCell::new(Vec::new())),
        );
        let (fast_sink, slow_sink) = (fast.clone(), slow.clone());
        let first = AnimationConfig::new()
            .to(10)
            .duration(10.0)
            .ease(Easing::Linear)
            .driver(driver.clone())
            .on_update(move |v| fast_sink.borrow_mut().push(v))
            .start()
            .unwrap();
        let second = AnimationConfig::new()
            .to(10)
            .duration(20.0)
            .ease(Easing::Linear)
            .driver(driver.clone())
            .on_update(move |v| slow_sink.borrow_mut().push(v))
            .start()
            .unwrap();
        for t in [0.0, 10.0, 20.0] {
            driver.tick(t);
        }

        assert_eq!(
            *fast.borrow(),
            vec![Value::Number(0.0), Value::Number(10.0)]
        );
        assert_eq!(
            *slow.borrow(),
            vec![Value::Number(0.0), Value::Number(5.0), Value::Number(10.0)]
        );
        assert_eq!(first.playback(), Playback::Completed);
        assert_eq!(second.playback(), Playback::Completed);
        assert!(!driver.has_subscribers());
    }

    #[test]
    fn spring_run_reports_its_kind() {
        let controls = AnimationConfig::new()
            .to(5)
            .damping(12.0)
            .driver(ManualDriver::new())
            .start()
            .unwrap();

        assert_eq!(controls.kind(), GeneratorKind::Spring);
        assert!(controls.is_running());
    }
}

mod errors {
    use super::*;

    fn start(config: AnimationConfig) -> Result<AnimationControls, AnimationError> {
        config.driver(ManualDriver::new()).start()
    }

    #[test]
    fn rejects_single_keyframe() {
        let result = start(AnimationConfig::new().to(vec![5]));

        assert_eq!(
            result.unwrap_err(),
            AnimationError::Config(ConfigError::TooFewKeyframes(1))
        );
    }

    #[test]
    fn rejects_unknown_kind_name() {
        assert_eq!(
            "tween".parse::<GeneratorKind>(),
            Err(ConfigError::UnknownType("tween".to_string()))
        );
    }

    #[test]
    fn rejects_mismatched_shapes() {
        let result = start(AnimationConfig::new().from("10px").to("10px 20px"));

        assert!(matches!(
            result.unwrap_err(),
            AnimationError::ShapeMismatch { .. }
        ));
    }

    #[test]
    fn rejects_text_decay() {
        let result = start(
            AnimationConfig::new()
                .kind(GeneratorKind::Decay)
                .from("#fff")
                .velocity(10.0),
        );

        assert_eq!(
            result.unwrap_err(),
            AnimationError::Config(ConfigError::NonNumericDecay)
        );
    }

    #[test]
    fn rejects_wrong_easing_count() {
        let result = start(
            AnimationConfig::new()
                .to([0, 1, 2])
                .eases(vec![Easing::Linear]),
        );

        assert_eq!(
            result.unwrap_err(),
            AnimationError::Config(ConfigError::EasingCount {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn requires_driver() {
        assert_eq!(
            AnimationConfig::new().to(1).start().unwrap_err(),
            AnimationError::Config(ConfigError::MissingDriver)
        );
    }
}
