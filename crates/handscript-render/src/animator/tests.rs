use super::*;
use handscript_core::geom::point;

fn line(x0: f64, x1: f64) -> Stroke {
    Stroke::new(vec![point(x0, 0.0), point(x1, 0.0)])
}

fn two_stroke_plan() -> DrawingPlan {
    create_drawing_plan(
        vec![line(0.0, 1000.0), line(0.0, 1000.0)],
        LayoutBox::default(),
        &AnimationConfig::new(1000.0).with_pause_between_strokes(50.0),
    )
    .unwrap()
}

#[test]
fn plan_is_strictly_sequential() {
    let plan = two_stroke_plan();
    assert_eq!(plan.instructions.len(), 4);
    assert_eq!(plan.stroke_count(), 2);
    assert_eq!(plan.total_duration_ms, 2100.0);

    let kinds: Vec<bool> = plan.instructions.iter().map(|i| i.is_stroke()).collect();
    assert_eq!(kinds, vec![true, false, true, false]);

    let mut clock = 0.0;
    for instruction in &plan.instructions {
        assert_eq!(instruction.start_ms(), clock);
        assert!(instruction.end_ms() >= instruction.start_ms());
        clock = instruction.end_ms();
    }
    assert_eq!(clock, plan.total_duration_ms);
    assert_eq!(plan.instructions[0].duration_ms(), 1000.0);
    assert_eq!(plan.instructions[1].duration_ms(), 50.0);
}

#[test]
fn stroke_pause_defaults_to_fifty_ms() {
    let plan = create_drawing_plan(
        vec![line(0.0, 300.0)],
        LayoutBox::default(),
        &AnimationConfig::new(300.0),
    )
    .unwrap();
    assert_eq!(plan.instructions.len(), 2);
    assert_eq!(plan.total_duration_ms, 1050.0);
}

#[test]
fn zero_pause_emits_no_pause_instructions() {
    let config = AnimationConfig::new(100.0).with_pause_between_strokes(0.0);
    let plan = create_drawing_plan(
        vec![line(0.0, 10.0), line(0.0, 20.0)],
        LayoutBox::default(),
        &config,
    )
    .unwrap();
    assert!(plan.instructions.iter().all(DrawingInstruction::is_stroke));
    assert_eq!(plan.total_duration_ms, 300.0);
}

#[test]
fn stroke_delay_becomes_a_leading_pause() {
    let config = AnimationConfig::new(100.0).with_pause_between_strokes(0.0);
    let plan = create_drawing_plan(
        vec![line(0.0, 10.0).with_delay(40.0)],
        LayoutBox::default(),
        &config,
    )
    .unwrap();
    assert_eq!(
        plan.instructions[0],
        DrawingInstruction::Pause {
            duration_ms: 40.0,
            start_ms: 0.0,
            end_ms: 40.0,
        }
    );
    assert_eq!(plan.instructions[1].start_ms(), 40.0);
    assert_eq!(plan.total_duration_ms, 140.0);
}

#[test]
fn char_pause_precedes_each_new_glyph_but_the_first() {
    let config = AnimationConfig::new(100.0)
        .with_pause_between_strokes(0.0)
        .with_pause_between_chars(20.0);
    let strokes = vec![
        line(0.0, 10.0).starting_glyph(true),
        line(0.0, 10.0),
        line(0.0, 10.0).starting_glyph(true),
    ];
    let plan = create_drawing_plan(strokes, LayoutBox::default(), &config).unwrap();
    let kinds: Vec<bool> = plan.instructions.iter().map(|i| i.is_stroke()).collect();
    assert_eq!(kinds, vec![true, true, false, true]);
    assert_eq!(plan.instructions[2].duration_ms(), 20.0);
    assert_eq!(plan.total_duration_ms, 320.0);
}

#[test]
fn zero_length_stroke_is_kept_instantaneous() {
    let config = AnimationConfig::new(100.0).with_pause_between_strokes(0.0);
    let dot = Stroke::new(vec![point(5.0, 5.0)]);
    let plan = create_drawing_plan(vec![dot], LayoutBox::default(), &config).unwrap();
    assert_eq!(plan.instructions.len(), 1);
    assert_eq!(plan.instructions[0].duration_ms(), 0.0);
    assert_eq!(plan.total_duration_ms, 0.0);
    assert_eq!(plan.state_at(0.0), vec![vec![point(5.0, 5.0)]]);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    for speed in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let err = create_drawing_plan(
            vec![line(0.0, 1.0)],
            LayoutBox::default(),
            &AnimationConfig::new(speed),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { field: "speed", .. }), "{err}");
    }

    let err = AnimationConfig::new(100.0)
        .with_pause_between_chars(-1.0)
        .validate()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { field: "pause_between_chars", .. }));
    assert!(err.to_string().contains("pause_between_chars"));
}

#[test]
fn state_at_bounds() {
    let plan = two_stroke_plan();
    assert!(plan.state_at(0.0).is_empty());
    assert!(plan.state_at(-10.0).is_empty());

    let full = plan.state_at(plan.total_duration_ms);
    assert_eq!(full.len(), 2);
    assert_eq!(full[0], vec![point(0.0, 0.0), point(1000.0, 0.0)]);
    assert_eq!(plan.state_at(1e9), full);
}

#[test]
fn state_at_truncates_the_stroke_in_progress() {
    let plan = two_stroke_plan();
    assert_eq!(
        plan.state_at(500.0),
        vec![vec![point(0.0, 0.0), point(500.0, 0.0)]]
    );

    // During the pause the first stroke is complete and the second has not started.
    let paused = plan.state_at(1025.0);
    assert_eq!(paused, vec![vec![point(0.0, 0.0), point(1000.0, 0.0)]]);

    let second = plan.state_at(1050.0 + 250.0);
    assert_eq!(second.len(), 2);
    assert_eq!(second[1], vec![point(0.0, 0.0), point(250.0, 0.0)]);
}

#[test]
fn reveal_is_monotonic() {
    let config = AnimationConfig::new(10.0).with_pause_between_strokes(0.0);
    let zigzag = Stroke::new(vec![
        point(0.0, 0.0),
        point(3.0, 4.0),
        point(6.0, 0.0),
        point(9.0, 4.0),
    ]);
    let plan = create_drawing_plan(vec![zigzag], LayoutBox::default(), &config).unwrap();

    let mut last_count = 0;
    let mut last_len = 0.0;
    for step in 0..=150 {
        let state = plan.state_at(step as f64 * 10.0);
        let (count, len) = state
            .first()
            .map(|pts| (pts.len(), polyline_length(pts)))
            .unwrap_or((0, 0.0));
        assert!(count >= last_count);
        assert!(len + 1e-9 >= last_len);
        last_count = count;
        last_len = len;
    }
}

#[test]
fn truncate_polyline_interpolates_inside_a_segment() {
    let pts = [point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)];
    assert!(truncate_polyline(&pts, 0.0).is_empty());
    assert_eq!(truncate_polyline(&pts, 1.0), pts.to_vec());
    assert_eq!(
        truncate_polyline(&pts, 0.75),
        vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 5.0)]
    );
    assert_eq!(
        truncate_polyline(&pts, 0.25),
        vec![point(0.0, 0.0), point(5.0, 0.0)]
    );
}

#[test]
fn frames_end_on_the_complete_drawing() {
    let plan = two_stroke_plan();
    let frames: Vec<Frame> = plan.frames(10.0).unwrap().collect();

    // ceil(2100 / 100) + 1
    assert_eq!(frames.len(), 22);
    assert_eq!(plan.frames(10.0).unwrap().len(), 22);
    assert!(frames[0].strokes.is_empty());
    assert_eq!(frames[0].time_ms, 0.0);
    assert_eq!(frames[20].time_ms, 2000.0);

    let last = frames.last().unwrap();
    assert_eq!(last.time_ms, plan.total_duration_ms);
    assert_eq!(last.strokes, plan.state_at(plan.total_duration_ms));

    for pair in frames.windows(2) {
        assert!(pair[0].time_ms <= pair[1].time_ms);
    }
}

#[test]
fn frames_restart_from_scratch() {
    let plan = two_stroke_plan();
    let a: Vec<Frame> = plan.frames(24.0).unwrap().collect();
    let b: Vec<Frame> = plan.frames(24.0).unwrap().collect();
    assert_eq!(a, b);
}

#[test]
fn frames_of_an_empty_plan_is_one_final_frame() {
    let plan = create_drawing_plan(
        Vec::<Stroke>::new(),
        LayoutBox::default(),
        &AnimationConfig::default(),
    )
    .unwrap();
    let frames: Vec<Frame> = plan.frames(60.0).unwrap().collect();
    assert_eq!(frames.len(), 1);
    assert!(frames[0].strokes.is_empty());
}

#[test]
fn frames_reject_bad_fps() {
    let plan = two_stroke_plan();
    assert!(matches!(
        plan.frames(0.0),
        Err(Error::InvalidConfig { field: "fps", .. })
    ));
}

#[test]
fn frames_reject_fps_too_fine_to_count() {
    let plan = two_stroke_plan();
    assert!(matches!(
        plan.frames(1e300),
        Err(Error::InvalidConfig { field: "fps", .. })
    ));

    let frames = plan.frames(1000.0).unwrap();
    assert_eq!(frames.size_hint(), (2101, Some(2101)));
}

#[test]
fn instructions_serialize_with_type_tags() {
    let plan = two_stroke_plan();
    let value = serde_json::to_value(&plan.instructions[1]).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "type": "pause",
            "duration_ms": 50.0,
            "start_ms": 1000.0,
            "end_ms": 1050.0
        })
    );
}
