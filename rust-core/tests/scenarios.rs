use spectral_sweep::animation::{snapshot, Phase, ResamplingAnimator, ResamplingConfig};
use spectral_sweep::config::AnimationConfig;
use spectral_sweep::presets;
use spectral_sweep::signal::{extract, SlidingWindow};
use spectral_sweep::spectrum::{dft, fft_real};
use spectral_sweep::window::generate_window;
use spectral_sweep::{
    Animator, ArtifactKind, DisplayOptions, FrameSchedule, GroupAnimator, Signal, SweepConfig,
    SweepError, TransformMethod, WindowType,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn peak(xs: &[f64], ys: &[f64]) -> f64 {
    let (idx, _) = ys
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
        .unwrap();
    xs[idx]
}

#[test]
fn sample_count_sweep_converges_on_tone() {
    init_logger();

    let config = ResamplingConfig {
        t_max: 2.0,
        schedule: FrameSchedule::sample_count(),
        window: None,
        transform: TransformMethod::Fast,
        display: DisplayOptions::default(),
    };
    let mut anim = ResamplingAnimator::new(config, Signal::sine(2.0)).unwrap();

    assert_eq!(anim.initialize().unwrap()[0].x.len(), 2);
    assert_eq!(anim.step(40).unwrap()[0].x.len(), 3);

    let artifacts = anim.step(240).unwrap();
    let spectrum = &artifacts[1];
    let bin = spectrum.x[1];
    assert!((peak(spectrum.x, spectrum.y) - 2.0).abs() <= bin);
}

#[test]
fn small_windows() {
    assert_eq!(generate_window(WindowType::Rectangular, 4), vec![1.0; 4]);

    let hann = generate_window(WindowType::Hann, 4);
    assert!(hann[0].abs() < 1e-12);
    assert!(hann[3].abs() < 1e-12);
    assert!((hann[1] - hann[2]).abs() < 1e-12);
}

#[test]
fn naive_and_fast_transforms_agree() {
    let signal: Vec<f64> = (0..300).map(|i| ((i * 7) % 13) as f64 - 6.0).collect();
    let slow = dft(&signal);
    let fast = fft_real(&signal);

    let scale = fast.iter().map(|c| c.norm()).fold(0.0, f64::max);
    for (a, b) in slow.iter().zip(fast.iter()) {
        assert!((a - b).norm() / scale < 1e-9);
    }
}

#[test]
fn reconstruction_preserves_length_at_every_offset() {
    let full: Vec<f64> = (0..40).map(|i| i as f64).collect();
    let extractor = SlidingWindow::new(15, full.len()).unwrap();
    let mut view = Vec::new();

    for offset in 0..full.len() {
        let sample = extractor.sample(&full, offset).to_vec();
        extractor.reconstruct_into(&sample, offset, &mut view);
        assert_eq!(view.len(), full.len(), "offset {}", offset);

        let (sample2, view2) = extract(&full, offset, 15);
        assert_eq!(sample, sample2);
        assert_eq!(view, view2);
    }
}

#[test]
fn group_replays_deterministically() {
    init_logger();

    let mut replayed = presets::sample_time_comparison(TransformMethod::Fast).unwrap();
    replayed.initialize().unwrap();
    for frame in [120, 3, 77] {
        replayed.step(frame).unwrap();
    }

    for frame in [0, 77, 149] {
        let mut fresh = presets::sample_time_comparison(TransformMethod::Fast).unwrap();
        fresh.initialize().unwrap();
        let expected = snapshot(&fresh.step(frame).unwrap());
        assert_eq!(snapshot(&replayed.step(frame).unwrap()), expected);
    }
}

#[test]
fn drive_window_comparison_from_toml() {
    init_logger();

    let config = SweepConfig::from_toml_str(
        r#"
        transform = "naive"

        [animation]
        duration_s = 0.2
        "#,
    )
    .unwrap();
    let clock = config.animation.clock().unwrap();
    assert_eq!(clock.total_frames(), 10);

    let mut animators: Vec<Box<dyn Animator>> = Vec::new();
    for window in [WindowType::Hann, WindowType::FlatTop] {
        let resampling = ResamplingConfig {
            t_max: 2.0,
            schedule: FrameSchedule::sampling_rate(),
            window: Some(window),
            transform: config.transform,
            display: config.display.with_window(),
        };
        animators.push(Box::new(ResamplingAnimator::new(resampling, Signal::sine(4.1)).unwrap()));
    }
    let mut group = GroupAnimator::new(&config.animation, animators).unwrap();

    let mut phases = Vec::new();
    group
        .drive(|phase, artifacts| {
            // Each animator adds its reference curves once, up front
            let expected = if phase == Phase::Initialize { 10 } else { 6 };
            assert_eq!(artifacts.len(), expected);
            assert_eq!(artifacts[2].kind, ArtifactKind::WindowOverlay);
            phases.push(phase);
            Ok(())
        })
        .unwrap();

    assert_eq!(phases.len(), 11);
    assert_eq!(phases[0], Phase::Initialize);
    assert_eq!(phases[10], Phase::Frame(9));
    assert!(matches!(
        group.step(10),
        Err(SweepError::FrameOutOfRange { frame: 10, .. })
    ));
}

#[test]
fn long_sample_count_sweep_is_rejected() {
    init_logger();

    // 2000 frames would ask for exp(1999/40) samples on the last one
    let build = |duration_s: f64| {
        let config = ResamplingConfig {
            t_max: 2.0,
            schedule: FrameSchedule::sample_count(),
            window: None,
            transform: TransformMethod::Fast,
            display: DisplayOptions::default(),
        };
        let anim = ResamplingAnimator::new(config, Signal::sine(4.1)).unwrap();
        let animators: Vec<Box<dyn Animator>> = vec![Box::new(anim)];
        GroupAnimator::new(&AnimationConfig::new(duration_s), animators)
    };

    assert!(matches!(
        build(40.0),
        Err(SweepError::SampleCountTooLarge { frame: 1999, .. })
    ));
    assert!(build(7.0).is_ok());
}

#[test]
fn invalid_configuration_fails_early() {
    assert!(matches!(
        SweepConfig::from_toml_str("[animation]\ninterval_ms = 0"),
        Err(SweepError::InvalidInterval(0))
    ));
    assert!(matches!(
        SweepConfig::from_toml_str("transform = \"quantum\""),
        Err(SweepError::Config(_))
    ));
    assert!(matches!(
        Signal::sampled(Vec::new(), 100.0),
        Err(SweepError::EmptySignal)
    ));
}
