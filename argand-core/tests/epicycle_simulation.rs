use argand_core::{
    base_time_step, ComponentField, ComponentList, EpicycleSimulator, FourierComponent,
    SIMULATOR_CONFIG,
};

fn example_components() -> Vec<FourierComponent> {
    vec![
        FourierComponent::new(3.0, 5.0, "#ff4d4d"),
        FourierComponent::new(1.0, -10.0, "#4d79ff"),
    ]
}

#[test]
fn first_tick_matches_closed_form() {
    let mut sim = EpicycleSimulator::new(SIMULATOR_CONFIG.clone(), example_components());
    let dt = base_time_step(&example_components(), &SIMULATOR_CONFIG);
    let frame = sim.tick();

    let x = 3.0 * (5.0 * dt).cos() + (-10.0 * dt).cos();
    let y = 3.0 * (5.0 * dt).sin() + (-10.0 * dt).sin();
    assert!((frame.time - dt).abs() < 1e-15);
    assert!((frame.tip.x() - x).abs() < 1e-12);
    assert!((frame.tip.y() - y).abs() < 1e-12);
}

#[test]
fn history_stays_bounded_over_long_runs() {
    let mut sim = EpicycleSimulator::default();
    for _ in 0..10_000 {
        sim.tick();
        assert!(sim.trail().len() <= 2000);
        assert!(sim.wave().len() <= 2000);
    }
    assert_eq!(sim.trail().len(), 2000);
    assert_eq!(sim.wave().len(), 2000);

    let wave = sim.wave().to_vec();
    assert!(wave.windows(2).all(|w| w[0].time < w[1].time));
    assert!((wave.last().unwrap().time - sim.time()).abs() < 1e-12);
}

#[test]
fn color_only_change_does_not_disturb_simulation() {
    let mut plain = EpicycleSimulator::default();
    let mut recolored = EpicycleSimulator::default();
    for _ in 0..50 {
        plain.tick();
        recolored.tick();
    }

    let mut components = example_components();
    components[1].color = "#00ff00".to_string();
    recolored.set_components(components);

    for _ in 0..50 {
        plain.tick();
        recolored.tick();
    }
    assert_eq!(plain.time(), recolored.time());
    assert_eq!(plain.trail().to_vec(), recolored.trail().to_vec());
    assert_eq!(plain.wave().to_vec(), recolored.wave().to_vec());
    assert_eq!(recolored.frame().chain[1].color, "#00ff00");
}

#[test]
fn removing_a_component_keeps_recorded_history() {
    let mut list = ComponentList::default();
    let mut sim = EpicycleSimulator::new(SIMULATOR_CONFIG.clone(), list.to_vec());
    for _ in 0..20 {
        sim.tick();
    }
    let before = sim.trail().to_vec();

    list.remove(1);
    sim.set_components(list.to_vec());
    sim.tick();

    assert_eq!(&sim.trail().to_vec()[..20], &before[..]);
    assert_eq!(sim.frame().chain.len(), 1);
}

#[test]
fn edited_list_feeds_the_simulator() {
    let mut list = ComponentList::default();
    list.edit(0, ComponentField::Omega, "20").unwrap();
    let mut sim = EpicycleSimulator::default();
    sim.set_components(list.to_vec());
    sim.tick();
    // fastest component now 20 rad/s
    assert!((sim.time() - 0.01 / 20.0).abs() < 1e-15);
}

#[test]
fn no_non_finite_output_at_extremes() {
    let extremes = vec![
        FourierComponent::new(100.0, 100.0, "a"),
        FourierComponent::new(100.0, -100.0, "b"),
        FourierComponent::new(0.0, 0.0, "c"),
        FourierComponent::new(100.0, 1e-9, "d"),
        FourierComponent::new(100.0, 0.5, "e"),
    ];
    let mut sim = EpicycleSimulator::new(SIMULATOR_CONFIG.clone(), extremes);
    sim.set_speed_multiplier(10.0);
    for _ in 0..5_000 {
        let frame = sim.tick();
        assert!(frame.tip.is_finite());
        assert!(frame.chain.iter().all(|link| link.tip.is_finite()));
    }
    assert!(sim.trail().iter().all(|p| p.is_finite()));
    assert!(sim.wave().iter().all(|s| s.amplitude.is_finite()));
}

#[test]
fn all_zero_frequencies_use_fallback_step() {
    let mut sim = EpicycleSimulator::new(
        SIMULATOR_CONFIG.clone(),
        vec![FourierComponent::new(2.0, 0.0, "#000")],
    );
    let frame = sim.tick();
    assert!((frame.time - 0.01).abs() < 1e-15);
    assert_eq!(frame.tip.x(), &2.0);
}

#[test]
fn empty_component_list_still_ticks() {
    let mut sim = EpicycleSimulator::new(SIMULATOR_CONFIG.clone(), Vec::new());
    let frame = sim.tick();
    assert!(frame.chain.is_empty());
    assert_eq!(frame.amplitude_bound, 0.0);
    assert_eq!(sim.trail().len(), 1);
}
