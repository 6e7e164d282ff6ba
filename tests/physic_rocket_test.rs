use canvas_fireworks::physic_engine::{
    Color, Entity, ParticleType, PhysicConfig, Rocket, StepEnv,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
mod helpers;
use helpers::RecordingSurface;

// ==================================
// 1. Création
// ==================================

#[test]
fn test_velocity_is_delta_over_travel_steps_per_axis() {
    let config = PhysicConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let start = Vec2::new(300.0, 810.0);
    let target = Vec2::new(500.0, 200.0);

    for _ in 0..100 {
        let rocket = Rocket::new(&mut rng, &config, start, target);
        let delta = target - start;
        let kx = delta.x / rocket.vel.x;
        let ky = delta.y / rocket.vel.y;
        assert!((20.0..=30.0).contains(&kx), "kx out of range: {}", kx);
        assert!((20.0..=30.0).contains(&ky), "ky out of range: {}", ky);
        assert!(rocket.ttl >= 40.0 && rocket.ttl <= 70.0);
        assert_eq!(rocket.pos, start);
        assert_eq!(rocket.target, target);
        assert_eq!(rocket.age, 0);
    }
}

#[test]
fn test_rocket_color_is_yellowish() {
    let config = PhysicConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let rocket = Rocket::new(&mut rng, &config, Vec2::ZERO, Vec2::ONE);
        let Color::Hsl { h, s, l } = rocket.color else {
            panic!("rocket color should be HSL, got {}", rocket.color);
        };
        assert!((45.0..=60.0).contains(&h), "hue out of range: {}", h);
        assert!((80.0..=100.0).contains(&s));
        assert!((50.0..=60.0).contains(&l));
    }
}

// ==================================
// 2. Pas de simulation
// ==================================

#[test]
fn test_step_moves_then_applies_gravity() {
    let config = PhysicConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut rocket =
        Rocket::new(&mut rng, &config, Vec2::new(0.0, 600.0), Vec2::new(0.0, 100.0)).with_ttl(100.0);
    let vel = rocket.vel;

    let mut env = StepEnv::new(&config, &mut rng);
    assert!(rocket.step(&mut env));
    assert_eq!(rocket.pos, Vec2::new(0.0, 600.0) + vel);
    assert!((rocket.vel.y - (vel.y + config.rocket_gravity)).abs() < 1e-6);
    assert_eq!(rocket.age, 1);
}

#[test]
fn test_trail_particles_spawn_at_rocket_position() {
    let config = PhysicConfig::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut rocket =
        Rocket::new(&mut rng, &config, Vec2::new(400.0, 810.0), Vec2::new(400.0, 200.0))
            .with_ttl(1000.0);

    let mut env = StepEnv::new(&config, &mut rng);
    for _ in 0..200 {
        let before = env.spawned.len();
        assert!(rocket.step(&mut env));
        if env.spawned.len() > before {
            let trail = &env.spawned[before];
            assert_eq!(trail.pos, rocket.pos);
            assert_eq!(trail.particle_type, ParticleType::Trail);
            assert_eq!(trail.size, config.trail_size);
            assert!(trail.vel.x.abs() <= config.trail_spread);
            assert!(trail.vel.y.abs() <= config.trail_spread);
            assert!(trail.fade);
        }
    }
    // p = 0.35 sur 200 pas : on attend ~70 traînées
    assert!(
        (30..=110).contains(&env.spawned.len()),
        "unexpected trail count: {}",
        env.spawned.len()
    );
    assert!(env.explosions.is_empty());
}

#[test]
fn test_no_trail_when_probability_is_zero() {
    let config = PhysicConfig {
        trail_probability: 0.0,
        ..PhysicConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(2);
    let mut rocket = Rocket::new(&mut rng, &config, Vec2::ZERO, Vec2::ONE).with_ttl(500.0);
    let mut env = StepEnv::new(&config, &mut rng);
    for _ in 0..100 {
        rocket.step(&mut env);
    }
    assert!(env.spawned.is_empty());
}

// ==================================
// 3. Explosion
// ==================================

#[test]
fn test_forced_ttl_explodes_after_exactly_fifty_steps() {
    // trajet de 50 pas, sans gravité : la fusée arrive pile sur sa cible
    let config = PhysicConfig {
        rocket_gravity: 0.0,
        rocket_travel_steps: [50.0, 50.0],
        ..PhysicConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    let mut rocket = Rocket::new(
        &mut rng,
        &config,
        Vec2::new(100.0, 500.0),
        Vec2::new(100.0, 100.0),
    )
    .with_ttl(50.0);

    let mut env = StepEnv::new(&config, &mut rng);
    for step in 1..50 {
        assert!(rocket.step(&mut env), "rocket died early at step {}", step);
    }
    assert!(!rocket.step(&mut env), "rocket should expire at step 50");
    assert_eq!(rocket.age, 50);

    assert_eq!(env.explosions.len(), 1);
    let at = env.explosions[0];
    assert!(at.distance(Vec2::new(100.0, 100.0)) < 1e-2, "exploded at {:?}", at);

    let burst: Vec<_> = env
        .spawned
        .iter()
        .filter(|p| p.particle_type != ParticleType::Trail)
        .collect();
    assert!(
        (31..=81).contains(&burst.len()),
        "unexpected burst size: {}",
        burst.len()
    );
    assert!(burst.iter().all(|p| p.pos == at));
}

#[test]
fn test_default_gravity_explosion_drifts_but_stays_on_x() {
    let config = PhysicConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut rocket = Rocket::new(
        &mut rng,
        &config,
        Vec2::new(100.0, 500.0),
        Vec2::new(100.0, 100.0),
    )
    .with_ttl(50.0);

    let mut env = StepEnv::new(&config, &mut rng);
    let steps = (0..100).take_while(|_| rocket.step(&mut env)).count() + 1;
    assert_eq!(steps, 50);
    assert_eq!(env.explosions.len(), 1);
    assert!((env.explosions[0].x - 100.0).abs() < 1e-3);
}

#[test]
fn test_draw_paints_rocket_color_at_full_opacity() {
    let config = PhysicConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut rocket = Rocket::new(&mut rng, &config, Vec2::new(10.0, 20.0), Vec2::ZERO);
    rocket.color = Color::hsl(45.0, 95.0, 55.0);

    let mut surface = RecordingSurface::new(100.0, 100.0);
    rocket.draw(&mut surface);

    let circles = surface.circles();
    assert_eq!(circles, vec![(Vec2::new(10.0, 20.0), config.rocket_radius, 1.0)]);
}
